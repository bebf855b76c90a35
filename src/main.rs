//! Boggle Solver - CLI
//!
//! Play, solve and benchmark 4x4 word-search boards from the terminal.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{check_word, run_benchmark, run_play, seeded_boards, solve_board},
    config::{DEFAULT_DURATION_SECS, GameConfig},
    core::Board,
    dictionary::{LoadOptions, LoadStats, Trie, load_embedded, load_from_file},
    game::Session,
    log::init_logger,
    output::{print_benchmark_result, print_check_result, print_load_stats, print_solve_result},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "4x4 word-search game and solver for Spanish word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded Spanish list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Require a vowel in every dictionary word
    #[arg(long, global = true)]
    require_vowel: bool,

    /// Debug logging and dictionary statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a timed round in the terminal (default)
    Play {
        /// Player name
        #[arg(short, long, default_value = "player")]
        name: String,

        /// Preset board, 16 letters row by row (spaces and '/' ignored)
        #[arg(short, long)]
        board: Option<String>,

        /// Seed for a reproducible random board
        #[arg(short, long)]
        seed: Option<u64>,

        /// Round length in seconds, 0 for no limit
        #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS)]
        duration: u64,
    },

    /// List every word on a board
    Solve {
        /// Preset board, 16 letters row by row
        #[arg(short, long)]
        board: Option<String>,

        /// Seed for a reproducible random board
        #[arg(short, long)]
        seed: Option<u64>,

        /// Shortest word to list
        #[arg(short, long, default_value = "3")]
        min_len: usize,

        /// List every dictionary word, skipping the listing heuristic
        #[arg(short, long)]
        all: bool,

        /// Show the cell path of each word
        #[arg(short, long)]
        paths: bool,
    },

    /// Validate a single word against a board
    Check {
        /// Word to check
        word: String,

        /// Board, 16 letters row by row
        #[arg(short, long)]
        board: String,
    },

    /// Solve many random boards in parallel
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for the generated boards
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let load_options = LoadOptions {
        require_vowel: cli.require_vowel,
        ..LoadOptions::default()
    };
    let config = GameConfig::default().with_load_options(load_options);

    let (dictionary, stats) = load_dictionary(&cli.wordlist, &config.load_options)?;
    if cli.verbose {
        print_load_stats(&stats);
    }

    let command = cli.command.unwrap_or(Commands::Play {
        name: "player".to_string(),
        board: None,
        seed: None,
        duration: DEFAULT_DURATION_SECS,
    });

    match command {
        Commands::Play {
            name,
            board,
            seed,
            duration,
        } => {
            let board = pick_board(board.as_deref(), seed)?;
            let config = config.with_duration_secs(duration);
            run_play_command(&name, board, &dictionary, &config)
        }
        Commands::Solve {
            board,
            seed,
            min_len,
            all,
            paths,
        } => {
            let board = pick_board(board.as_deref(), seed)?;
            let config = config.with_min_len(min_len).with_listing_filter(!all);
            let result = solve_board(&board, &dictionary, &config);
            print_solve_result(&result, paths);
            Ok(())
        }
        Commands::Check { word, board } => {
            let board = parse_board(&board)?;
            print_check_result(&check_word(&word, &board, &dictionary));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Solving {count} random boards (seed {seed})...");
            let boards = seeded_boards(count, seed);
            let result = run_benchmark(&boards, &dictionary, &config, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary based on the -w flag
///
/// - "all": the embedded Spanish list
/// - "<path>": a word list file, one entry per line
fn load_dictionary(wordlist: &str, options: &LoadOptions) -> Result<(Trie, LoadStats)> {
    match wordlist {
        "all" => Ok(load_embedded(options)),
        path => load_from_file(path, options)
            .with_context(|| format!("failed to load word list from {path}")),
    }
}

fn parse_board(letters: &str) -> Result<Board> {
    Board::parse(letters).with_context(|| format!("invalid board {letters:?}"))
}

/// A preset board if given, else a random one (seeded when asked)
fn pick_board(preset: Option<&str>, seed: Option<u64>) -> Result<Board> {
    match (preset, seed) {
        (Some(letters), _) => parse_board(letters),
        (None, Some(seed)) => Ok(Board::random(&mut StdRng::seed_from_u64(seed))),
        (None, None) => Ok(Board::random(&mut rand::rng())),
    }
}

fn run_play_command(
    name: &str,
    board: Board,
    dictionary: &Trie,
    config: &GameConfig,
) -> Result<()> {
    let mut session = Session::new(name, board, dictionary).context("cannot start session")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut session, config, stdin.lock(), &mut stdout).context("terminal I/O failed")?;
    Ok(())
}
