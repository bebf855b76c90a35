//! Benchmark command
//!
//! Solves many random boards in parallel and reports how many words they
//! hold and how fast the search runs.

use crate::config::GameConfig;
use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Board with the most words, and that count
    pub richest_board: Option<(Board, usize)>,
    /// Number of boards per longest-word length
    pub longest_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate `count` boards from `seed`
///
/// The same seed always yields the same boards.
#[must_use]
pub fn seeded_boards(count: usize, seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Board::random(&mut rng)).collect()
}

/// Solve every board in parallel
///
/// Shows a progress bar when `show_progress` is set.
pub fn run_benchmark<D>(
    boards: &[Board],
    dictionary: &D,
    config: &GameConfig,
    show_progress: bool,
) -> BenchmarkResult
where
    D: Dictionary + Sync + ?Sized,
{
    let pb = if show_progress {
        ProgressBar::new(boards.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let per_board: Vec<(usize, usize)> = boards
        .par_iter()
        .map(|board| {
            let words = Solver::for_board(board).find_all_words(dictionary, config.min_len);
            let longest = words.iter().map(String::len).max().unwrap_or(0);
            pb.inc(1);
            (words.len(), longest)
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_boards = boards.len();
    let total_words: usize = per_board.iter().map(|(count, _)| count).sum();
    let mut longest_distribution = BTreeMap::new();
    for &(_, longest) in &per_board {
        *longest_distribution.entry(longest).or_insert(0) += 1;
    }
    let richest_board = per_board
        .iter()
        .enumerate()
        .max_by_key(|(index, (count, _))| (*count, std::cmp::Reverse(*index)))
        .map(|(index, (count, _))| (boards[index].clone(), *count));

    log::info!(
        "benchmark: {total_boards} boards, {total_words} words in {:.2}s",
        duration.as_secs_f64()
    );

    BenchmarkResult {
        total_boards,
        total_words,
        average_words: if total_boards == 0 {
            0.0
        } else {
            total_words as f64 / total_boards as f64
        },
        min_words: per_board.iter().map(|(count, _)| *count).min().unwrap_or(0),
        max_words: per_board.iter().map(|(count, _)| *count).max().unwrap_or(0),
        richest_board,
        longest_distribution,
        duration,
        boards_per_second: if duration.is_zero() {
            0.0
        } else {
            total_boards as f64 / duration.as_secs_f64()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{LoadOptions, Trie, load_embedded};

    fn dictionary() -> Trie {
        load_embedded(&LoadOptions::default()).0
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        assert_eq!(seeded_boards(5, 42), seeded_boards(5, 42));
        assert_ne!(seeded_boards(5, 42), seeded_boards(5, 43));
        assert_eq!(seeded_boards(0, 1).len(), 0);
    }

    #[test]
    fn benchmark_runs() {
        let boards = seeded_boards(20, 7);
        let result = run_benchmark(&boards, &dictionary(), &GameConfig::default(), false);

        assert_eq!(result.total_boards, 20);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn distribution_sums_to_board_count() {
        let boards = seeded_boards(15, 3);
        let result = run_benchmark(&boards, &dictionary(), &GameConfig::default(), false);
        let sum: usize = result.longest_distribution.values().sum();
        assert_eq!(sum, result.total_boards);
    }

    #[test]
    fn totals_match_sequential_solve() {
        let dictionary = dictionary();
        let boards = seeded_boards(10, 11);
        let config = GameConfig::default();
        let expected: usize = boards
            .iter()
            .map(|b| Solver::for_board(b).find_all_words(&dictionary, config.min_len).len())
            .sum();

        let result = run_benchmark(&boards, &dictionary, &config, false);
        assert_eq!(result.total_words, expected);
        let (_, richest) = result.richest_board.unwrap();
        assert_eq!(richest, result.max_words);
    }

    #[test]
    fn empty_benchmark() {
        let result = run_benchmark(&[], &dictionary(), &GameConfig::default(), false);
        assert_eq!(result.total_boards, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.richest_board.is_none());
        assert!(result.longest_distribution.is_empty());
    }
}
