//! Display functions for command results

use super::formatters::{create_progress_bar, format_board, format_path, plural_words};
use crate::commands::{BenchmarkResult, CheckResult, SolveResult};
use crate::dictionary::LoadStats;
use colored::Colorize;

/// Print every word of a solved board, grouped by length
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", format_board(&result.board, &[]));
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words on this board.".yellow());
        return;
    }

    for (len, words) in result.by_length() {
        println!(
            "\n{} ({})",
            format!("{len} letters").bright_cyan().bold(),
            words.len()
        );
        if show_paths {
            for found in words {
                println!(
                    "  {:<16} {:>2} pts  {}",
                    found.word.to_uppercase(),
                    found.points,
                    format_path(&found.path).bright_black()
                );
            }
        } else {
            let list: Vec<String> = words.iter().map(|w| w.word.to_uppercase()).collect();
            println!("  {}", list.join("  "));
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} · {} points available",
            plural_words(result.words.len()),
            result.total_points
        )
        .green()
        .bold()
    );
    if let Some(longest) = result.longest() {
        println!("Longest: {}", longest.word.to_uppercase().bright_yellow());
        println!("{}", format_board(&result.board, &longest.path));
    }
}

/// Print the outcome of checking one word
pub fn print_check_result(result: &CheckResult) {
    let word = if result.validation.normalized.is_empty() {
        result.raw.clone()
    } else {
        result.validation.normalized.to_uppercase()
    };

    if result.validation.is_ok() {
        println!(
            "\n{} {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            format!("(+{})", result.points).bright_green()
        );
    } else {
        println!(
            "\n{} {}: {}",
            "✗".red().bold(),
            word.bright_white().bold(),
            result.validation.status.to_string().red()
        );
    }

    if let Some(path) = &result.path {
        println!("  Path: {}", format_path(path));
        println!("{}", format_board(&result.board, path));
    }
}

/// Print the counters from loading a word list
pub fn print_load_stats(stats: &LoadStats) {
    println!(
        "{} {}",
        "Dictionary:".bright_cyan().bold(),
        stats.to_string().bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest words:     {}", format!("{}", result.min_words).yellow());
    println!("   Most words:       {}", format!("{}", result.max_words).green());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if !result.longest_distribution.is_empty() {
        println!("\n📈 {}", "Longest word per board:".bright_cyan().bold());
        for (&len, &count) in &result.longest_distribution {
            let pct = (count as f64 / result.total_boards as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {len:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if let Some((board, count)) = &result.richest_board {
        println!(
            "\n🏆 {} ({})",
            "Richest board".bright_cyan().bold(),
            plural_words(*count)
        );
        println!("{}", format_board(board, &[]));
    }
}
