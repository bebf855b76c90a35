//! Formatting utilities for terminal output

use crate::core::{Board, COLS};
use colored::Colorize;

/// Render the board as a grid, highlighting the cells on `path`
///
/// Highlighted cells show their letter in bold green; the first cell of the
/// path is also underlined.
#[must_use]
pub fn format_board(board: &Board, path: &[usize]) -> String {
    let letters = board.letters();
    let mut out = String::new();

    for (index, &letter) in letters.iter().enumerate() {
        let text = char::from(letter).to_ascii_uppercase().to_string();
        let cell = match path.iter().position(|&p| p == index) {
            Some(0) => text.bright_green().bold().underline().to_string(),
            Some(_) => text.bright_green().bold().to_string(),
            None => text.bright_white().to_string(),
        };

        let col = index % COLS;
        if col == 0 {
            out.push_str("  ");
        }
        out.push_str(&cell);
        if col + 1 < COLS {
            out.push_str("  ");
        } else if index + 1 < letters.len() {
            out.push('\n');
        }
    }
    out
}

/// Format a cell path as row/column pairs, `(2,0) → (2,1) → (2,2)`
#[must_use]
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|&i| format!("({},{})", i / COLS, i % COLS))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Word count with the right noun, `1 word` / `3 words`
#[must_use]
pub fn plural_words(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}
