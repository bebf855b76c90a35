//! Board solving command
//!
//! Lists every word on one board with the path that spells it.

use crate::config::GameConfig;
use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::game::points_for_length;
use crate::solver::Solver;
use std::collections::BTreeMap;

/// A word found on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<usize>,
    pub points: u32,
}

/// Result of solving a board
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub board: Board,
    /// Longest first, then alphabetical
    pub words: Vec<FoundWord>,
    pub total_points: u32,
}

impl SolveResult {
    /// Words grouped by length, longest group first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, Vec<&FoundWord>)> {
        let mut groups: BTreeMap<usize, Vec<&FoundWord>> = BTreeMap::new();
        for found in &self.words {
            groups.entry(found.word.len()).or_default().push(found);
        }
        groups.into_iter().rev().collect()
    }

    #[must_use]
    pub fn longest(&self) -> Option<&FoundWord> {
        self.words.first()
    }
}

/// Find every dictionary word on `board`
///
/// Applies the listing heuristic when `config.listing_filter` is set.
pub fn solve_board<D>(board: &Board, dictionary: &D, config: &GameConfig) -> SolveResult
where
    D: Dictionary + ?Sized,
{
    let solver = Solver::for_board(board);
    let found = if config.listing_filter {
        solver.find_all_words_filtered(dictionary, config.min_len)
    } else {
        solver.find_all_words(dictionary, config.min_len)
    };

    let mut words: Vec<FoundWord> = found
        .into_iter()
        .filter_map(|word| {
            let path = solver.reconstruct_path(&word)?;
            let points = points_for_length(word.len());
            Some(FoundWord { word, path, points })
        })
        .collect();
    words.sort_by(|a, b| {
        b.word
            .len()
            .cmp(&a.word.len())
            .then_with(|| a.word.cmp(&b.word))
    });

    let total_points = words.iter().map(|w| w.points).sum();
    SolveResult {
        board: board.clone(),
        words,
        total_points,
    }
}
