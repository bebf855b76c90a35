//! Path search over the board graph
//!
//! Words are traced along simple paths (no cell reused within one path) of
//! king-move steps. Every search keeps its visited set in a stack-local
//! bitmask, so one `Solver` can serve many threads at once.

use crate::core::{AdjacencyGraph, Board};
use crate::dictionary::{Dictionary, acceptable_for_listing};
use rustc_hash::FxHashSet;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// Largest grid a `u64` visited mask can track
const MAX_CELLS: usize = u64::BITS as usize;

#[inline]
const fn bit(index: usize) -> u64 {
    1 << index
}

/// Board word finder
///
/// Holds the letters and neighbour lists of one board; built once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Solver {
    letters: Vec<u8>,
    neighbors: Vec<Vec<usize>>,
}

impl Solver {
    /// Create a solver from an adjacency graph
    ///
    /// # Panics
    /// Panics if the graph has more than 64 cells
    #[must_use]
    pub fn new(graph: &AdjacencyGraph) -> Self {
        assert!(graph.len() <= MAX_CELLS, "grid too large for solver");
        Self {
            letters: graph.letters(),
            neighbors: (0..graph.len())
                .map(|i| graph.neighbors(i).to_vec())
                .collect(),
        }
    }

    /// Shorthand for building the graph and the solver from a board
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        Self::new(&AdjacencyGraph::build(board))
    }

    /// Number of cells searched
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Check whether a normalized word can be traced on the board
    ///
    /// Words shorter than three letters are never formable.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use boggle_solver::solver::Solver;
    ///
    /// let solver = Solver::for_board(&Board::parse("cann xcio solx made").unwrap());
    /// assert!(solver.can_form_word("sol"));
    /// assert!(!solver.can_form_word("xyz"));
    /// assert!(!solver.can_form_word("so"));
    /// ```
    #[must_use]
    pub fn can_form_word(&self, word: &str) -> bool {
        self.reconstruct_path(word).is_some()
    }

    /// Cell indices of the first path spelling `word`, if any
    ///
    /// Starting cells are tried in increasing index order and neighbours in
    /// enumeration order, so the result is deterministic but not necessarily
    /// unique or shortest.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use boggle_solver::solver::Solver;
    ///
    /// let solver = Solver::for_board(&Board::parse("cann xcio solx made").unwrap());
    /// assert_eq!(solver.reconstruct_path("sol"), Some(vec![8, 9, 10]));
    /// assert_eq!(solver.reconstruct_path("mesa"), None);
    /// ```
    #[must_use]
    pub fn reconstruct_path(&self, word: &str) -> Option<Vec<usize>> {
        let word = word.as_bytes();
        if word.len() < MIN_WORD_LEN || word.len() > self.letters.len() {
            return None;
        }

        let mut path = Vec::with_capacity(word.len());
        (0..self.letters.len())
            .filter(|&start| self.letters[start] == word[0])
            .find(|&start| self.trace(start, word, 0, 0, &mut path))
            .map(|_| path)
    }

    /// Depth-first match of `word[pos..]` starting at `index`
    ///
    /// On success `path` holds the matched cells; on failure it is left as it
    /// was on entry.
    fn trace(
        &self,
        index: usize,
        word: &[u8],
        pos: usize,
        visited: u64,
        path: &mut Vec<usize>,
    ) -> bool {
        if self.letters[index] != word[pos] {
            return false;
        }
        path.push(index);
        if pos == word.len() - 1 {
            return true;
        }

        let visited = visited | bit(index);
        let next = word[pos + 1];
        for &neighbor in &self.neighbors[index] {
            if visited & bit(neighbor) == 0
                && self.letters[neighbor] == next
                && self.trace(neighbor, word, pos + 1, visited, path)
            {
                return true;
            }
        }

        path.pop();
        false
    }

    /// Every dictionary word of at least `min_len` letters on the board
    ///
    /// `min_len` is raised to three if smaller, matching
    /// [`can_form_word`](Self::can_form_word).
    pub fn find_all_words<D>(&self, dictionary: &D, min_len: usize) -> FxHashSet<String>
    where
        D: Dictionary + ?Sized,
    {
        self.find_all_words_with(dictionary, min_len, |_| true)
    }

    /// Like [`find_all_words`](Self::find_all_words), keeping only words for
    /// which `accept` returns true
    ///
    /// Branches are abandoned as soon as the letters collected so far are not
    /// a prefix of any dictionary word. A word reachable along several paths
    /// is reported once.
    pub fn find_all_words_with<D, F>(
        &self,
        dictionary: &D,
        min_len: usize,
        accept: F,
    ) -> FxHashSet<String>
    where
        D: Dictionary + ?Sized,
        F: Fn(&str) -> bool,
    {
        let mut search = Enumeration {
            solver: self,
            dictionary,
            min_len: min_len.max(MIN_WORD_LEN),
            accept: &accept,
            buffer: String::with_capacity(self.letters.len()),
            found: FxHashSet::default(),
        };

        for start in 0..self.letters.len() {
            search.extend_from(start, 0);
        }

        log::debug!(
            "board search found {} words (min_len={})",
            search.found.len(),
            search.min_len
        );
        search.found
    }

    /// [`find_all_words_with`](Self::find_all_words_with) using the listing
    /// heuristics, for presenting a board's words to a player
    pub fn find_all_words_filtered<D>(&self, dictionary: &D, min_len: usize) -> FxHashSet<String>
    where
        D: Dictionary + ?Sized,
    {
        self.find_all_words_with(dictionary, min_len, acceptable_for_listing)
    }
}

/// Scratch state for one enumeration call
struct Enumeration<'a, D: ?Sized, F> {
    solver: &'a Solver,
    dictionary: &'a D,
    min_len: usize,
    accept: &'a F,
    buffer: String,
    found: FxHashSet<String>,
}

impl<D, F> Enumeration<'_, D, F>
where
    D: Dictionary + ?Sized,
    F: Fn(&str) -> bool,
{
    fn extend_from(&mut self, index: usize, visited: u64) {
        self.buffer.push(char::from(self.solver.letters[index]));

        if self.dictionary.contains_prefix(&self.buffer) {
            if self.buffer.len() >= self.min_len
                && self.dictionary.contains_word(&self.buffer)
                && (self.accept)(self.buffer.as_str())
            {
                self.found.insert(self.buffer.clone());
            }

            let visited = visited | bit(index);
            let solver = self.solver;
            for &neighbor in &solver.neighbors[index] {
                if visited & bit(neighbor) == 0 {
                    self.extend_from(neighbor, visited);
                }
            }
        }

        self.buffer.pop();
    }
}
