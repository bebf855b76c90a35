//! Adjacency graph over board cells
//!
//! Each cell is connected to its king-move neighbours (8 directions), clipped
//! to the board bounds. The graph is built once per board and never mutated.

use super::board::{Board, COLS, ROWS};

/// One board cell: position, linear index and letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub letter: u8,
}

impl Cell {
    /// Letter as a `char`
    #[inline]
    #[must_use]
    pub const fn letter_char(&self) -> char {
        self.letter as char
    }
}

/// Fixed neighbour table for a `rows x cols` grid
///
/// Neighbour lists are in increasing index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Build the graph for a 4x4 board
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{AdjacencyGraph, Board};
    ///
    /// let board = Board::parse("cann xcio solx made").unwrap();
    /// let graph = AdjacencyGraph::build(&board);
    /// assert_eq!(graph.neighbors(0), &[1, 4, 5]);
    /// assert_eq!(graph.cell(8).letter_char(), 's');
    /// ```
    #[must_use]
    pub fn build(board: &Board) -> Self {
        Self::from_letters(ROWS, COLS, &board.letters())
    }

    /// Build the graph for an arbitrary `rows x cols` grid of letters in
    /// row-major order
    ///
    /// # Panics
    /// Panics if `letters.len() != rows * cols`
    #[must_use]
    pub fn from_letters(rows: usize, cols: usize, letters: &[u8]) -> Self {
        assert_eq!(letters.len(), rows * cols, "letter count must match grid");

        let cells: Vec<Cell> = letters
            .iter()
            .enumerate()
            .map(|(index, &letter)| Cell {
                row: index / cols,
                col: index % cols,
                index,
                letter,
            })
            .collect();

        let neighbors = cells
            .iter()
            .map(|cell| neighbor_indices(rows, cols, cell.row, cell.col))
            .collect();

        Self {
            rows,
            cols,
            cells,
            neighbors,
        }
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grid dimensions as `(rows, cols)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Linear index of a row/column
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at a linear index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// All cells in index order
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Neighbour indices of a cell
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Whether two cells are one king-move apart
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Letters by index
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.letter).collect()
    }
}

fn neighbor_indices(rows: usize, cols: usize, row: usize, col: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(8);
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < rows && c < cols {
                out.push(r * cols + c);
            }
        }
    }
    out
}
