//! Core domain types for the word grid
//!
//! The board, its adjacency graph and text normalization. Everything here is
//! pure and immutable once built.

mod board;
mod graph;
mod normalize;

pub use board::{Board, CELLS, COLS, ROWS};
pub use graph::{AdjacencyGraph, Cell};
pub use normalize::normalize;
