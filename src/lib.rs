//! Boggle Solver
//!
//! A 4x4 word-search engine for Spanish word lists: board generation, a
//! trie-backed dictionary, prefix-pruned path search and scored game sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::Board;
//! use boggle_solver::dictionary::{LoadOptions, load_embedded};
//! use boggle_solver::game::{Session, SubmissionStatus};
//!
//! let (dictionary, _stats) = load_embedded(&LoadOptions::default());
//! let board = Board::parse("cann xcio solx made").unwrap();
//!
//! let mut session = Session::new("ana", board, &dictionary).unwrap();
//! let result = session.submit_word("Sól").unwrap();
//! assert_eq!(result.status, SubmissionStatus::Ok);
//! assert_eq!(session.reconstruct_path("sol"), Some(vec![8, 9, 10]));
//! ```

// Core domain types
pub mod core;

// Dictionary storage and loading
pub mod dictionary;

// Board search and validation
pub mod solver;

// Sessions and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
pub mod log;
