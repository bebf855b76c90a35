//! Board search and word validation
//!
//! The [`Solver`] traces words over a board graph; the [`Validator`] combines
//! it with normalization and a dictionary to judge player submissions.

mod engine;
mod validator;

pub use engine::{MIN_WORD_LEN, Solver};
pub use validator::{Validation, ValidationStatus, Validator};
