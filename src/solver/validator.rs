//! Player word validation
//!
//! Classifies a raw player submission against one board and one dictionary.
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `ñ`/`Ñ` anywhere in the raw text
//! 2. blank input
//! 3. any character that is neither whitespace nor a letter (general
//!    category `L*`)
//! 4. nothing left after normalization
//! 5. fewer than three letters
//! 6. no path on the board
//! 7. not in the dictionary
//!
//! The raw-character checks (1-3) run before normalization because
//! normalization silently drops exactly the characters they look for.

use super::engine::{MIN_WORD_LEN, Solver};
use crate::core::normalize;
use crate::dictionary::Dictionary;
use std::fmt;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Outcome of validating one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    Ok,
    TooShort,
    InvalidCharacters,
    NotFormableOnBoard,
    NotInDictionary,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ok => "accepted",
            Self::TooShort => "too short (minimum 3 letters)",
            Self::InvalidCharacters => "invalid characters",
            Self::NotFormableOnBoard => "not formable on the board",
            Self::NotInDictionary => "not in the dictionary",
        };
        f.write_str(text)
    }
}

/// Status plus the normalized word it refers to
///
/// `normalized` is empty when the raw text was rejected before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub status: ValidationStatus,
    pub normalized: String,
}

impl Validation {
    fn rejected() -> Self {
        Self {
            status: ValidationStatus::InvalidCharacters,
            normalized: String::new(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == ValidationStatus::Ok
    }
}

/// Validation pipeline over one solver and one dictionary
#[derive(Debug)]
pub struct Validator<'a, D: ?Sized> {
    solver: &'a Solver,
    dictionary: &'a D,
}

impl<D: ?Sized> Clone for Validator<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Validator<'_, D> {}

impl<'a, D: Dictionary + ?Sized> Validator<'a, D> {
    #[must_use]
    pub const fn new(solver: &'a Solver, dictionary: &'a D) -> Self {
        Self { solver, dictionary }
    }

    /// Classify a raw player submission
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use boggle_solver::dictionary::Trie;
    /// use boggle_solver::solver::{Solver, ValidationStatus, Validator};
    ///
    /// let solver = Solver::for_board(&Board::parse("cann xcio solx made").unwrap());
    /// let dictionary: Trie = ["sol"].into_iter().collect();
    /// let validator = Validator::new(&solver, &dictionary);
    ///
    /// let result = validator.validate(" SÓL ");
    /// assert_eq!(result.status, ValidationStatus::Ok);
    /// assert_eq!(result.normalized, "sol");
    ///
    /// assert_eq!(validator.validate("año").status, ValidationStatus::InvalidCharacters);
    /// ```
    #[must_use]
    pub fn validate(&self, raw: &str) -> Validation {
        if raw.contains(['ñ', 'Ñ']) {
            return Validation::rejected();
        }
        if raw.trim().is_empty() {
            return Validation::rejected();
        }
        if !raw.chars().all(is_word_char) {
            return Validation::rejected();
        }

        let normalized = normalize(raw);
        let status = if normalized.is_empty() {
            ValidationStatus::InvalidCharacters
        } else if normalized.len() < MIN_WORD_LEN {
            ValidationStatus::TooShort
        } else if !self.solver.can_form_word(&normalized) {
            ValidationStatus::NotFormableOnBoard
        } else if !self.dictionary.contains_word(&normalized) {
            ValidationStatus::NotInDictionary
        } else {
            ValidationStatus::Ok
        };

        Validation { status, normalized }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_whitespace() || is_letter(c)
}

/// Letter in the Unicode sense: categories Lu, Ll, Lt, Lm and Lo
///
/// Narrower than [`char::is_alphabetic`], which also admits letter numbers
/// such as `Ⅻ` and some combining marks.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
