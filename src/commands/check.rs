//! Single word check
//!
//! Runs one raw word through the validator and reports its status, the path
//! that spells it and the points it would earn.

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::game::points_for_length;
use crate::solver::{Solver, Validation, Validator};

/// Result of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub raw: String,
    pub board: Board,
    pub validation: Validation,
    /// Present whenever the normalized word is formable, even if the
    /// dictionary rejects it
    pub path: Option<Vec<usize>>,
    pub points: u32,
}

/// Validate `raw` against `board` and `dictionary`
pub fn check_word<D>(raw: &str, board: &Board, dictionary: &D) -> CheckResult
where
    D: Dictionary + ?Sized,
{
    let solver = Solver::for_board(board);
    let validation = Validator::new(&solver, dictionary).validate(raw);
    let path = if validation.normalized.is_empty() {
        None
    } else {
        solver.reconstruct_path(&validation.normalized)
    };
    let points = if validation.is_ok() {
        points_for_length(validation.normalized.len())
    } else {
        0
    };

    CheckResult {
        raw: raw.to_string(),
        board: board.clone(),
        validation,
        path,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;
    use crate::solver::ValidationStatus;

    fn fixture() -> (Board, Trie) {
        let board = Board::parse("cann xcio solx made").unwrap();
        let dictionary: Trie = ["sol", "canon", "casa"].into_iter().collect();
        (board, dictionary)
    }

    #[test]
    fn accepted_word_has_path_and_points() {
        let (board, dictionary) = fixture();
        let result = check_word("Sól", &board, &dictionary);
        assert_eq!(result.validation.status, ValidationStatus::Ok);
        assert_eq!(result.validation.normalized, "sol");
        assert_eq!(result.path, Some(vec![8, 9, 10]));
        assert_eq!(result.points, 1);
        assert_eq!(check_word("canon", &board, &dictionary).points, 2);
    }

    #[test]
    fn formable_word_outside_dictionary_keeps_path() {
        let (board, dictionary) = fixture();
        let result = check_word("made", &board, &dictionary);
        assert_eq!(result.validation.status, ValidationStatus::NotInDictionary);
        assert_eq!(result.path, Some(vec![12, 13, 14, 15]));
        assert_eq!(result.points, 0);
    }

    #[test]
    fn unformable_and_invalid_words_have_no_path() {
        let (board, dictionary) = fixture();
        let casa = check_word("casa", &board, &dictionary);
        assert_eq!(casa.validation.status, ValidationStatus::NotFormableOnBoard);
        assert_eq!(casa.path, None);

        let digits = check_word("12", &board, &dictionary);
        assert_eq!(digits.validation.status, ValidationStatus::InvalidCharacters);
        assert_eq!(digits.path, None);
        assert_eq!(digits.raw, "12");
    }
}
