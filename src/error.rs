//! Error types for board construction, dictionary loading and game sessions
//!
//! Expected gameplay outcomes (a word that is too short, not on the board, ...)
//! are *not* errors: they are reported through
//! [`ValidationStatus`](crate::solver::ValidationStatus) and
//! [`SubmissionStatus`](crate::game::SubmissionStatus). The types here cover
//! caller misuse and I/O failures only.

use std::path::PathBuf;

/// Errors raised while building a [`Board`](crate::core::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be {expected_rows}x{expected_cols}, got {rows} rows")]
    WrongRowCount {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
    },

    #[error("board row {row} must have {expected} columns, got {cols}")]
    WrongColumnCount {
        row: usize,
        expected: usize,
        cols: usize,
    },

    #[error("board must contain exactly {expected} letters, got {found}")]
    WrongLetterCount { expected: usize, found: usize },

    #[error("invalid board letter {letter:?} at ({row}, {col}): only a-z allowed")]
    InvalidLetter { letter: char, row: usize, col: usize },
}

/// Errors raised while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised by a [`Session`](crate::game::Session) on misuse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("session already finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_messages() {
        let err = BoardError::WrongRowCount {
            expected_rows: 4,
            expected_cols: 4,
            rows: 3,
        };
        assert_eq!(err.to_string(), "board must be 4x4, got 3 rows");

        let err = BoardError::InvalidLetter {
            letter: 'ñ',
            row: 1,
            col: 2,
        };
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn dictionary_error_includes_path() {
        let err = DictionaryError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to read dictionary missing.txt"));
    }

    #[test]
    fn session_error_messages() {
        assert_eq!(SessionError::Finished.to_string(), "session already finished");
        assert_eq!(
            SessionError::EmptyPlayerName.to_string(),
            "player name must not be empty"
        );
    }
}
