//! One playthrough of a board
//!
//! Lifecycle: `NotStarted -> Running -> Finished`. Submitting a word starts
//! the session implicitly; finishing is explicit and final.

use super::scoring::points_for_length;
use super::summary::GameSummary;
use crate::core::Board;
use crate::dictionary::{Dictionary, Trie};
use crate::error::SessionError;
use crate::solver::{MIN_WORD_LEN, Solver, ValidationStatus, Validator};
use chrono::{DateTime, TimeDelta, Utc};
use rustc_hash::FxHashSet;
use std::fmt;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    NotStarted,
    Running,
    Finished,
}

/// Outcome of submitting a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Ok,
    TooShort,
    InvalidCharacters,
    NotFormableOnBoard,
    NotInDictionary,
    Repeated,
}

impl From<ValidationStatus> for SubmissionStatus {
    fn from(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::Ok => Self::Ok,
            ValidationStatus::TooShort => Self::TooShort,
            ValidationStatus::InvalidCharacters => Self::InvalidCharacters,
            ValidationStatus::NotFormableOnBoard => Self::NotFormableOnBoard,
            ValidationStatus::NotInDictionary => Self::NotInDictionary,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ok => "accepted",
            Self::TooShort => "too short (minimum 3 letters)",
            Self::InvalidCharacters => "invalid characters",
            Self::NotFormableOnBoard => "not formable on the board",
            Self::NotInDictionary => "not in the dictionary",
            Self::Repeated => "already found",
        };
        f.write_str(text)
    }
}

/// Result of [`Session::submit_word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub status: SubmissionStatus,
    pub normalized: String,
    pub points: u32,
}

impl Submission {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == SubmissionStatus::Ok
    }
}

/// A single player's game on one board
///
/// Borrows its dictionary; owns the board and the solver built from it.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::dictionary::Trie;
/// use boggle_solver::game::{Session, SubmissionStatus};
///
/// let dictionary: Trie = ["sol", "made"].into_iter().collect();
/// let board = Board::parse("cann xcio solx made").unwrap();
/// let mut session = Session::new("ana", board, &dictionary).unwrap();
///
/// let first = session.submit_word("sol").unwrap();
/// assert_eq!((first.status, first.points), (SubmissionStatus::Ok, 1));
///
/// let again = session.submit_word("SOL").unwrap();
/// assert_eq!(again.status, SubmissionStatus::Repeated);
/// assert_eq!(session.score(), 1);
///
/// session.finish();
/// assert!(session.submit_word("made").is_err());
/// ```
#[derive(Debug)]
pub struct Session<'a, D: ?Sized = Trie> {
    player: String,
    board: Board,
    solver: Solver,
    dictionary: &'a D,
    accepted: Vec<String>,
    accepted_set: FxHashSet<String>,
    score: u32,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl<'a, D: Dictionary + ?Sized> Session<'a, D> {
    /// Create a session for `player` on `board`
    ///
    /// The player name is trimmed.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyPlayerName` if the name is blank.
    pub fn new(player: &str, board: Board, dictionary: &'a D) -> Result<Self, SessionError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }

        let solver = Solver::for_board(&board);
        Ok(Self {
            player: player.to_string(),
            board,
            solver,
            dictionary,
            accepted: Vec::new(),
            accepted_set: FxHashSet::default(),
            score: 0,
            state: SessionState::NotStarted,
            started_at: None,
            finished_at: None,
        })
    }

    /// Start the clock. Does nothing unless the session has not started.
    pub fn start(&mut self) {
        if self.state == SessionState::NotStarted {
            self.state = SessionState::Running;
            self.started_at = Some(Utc::now());
            log::debug!("session for {} started", self.player);
        }
    }

    /// Validate and score a raw word
    ///
    /// Rejected and repeated words earn nothing and leave the session
    /// unchanged (apart from starting it).
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once [`finish`](Self::finish) has been
    /// called.
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, SessionError> {
        if self.state == SessionState::Finished {
            return Err(SessionError::Finished);
        }
        self.start();

        let validation = Validator::new(&self.solver, self.dictionary).validate(raw);
        if !validation.is_ok() {
            return Ok(Submission {
                status: validation.status.into(),
                normalized: validation.normalized,
                points: 0,
            });
        }

        let word = validation.normalized;
        if self.accepted_set.contains(&word) {
            return Ok(Submission {
                status: SubmissionStatus::Repeated,
                normalized: word,
                points: 0,
            });
        }

        let points = points_for_length(word.len());
        self.accepted_set.insert(word.clone());
        self.accepted.push(word.clone());
        self.score += points;
        log::debug!("{} accepted {word:?} (+{points}, total {})", self.player, self.score);

        Ok(Submission {
            status: SubmissionStatus::Ok,
            normalized: word,
            points,
        })
    }

    /// End the session. Idempotent.
    pub fn finish(&mut self) {
        if self.state == SessionState::Finished {
            return;
        }
        self.start();
        self.state = SessionState::Finished;
        self.finished_at = Some(Utc::now());
        log::debug!(
            "session for {} finished with {} points",
            self.player,
            self.score
        );
    }

    /// Board cells spelling `word`, for highlighting
    ///
    /// The word is normalized first.
    #[must_use]
    pub fn reconstruct_path(&self, word: &str) -> Option<Vec<usize>> {
        self.solver.reconstruct_path(&crate::core::normalize(word))
    }

    /// Every dictionary word on the board of at least `min_len` letters the
    /// player has not found, longest first then alphabetical
    ///
    /// No listing heuristic is applied; callers presenting the list filter it
    /// with [`acceptable_for_listing`](crate::dictionary::acceptable_for_listing).
    #[must_use]
    pub fn missed_words(&self, min_len: usize) -> Vec<String> {
        let mut missed: Vec<String> = self
            .solver
            .find_all_words(self.dictionary, min_len.max(MIN_WORD_LEN))
            .into_iter()
            .filter(|w| !self.accepted_set.contains(w))
            .collect();
        missed.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        missed
    }

    /// Snapshot for player records
    ///
    /// `last_played` is the finish time, or now if the session is still open.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            player: self.player.clone(),
            score: self.score,
            words: self.accepted.clone(),
            last_played: self.finished_at.unwrap_or_else(Utc::now),
        }
    }

    /// Time from start to finish, or to now while running
    #[must_use]
    pub fn elapsed(&self) -> Option<TimeDelta> {
        let start = self.started_at?;
        Some(self.finished_at.unwrap_or_else(Utc::now) - start)
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Accepted words in the order they were found
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }

    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Trie {
        ["sol", "sola", "solo", "made", "canon", "cola", "casa"]
            .into_iter()
            .collect()
    }

    fn board() -> Board {
        Board::parse("cann xcio solx made").unwrap()
    }

    #[test]
    fn blank_player_name_rejected() {
        let dict = dictionary();
        assert_eq!(
            Session::new("   ", board(), &dict).unwrap_err(),
            SessionError::EmptyPlayerName
        );
        let session = Session::new("  ana ", board(), &dict).unwrap();
        assert_eq!(session.player(), "ana");
    }

    #[test]
    fn new_session_is_not_started() {
        let dict = dictionary();
        let session = Session::new("ana", board(), &dict).unwrap();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.score(), 0);
        assert!(session.accepted_words().is_empty());
        assert!(session.started_at().is_none());
        assert!(session.elapsed().is_none());
    }

    #[test]
    fn start_is_idempotent() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.start();
        let first = session.started_at();
        session.start();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.started_at(), first);
    }

    #[test]
    fn first_submission_starts_session() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.submit_word("xx").unwrap();
        assert_eq!(session.state(), SessionState::Running);
        assert!(session.started_at().is_some());
    }

    #[test]
    fn accepted_word_scores_once() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();

        let first = session.submit_word("sol").unwrap();
        assert_eq!(first.status, SubmissionStatus::Ok);
        assert_eq!(first.normalized, "sol");
        assert_eq!(first.points, 1);

        let second = session.submit_word("Sól").unwrap();
        assert_eq!(second.status, SubmissionStatus::Repeated);
        assert_eq!(second.normalized, "sol");
        assert_eq!(second.points, 0);

        assert_eq!(session.score(), 1);
        assert_eq!(session.accepted_words(), ["sol"]);
    }

    #[test]
    fn rejections_do_not_mutate() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();

        let cases = [
            ("so", SubmissionStatus::TooShort),
            ("a1", SubmissionStatus::InvalidCharacters),
            ("soñ", SubmissionStatus::InvalidCharacters),
            ("casa", SubmissionStatus::NotFormableOnBoard),
            ("sal", SubmissionStatus::NotInDictionary),
        ];
        for (raw, expected) in cases {
            let result = session.submit_word(raw).unwrap();
            assert_eq!(result.status, expected, "{raw}");
            assert_eq!(result.points, 0);
        }
        assert_eq!(session.score(), 0);
        assert!(session.accepted_words().is_empty());
    }

    #[test]
    fn score_accumulates_in_order() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        for word in ["canon", "sol", "made", "cola"] {
            assert!(session.submit_word(word).unwrap().is_ok(), "{word}");
        }
        // 2 + 1 + 1 + 1
        assert_eq!(session.score(), 5);
        assert_eq!(session.accepted_words(), ["canon", "sol", "made", "cola"]);
    }

    #[test]
    fn finish_is_terminal() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.submit_word("sol").unwrap();
        session.finish();
        let finished_at = session.finished_at();

        assert!(session.is_finished());
        assert_eq!(session.submit_word("made"), Err(SessionError::Finished));
        assert_eq!(session.score(), 1);

        session.finish();
        assert_eq!(session.finished_at(), finished_at);
    }

    #[test]
    fn finish_without_start_records_both_timestamps() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.finish();
        assert!(session.started_at().is_some());
        assert!(session.finished_at().is_some());
        assert!(session.elapsed().unwrap() >= TimeDelta::zero());
    }

    #[test]
    fn reconstruct_path_normalizes() {
        let dict = dictionary();
        let session = Session::new("ana", board(), &dict).unwrap();
        assert_eq!(session.reconstruct_path("SÓL"), Some(vec![8, 9, 10]));
        assert_eq!(session.reconstruct_path("casa"), None);
    }

    #[test]
    fn missed_words_exclude_found_ones() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.submit_word("sol").unwrap();
        let missed = session.missed_words(3);
        assert!(!missed.contains(&"sol".to_string()));
        assert_eq!(missed, ["canon", "cola", "made", "sola", "solo"]);
    }

    #[test]
    fn missed_words_keep_unlistable_entries() {
        // formable (8 -> 4 -> 5) but has no vowel
        let dict: Trie = ["sxc", "sol"].into_iter().collect();
        let session = Session::new("ana", board(), &dict).unwrap();
        assert_eq!(session.missed_words(3), ["sol", "sxc"]);
    }

    #[test]
    fn summary_reports_player_score_and_finish_time() {
        let dict = dictionary();
        let mut session = Session::new("ana", board(), &dict).unwrap();
        session.submit_word("canon").unwrap();
        session.finish();

        let summary = session.summary();
        assert_eq!(summary.player, "ana");
        assert_eq!(summary.score, 2);
        assert_eq!(summary.words, ["canon"]);
        assert_eq!(Some(summary.last_played), session.finished_at());
    }

    #[test]
    fn long_words_score_eleven() {
        let dict: Trie = ["canonico"].into_iter().collect();
        let board = Board::parse("cano ocin xxxx xxxx").unwrap();
        let mut session = Session::new("ana", board, &dict).unwrap();

        let result = session.submit_word("canónico").unwrap();
        assert_eq!(result.status, SubmissionStatus::Ok);
        assert_eq!(result.points, 11);
        assert_eq!(session.submit_word("canonico").unwrap().points, 0);
        assert_eq!(session.score(), 11);
    }
}
