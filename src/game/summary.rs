//! End-of-game summary
//!
//! The only data that leaves a session for player records: who played, what
//! they scored, and when.

use chrono::{DateTime, Utc};
use std::fmt;

/// Final result of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub player: String,
    pub score: u32,
    pub words: Vec<String>,
    pub last_played: DateTime<Utc>,
}

impl GameSummary {
    /// Number of accepted words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Longest accepted word, first one wins on ties
    #[must_use]
    pub fn longest_word(&self) -> Option<&str> {
        self.words
            .iter()
            .fold(None::<&String>, |best, w| match best {
                Some(b) if b.len() >= w.len() => Some(b),
                _ => Some(w),
            })
            .map(String::as_str)
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} points, {} words ({})",
            self.player,
            self.score,
            self.words.len(),
            self.last_played.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summary(words: &[&str]) -> GameSummary {
        GameSummary {
            player: "ana".to_string(),
            score: 4,
            words: words.iter().map(ToString::to_string).collect(),
            last_played: Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn longest_word_prefers_first_on_ties() {
        assert_eq!(summary(&["sol", "made", "cola"]).longest_word(), Some("made"));
        assert_eq!(summary(&[]).longest_word(), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(
            summary(&["sol", "made"]).to_string(),
            "ana: 4 points, 2 words (2024-05-01 18:30)"
        );
    }
}
