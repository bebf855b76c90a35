//! Game configuration
//!
//! Defaults for a round plus the dictionary filters, assembled by the CLI
//! from its flags.

use crate::dictionary::LoadOptions;
use crate::solver::MIN_WORD_LEN;
use std::time::Duration;

/// Default round length in seconds
pub const DEFAULT_DURATION_SECS: u64 = 180;

/// Settings shared by the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Shortest word listed by `solve` and counted as missed by `play`
    pub min_len: usize,
    /// Length of a `play` round
    pub duration: Duration,
    /// Filters applied while loading a word list
    pub load_options: LoadOptions,
    /// Apply the listing heuristic when presenting all words of a board
    pub listing_filter: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            duration: Duration::from_secs(DEFAULT_DURATION_SECS),
            load_options: LoadOptions::default(),
            listing_filter: true,
        }
    }
}

impl GameConfig {
    /// Set the minimum word length, never below three letters
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(MIN_WORD_LEN);
        self
    }

    /// Set the round length. Zero means no time limit.
    #[must_use]
    pub const fn with_duration_secs(mut self, secs: u64) -> Self {
        self.duration = Duration::from_secs(secs);
        self
    }

    #[must_use]
    pub const fn with_listing_filter(mut self, enabled: bool) -> Self {
        self.listing_filter = enabled;
        self
    }

    #[must_use]
    pub const fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Whether a round has a time limit
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        !self.duration.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_len, 3);
        assert_eq!(config.duration, Duration::from_secs(180));
        assert_eq!(config.load_options, LoadOptions::default());
        assert!(config.listing_filter);
        assert!(config.is_timed());
    }

    #[test]
    fn min_len_is_clamped() {
        assert_eq!(GameConfig::default().with_min_len(1).min_len, 3);
        assert_eq!(GameConfig::default().with_min_len(5).min_len, 5);
    }

    #[test]
    fn zero_duration_is_untimed() {
        let config = GameConfig::default().with_duration_secs(0);
        assert!(!config.is_timed());
    }

    #[test]
    fn builders_chain() {
        let options = LoadOptions {
            require_vowel: true,
            ..LoadOptions::default()
        };
        let config = GameConfig::default()
            .with_duration_secs(60)
            .with_listing_filter(false)
            .with_load_options(options);
        assert_eq!(config.duration.as_secs(), 60);
        assert!(!config.listing_filter);
        assert!(config.load_options.require_vowel);
    }
}
