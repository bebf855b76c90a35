//! Dictionaries for word validation and board search
//!
//! A character-keyed [`Trie`] behind the [`Dictionary`] trait, the loader that
//! filters raw word lists into it, and an embedded Spanish list.

mod embedded;
mod heuristics;
pub mod loader;
mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use heuristics::acceptable_for_listing;
pub use loader::{LoadOptions, LoadStats, load_embedded, load_from_file};
pub use trie::{Dictionary, Trie};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_entries_are_trimmed() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Entry '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn embedded_list_has_no_comments() {
        assert!(WORDS.iter().all(|w| !w.starts_with('#')));
    }
}
