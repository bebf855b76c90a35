//! Listing heuristics
//!
//! A soft filter used when presenting every word on a board. It trims noise
//! from large dictionaries without affecting validation of player words.

/// True if `word` looks like a real Spanish word worth listing
///
/// Requires at least three letters, at least one of `a e i o u`, and every
/// `cc` followed by `e` or `i` (as in *acción*, *accidente*).
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::acceptable_for_listing;
///
/// assert!(acceptable_for_listing("accion"));
/// assert!(!acceptable_for_listing("pst"));
/// assert!(!acceptable_for_listing("acca"));
/// ```
#[must_use]
pub fn acceptable_for_listing(word: &str) -> bool {
    word.len() >= 3 && has_vowel(word) && valid_cc_context(word)
}

fn has_vowel(word: &str) -> bool {
    word.contains(['a', 'e', 'i', 'o', 'u'])
}

fn valid_cc_context(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| *pair == b"cc")
        .all(|(i, _)| matches!(bytes.get(i + 2), Some(b'e' | b'i')))
}
