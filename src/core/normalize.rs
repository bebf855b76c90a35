//! Text normalization
//!
//! Canonical form used for every comparison: lowercase ASCII `a-z` only,
//! with diacritics removed (`canción` → `cancion`).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize raw text to lowercase `a-z`
///
/// Lowercases, decomposes (NFD) to split base letters from their marks,
/// drops the combining marks, then drops everything outside `a-z`.
///
/// # Examples
/// ```
/// use boggle_solver::core::normalize;
///
/// assert_eq!(normalize("Canción"), "cancion");
/// assert_eq!(normalize("  Árbol! "), "arbol");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(normalize("SOL"), "sol");
        assert_eq!(normalize("CaSa"), "casa");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("lápiz"), "lapiz");
        assert_eq!(normalize("pingüino"), "pinguino");
        assert_eq!(normalize("ÁÉÍÓÚ"), "aeiou");
    }

    #[test]
    fn decomposed_input_matches_precomposed() {
        // "a" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(normalize("a\u{0301}rbol"), normalize("árbol"));
    }

    #[test]
    fn strips_non_letters() {
        assert_eq!(normalize("a1b2c3"), "abc");
        assert_eq!(normalize("co-op"), "coop");
        assert_eq!(normalize("hola mundo"), "holamundo");
        assert_eq!(normalize("日本"), "");
    }

    #[test]
    fn enye_loses_its_tilde() {
        // The validator rejects ñ before normalizing for this reason
        assert_eq!(normalize("niño"), "nino");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
