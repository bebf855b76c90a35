//! Dictionary loading
//!
//! Raw word lists are noisy: acronyms, proper nouns, hyphenated tokens and
//! words with `ñ` all appear in typical Spanish lists. Every entry goes
//! through [`filter_entry`] before reaching the trie.
//!
//! Only empty lines are skipped outright. `#` has no special meaning here:
//! comments in the embedded list are stripped at build time, and a `#casa`
//! line in a user file loads as `casa`.

use super::embedded::WORDS;
use super::trie::{Dictionary, Trie};
use crate::core::normalize;
use crate::error::DictionaryError;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Minimum length of a dictionary word after normalization
pub const MIN_ENTRY_LEN: usize = 3;

/// Which optional filters the loader applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip tokens that are (almost) all uppercase, such as `ONU`
    pub exclude_all_caps: bool,
    /// Skip capitalized tokens such as `Madrid`
    pub exclude_proper_nouns: bool,
    /// Skip tokens containing digits or `. / - + _`
    pub exclude_punctuated: bool,
    /// Require at least one of `a e i o u` after normalization
    pub require_vowel: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            exclude_all_caps: true,
            exclude_proper_nouns: true,
            exclude_punctuated: true,
            require_vowel: false,
        }
    }
}

/// Why an entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Enye,
    AllCaps,
    Punctuated,
    ProperNoun,
    TooShort,
    TripleLetter,
    NoVowel,
}

/// Counters from one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_lines: usize,
    pub loaded: usize,
    pub blank: usize,
    pub enye: usize,
    pub all_caps: usize,
    pub punctuated: usize,
    pub proper_nouns: usize,
    pub too_short: usize,
    pub triples: usize,
    pub no_vowel: usize,
    pub duplicates: usize,
}

impl LoadStats {
    fn record(&mut self, reason: SkipReason) {
        let counter = match reason {
            SkipReason::Blank => &mut self.blank,
            SkipReason::Enye => &mut self.enye,
            SkipReason::AllCaps => &mut self.all_caps,
            SkipReason::Punctuated => &mut self.punctuated,
            SkipReason::ProperNoun => &mut self.proper_nouns,
            SkipReason::TooShort => &mut self.too_short,
            SkipReason::TripleLetter => &mut self.triples,
            SkipReason::NoVowel => &mut self.no_vowel,
        };
        *counter += 1;
    }
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines={} loaded={} ñ={} acronyms={} punctuated={} proper={} \
             short={} triples={} no_vowel={} duplicates={}",
            self.total_lines,
            self.loaded,
            self.enye,
            self.all_caps,
            self.punctuated,
            self.proper_nouns,
            self.too_short,
            self.triples,
            self.no_vowel,
            self.duplicates
        )
    }
}

/// Clean one raw entry, or say why it is rejected
///
/// # Errors
/// Returns the `SkipReason` for entries the loader must drop.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::loader::{filter_entry, LoadOptions, SkipReason};
///
/// let options = LoadOptions::default();
/// assert_eq!(filter_entry("  Canción ", &options), Ok("cancion".to_string()));
/// assert_eq!(filter_entry("niño", &options), Err(SkipReason::Enye));
/// assert_eq!(filter_entry("Madrid", &options), Err(SkipReason::ProperNoun));
/// ```
pub fn filter_entry(raw: &str, options: &LoadOptions) -> Result<String, SkipReason> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SkipReason::Blank);
    }
    if contains_enye(raw) {
        return Err(SkipReason::Enye);
    }
    if options.exclude_all_caps && is_all_caps_token(raw) {
        return Err(SkipReason::AllCaps);
    }
    if options.exclude_punctuated && has_punctuation(raw) {
        return Err(SkipReason::Punctuated);
    }
    if options.exclude_proper_nouns && is_proper_noun(raw) {
        return Err(SkipReason::ProperNoun);
    }

    let word = normalize(raw);
    if word.len() < MIN_ENTRY_LEN {
        return Err(SkipReason::TooShort);
    }
    if has_triple_repeat(&word) {
        return Err(SkipReason::TripleLetter);
    }
    if options.require_vowel && !has_vowel(&word) {
        return Err(SkipReason::NoVowel);
    }

    Ok(word)
}

/// Filter `lines` and insert the survivors into `dictionary`
///
/// Survivors are deduplicated through a sorted set before insertion.
pub fn load_into<'a, D, I>(dictionary: &mut D, lines: I, options: &LoadOptions) -> LoadStats
where
    D: Dictionary + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = LoadStats::default();
    let mut unique = BTreeSet::new();

    for line in lines {
        stats.total_lines += 1;
        match filter_entry(line, options) {
            Ok(word) => {
                if !unique.insert(word) {
                    stats.duplicates += 1;
                }
            }
            Err(reason) => stats.record(reason),
        }
    }

    let before = dictionary.len();
    for word in &unique {
        dictionary.insert(word);
    }
    stats.loaded = dictionary.len() - before;

    log::info!("dictionary loaded: {stats}");
    stats
}

/// Build a trie from an iterator of raw lines
pub fn load_from_lines<'a, I>(lines: I, options: &LoadOptions) -> (Trie, LoadStats)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut trie = Trie::new();
    let stats = load_into(&mut trie, lines, options);
    (trie, stats)
}

/// Build a trie from newline-delimited text
#[must_use]
pub fn load_from_str(content: &str, options: &LoadOptions) -> (Trie, LoadStats) {
    load_from_lines(content.lines(), options)
}

/// Build a trie from a UTF-8 word list file
///
/// # Errors
///
/// Returns `DictionaryError::Read` if the file cannot be opened or is not
/// valid UTF-8.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::loader::{load_from_file, LoadOptions};
///
/// let (trie, stats) = load_from_file("data/words_es.txt", &LoadOptions::default()).unwrap();
/// println!("Loaded {} words", stats.loaded);
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<(Trie, LoadStats), DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("reading dictionary from {}", path.display());
    Ok(load_from_str(&content, options))
}

/// Build a trie from the word list compiled into the binary
#[must_use]
pub fn load_embedded(options: &LoadOptions) -> (Trie, LoadStats) {
    load_from_lines(WORDS.iter().copied(), options)
}

fn contains_enye(s: &str) -> bool {
    s.contains(['ñ', 'Ñ'])
}

fn is_upper_token_char(c: char) -> bool {
    c.is_ascii_uppercase() || "ÁÉÍÓÚÜÑ .-+/".contains(c)
}

/// At least two letters, nothing but uppercase letters and `. - + /` or
/// spaces, and at least 80% of the letters uppercase
fn is_all_caps_token(raw: &str) -> bool {
    if raw.chars().count() < 2 || !raw.chars().all(is_upper_token_char) {
        return false;
    }
    let letters = raw.chars().filter(|c| c.is_alphabetic()).count();
    let upper = raw.chars().filter(|c| c.is_uppercase()).count();
    let threshold = ((letters as f64) * 0.8).round() as usize;
    letters >= 2 && upper >= threshold.max(2)
}

/// One uppercase letter followed by lowercase letters only
fn is_proper_noun(raw: &str) -> bool {
    let mut chars = raw.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    (first.is_ascii_uppercase() || "ÁÉÍÓÚÜ".contains(first))
        && !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_lowercase() || "áéíóúü".contains(c))
}

fn has_punctuation(raw: &str) -> bool {
    raw.chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-' | '+' | '_'))
}

fn has_triple_repeat(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_vowel(word: &str) -> bool {
    word.contains(['a', 'e', 'i', 'o', 'u'])
}
