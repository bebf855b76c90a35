//! Prefix tree dictionary
//!
//! Nodes live in a flat arena and each node maps a character directly to its
//! child index. The root carries no character.

use rustc_hash::FxHashMap;

/// Word and prefix membership store
///
/// The solver and validator only need these four operations, so they are
/// generic over this trait rather than tied to [`Trie`].
pub trait Dictionary {
    /// Add a word. Empty input is ignored.
    fn insert(&mut self, word: &str);

    /// True if `word` was inserted
    fn contains_word(&self, word: &str) -> bool;

    /// True if some inserted word starts with `prefix`
    fn contains_prefix(&self, prefix: &str) -> bool;

    /// Number of distinct words stored
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    ch: Option<char>,
    is_word: bool,
    children: FxHashMap<char, usize>,
}

/// Character-keyed trie
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::{Dictionary, Trie};
///
/// let trie: Trie = ["sol", "sola", "casa"].into_iter().collect();
/// assert!(trie.contains_word("sola"));
/// assert!(trie.contains_prefix("ca"));
/// assert!(!trie.contains_word("ca"));
/// assert_eq!(trie.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

const ROOT: usize = 0;

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Total nodes including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `s` from the root, returning the final node index
    fn walk(&self, s: &str) -> Option<usize> {
        s.chars()
            .try_fold(ROOT, |node, ch| self.nodes[node].children.get(&ch).copied())
    }

    fn child_or_insert(&mut self, parent: usize, ch: char) -> usize {
        if let Some(&child) = self.nodes[parent].children.get(&ch) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode {
            ch: Some(ch),
            ..TrieNode::default()
        });
        self.nodes[parent].children.insert(ch, child);
        child
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for Trie {
    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = ROOT;
        for ch in word.chars() {
            node = self.child_or_insert(node, ch);
        }
        debug_assert_eq!(self.nodes[node].ch, word.chars().last());

        let terminal = &mut self.nodes[node];
        if !terminal.is_word {
            terminal.is_word = true;
            self.word_count += 1;
        }
    }

    fn contains_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].is_word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    fn len(&self) -> usize {
        self.word_count
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
