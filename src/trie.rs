//! `trie` — the prefix store that makes the board search tractable.
//!
//! A trie keyed by `char` supporting two queries: exact membership
//! ([`Trie::is_word`]) and prefix existence ([`Trie::has_prefix`]). The
//! search engine calls `has_prefix` on every candidate path to abandon a
//! branch the instant no dictionary word can continue with the letters
//! accumulated so far.
//!
//! The store is built once from the full word list, then treated as
//! read-only; the search API takes `&Trie` and the queries never mutate.
//!
//! Characters are opaque: the trie performs no case normalization. The
//! collaborator that loads the word list and the one that builds the grid
//! must agree on a normal form (see [`crate::word_list`]).
//!
//! # Examples
//!
//! ```
//! use wordtrail::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("bear");
//! trie.insert("be");
//!
//! assert!(trie.is_word("bear"));
//! assert!(trie.has_prefix("bea"));
//! assert!(!trie.is_word("bea"));
//! assert!(!trie.has_prefix("bez"));
//! ```

use std::collections::HashMap;

/// A single node in the trie: one child per distinct next character, plus a
/// flag marking whether the root-to-here path spells a complete word.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

/// Prefix-searchable word store.
///
/// Invariant: a node exists for every prefix of every inserted word, and
/// `is_word` is set exactly on the nodes that spell full inserted words (a
/// word that is a prefix of a longer word keeps its flag).
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a collection of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Idempotent: inserting the same word twice leaves the trie unchanged on
    /// the second call. Inserting the empty string marks the root itself as a
    /// word; this is permitted but can never be produced by a board search
    /// (every path on the board has at least one letter).
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_word = true;
    }

    /// Returns true iff `s` was inserted as a complete word.
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.node(s).is_some_and(|n| n.is_word)
    }

    /// Returns true iff some inserted word starts with `s`.
    ///
    /// The empty string is a trivial prefix of everything, so
    /// `has_prefix("")` is always true, even on an empty trie.
    #[must_use]
    pub fn has_prefix(&self, s: &str) -> bool {
        self.node(s).is_some()
    }

    /// Walk from the root along `s`; `None` if the path breaks off.
    fn node(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in s.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_is_word() {
        let mut trie = Trie::new();
        trie.insert("cat");
        assert!(trie.is_word("cat"));
    }

    #[test]
    fn test_all_prefixes_present_after_insert() {
        let mut trie = Trie::new();
        trie.insert("bear");
        for prefix in ["b", "be", "bea", "bear"] {
            assert!(trie.has_prefix(prefix), "'{prefix}' should be a known prefix");
        }
    }

    #[test]
    fn test_prefix_is_not_a_word_unless_inserted() {
        let mut trie = Trie::new();
        trie.insert("bear");
        assert!(!trie.is_word("be"));
        assert!(!trie.is_word("bea"));

        trie.insert("be");
        assert!(trie.is_word("be"));
        // the longer word is unaffected
        assert!(trie.is_word("bear"));
    }

    #[test]
    fn test_is_word_implies_has_prefix() {
        let mut trie = Trie::new();
        for w in ["a", "an", "ant", "bee"] {
            trie.insert(w);
        }
        for s in ["a", "an", "ant", "bee", "b", "be", "x", "anteater"] {
            if trie.is_word(s) {
                assert!(trie.has_prefix(s), "is_word('{s}') must imply has_prefix('{s}')");
            }
        }
    }

    #[test]
    fn test_missing_word_and_prefix() {
        let mut trie = Trie::new();
        trie.insert("cat");
        assert!(!trie.is_word("dog"));
        assert!(!trie.has_prefix("do"));
        // path exists beyond a word only if a longer word was inserted
        assert!(!trie.has_prefix("cats"));
    }

    #[test]
    fn test_empty_string_queries() {
        let trie = Trie::new();
        assert!(trie.has_prefix(""));
        assert!(!trie.is_word(""));

        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.has_prefix(""));
        assert!(trie.is_word(""));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut once = Trie::new();
        once.insert("loop");

        let mut twice = Trie::new();
        twice.insert("loop");
        twice.insert("loop");

        for s in ["l", "lo", "loo", "loop", "loops", "", "x"] {
            assert_eq!(once.is_word(s), twice.is_word(s));
            assert_eq!(once.has_prefix(s), twice.has_prefix(s));
        }
    }

    #[test]
    fn test_from_words() {
        let trie = Trie::from_words(["be", "bear", "bell"]);
        assert!(trie.is_word("be"));
        assert!(trie.is_word("bear"));
        assert!(trie.is_word("bell"));
        assert!(trie.has_prefix("bel"));
        assert!(!trie.is_word("bel"));
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut trie = Trie::new();
        trie.insert("cat");
        // querying a missing path must not create it
        assert!(!trie.has_prefix("ca t"));
        assert!(!trie.is_word("c a"));
        assert!(!trie.has_prefix("ca t"));
        assert!(trie.is_word("cat"));
    }

    #[test]
    fn test_alphabet_is_opaque() {
        // the trie does not normalize case or restrict the alphabet
        let mut trie = Trie::new();
        trie.insert("Cat");
        trie.insert("héron");
        assert!(trie.is_word("Cat"));
        assert!(!trie.is_word("cat"));
        assert!(trie.has_prefix("hé"));
    }
}
