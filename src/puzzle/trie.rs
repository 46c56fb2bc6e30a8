use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prefix tree node. Each node owns its children outright; the root spells the empty prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    next: HashMap<char, TrieNode>,
    /// Complete word spelled by the path to this node, if one ends here
    word: Option<String>,
}

impl TrieNode {
    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    fn add_word_internal(&mut self, word: &str, rest: &str) {
        let mut chars = rest.chars();
        match chars.next() {
            None => self.word = Some(word.to_string()),
            Some(c) => self
                .next
                .entry(c)
                .or_default()
                .add_word_internal(word, chars.as_str()),
        }
    }

    /// Walks down from this node along `path`, stopping as soon as a letter has no child
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.next_node(c)?;
        }
        Some(node)
    }

    fn count_words(&self) -> usize {
        let here = usize::from(self.is_terminal());
        here + self.next.values().map(TrieNode::count_words).sum::<usize>()
    }
}

/// Dictionary prefix tree. Built once, then only read while solving, so a shared
/// reference can be handed to any number of concurrent lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        words.into_iter().collect()
    }

    /// Adds a word to the trie. Empty words are ignored and inserting the same
    /// word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.root.add_word_internal(word, word);
    }

    /// Returns the stored word if `word` was inserted exactly. Missing letters
    /// and interior prefixes both come back as `None`.
    pub fn contains_exact(&self, word: &str) -> Option<&str> {
        self.root.descend(word).and_then(TrieNode::word)
    }

    /// True if some inserted word starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.root.count_words()
    }

    pub fn is_empty(&self) -> bool {
        self.root.next.is_empty() && !self.root.is_terminal()
    }
}

impl<'a> std::iter::FromIterator<&'a str> for Trie {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut trie = Trie::new();
        iter.into_iter().for_each(|w| trie.insert(w));
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        Trie::from_words(["CAT", "CAR", "CARP"])
    }

    #[test]
    fn test_contains_exact() {
        let trie = sample();
        assert_eq!(trie.contains_exact("CAT"), Some("CAT"));
        assert_eq!(trie.contains_exact("CAR"), Some("CAR"));
        assert_eq!(trie.contains_exact("CARP"), Some("CARP"));
        assert_eq!(trie.contains_exact("CA"), None);
        assert_eq!(trie.contains_exact("CARS"), None);
        assert_eq!(trie.contains_exact("DOG"), None);
        assert_eq!(trie.contains_exact(""), None);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = sample();
        let before = trie.clone();
        trie.insert("CAT");
        assert_eq!(trie, before);
        assert_eq!(trie.contains_exact("CAT"), Some("CAT"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_prefix_and_extension_coexist() {
        let mut trie = Trie::new();
        trie.insert("GOD");
        trie.insert("GO");
        let go = trie.root().next_node('G').and_then(|n| n.next_node('O')).unwrap();
        assert_eq!(go.word(), Some("GO"));
        assert!(go.next_node('D').unwrap().is_terminal());
        assert!(trie.has_prefix("GO"));
        assert!(trie.has_prefix("G"));
        assert!(!trie.has_prefix("GX"));
    }

    #[test]
    fn test_empty_word_ignored() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = Trie::from_words(["CARP", "CAR", "CAT"]);
        assert_eq!(a, sample());
    }
}
