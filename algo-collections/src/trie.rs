//! Prefix tree over `char` symbols.
//!
//! Every walk, including the destructor, uses an explicit stack, so a single
//! very long word cannot exhaust the call stack.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end: bool,
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// A set of words stored as a prefix tree.
///
/// Each node owns its children; a missing edge ends a lookup immediately.
/// Children are kept in a `BTreeMap`, so enumeration is lexicographic.
///
/// # Example
///
/// ```rust
/// use algo_collections::trie::Trie;
///
/// let mut trie: Trie = ["car", "cart", "cat"].into_iter().collect();
/// assert!(trie.contains("cart"));
/// assert!(!trie.contains("ca"));
/// assert!(trie.starts_with("ca"));
/// assert_eq!(trie.words_with_prefix("car"), vec!["car", "cart"]);
/// ```
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`, returning true if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        let inserted = !node.is_end;
        node.is_end = true;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_end)
    }

    /// Returns true if any stored word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Removes `word`, pruning nodes that no longer lead to any word.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();

        // Deepest node on the path that still marks or branches to another
        // word; everything below it on the path goes.
        let mut keep = 0;
        let mut node = &self.root;
        for (depth, ch) in chars.iter().enumerate() {
            if node.is_end || node.children.len() > 1 {
                keep = depth;
            }
            match node.children.get(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.is_end {
            return false;
        }
        let prune = node.children.is_empty() && !chars.is_empty();

        let depth = if prune { keep } else { chars.len() };
        let mut node = &mut self.root;
        for ch in &chars[..depth] {
            let Some(child) = node.children.get_mut(ch) else {
                return false;
            };
            node = child;
        }
        if prune {
            node.children.remove(&chars[keep]);
        } else {
            node.is_end = false;
        }
        self.len -= 1;
        true
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            let mut buffer = prefix.to_string();
            collect_words(node, &mut buffer, &mut words);
        }
        words
    }

    /// Longest prefix shared by every stored word.
    pub fn longest_common_prefix(&self) -> String {
        let mut prefix = String::new();
        if self.is_empty() {
            return prefix;
        }
        let mut node = &self.root;
        while !node.is_end && node.children.len() == 1 {
            let Some((ch, child)) = node.children.iter().next() else {
                break;
            };
            prefix.push(*ch);
            node = child;
        }
        prefix
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

fn collect_words(node: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
    if node.is_end {
        words.push(buffer.clone());
    }
    // One child iterator per pushed character, plus the starting node's.
    let mut stack = vec![node.children.iter()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some((&ch, child)) => {
                buffer.push(ch);
                if child.is_end {
                    words.push(buffer.clone());
                }
                stack.push(child.children.iter());
            }
            None => {
                stack.pop();
                if !stack.is_empty() {
                    buffer.pop();
                }
            }
        }
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        self.words_with_prefix("").iter().map(String::as_str).collect()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words_with_prefix("")).finish()
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.insert("apple"));
        assert!(!trie.insert("apple"));
        assert!(trie.contains("apple"));
        assert!(!trie.contains("app"));
        assert!(!trie.contains("apples"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_missing_edge_fails_fast() {
        let trie: Trie = ["hello"].into_iter().collect();
        assert!(!trie.contains("help"));
        assert!(!trie.starts_with("x"));
    }

    #[test]
    fn test_empty_word() {
        let mut trie = Trie::new();
        assert!(!trie.contains(""));
        assert!(trie.starts_with(""));
        trie.insert("");
        assert!(trie.contains(""));
    }

    #[test]
    fn test_remove_prunes_but_keeps_prefixes() {
        let mut trie: Trie = ["app", "apple", "apply"].into_iter().collect();
        assert!(trie.remove("apple"));
        assert!(!trie.contains("apple"));
        assert!(trie.contains("app"));
        assert!(trie.contains("apply"));
        assert!(!trie.remove("apple"));

        assert!(trie.remove("apply"));
        assert!(!trie.starts_with("appl"));
        assert!(trie.contains("app"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_remove_prefix_only_word() {
        let mut trie: Trie = ["app", "apple"].into_iter().collect();
        assert!(!trie.remove("ap"));
        assert!(trie.remove("app"));
        assert!(trie.contains("apple"));
        assert!(trie.starts_with("app"));
    }

    #[test]
    fn test_words_with_prefix_sorted() {
        let trie: Trie = ["banana", "band", "ban", "apple", "bandana"].into_iter().collect();
        assert_eq!(
            trie.words_with_prefix("ban"),
            vec!["ban", "banana", "band", "bandana"]
        );
        assert!(trie.words_with_prefix("c").is_empty());
    }

    #[test]
    fn test_longest_common_prefix() {
        let trie: Trie = ["flower", "flow", "flight"].into_iter().collect();
        assert_eq!(trie.longest_common_prefix(), "fl");

        let trie: Trie = ["flow", "flower"].into_iter().collect();
        assert_eq!(trie.longest_common_prefix(), "flow");

        assert_eq!(Trie::new().longest_common_prefix(), "");
    }

    #[test]
    fn test_very_long_word() {
        let long: String = "ab".repeat(150_000);
        let mut trie: Trie = [long.as_str(), "abc"].into_iter().collect();
        assert!(trie.contains(&long));
        assert!(trie.starts_with(&long[..1_000]));

        let words = trie.words_with_prefix("ab");
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], "abc");

        let copy = trie.clone();
        assert!(trie.remove(&long));
        assert!(!trie.contains(&long));
        assert!(!trie.starts_with("aba"));
        assert!(trie.contains("abc"));
        assert!(copy.contains(&long));
        drop(copy);
    }

    #[test]
    fn test_clone_and_debug() {
        let trie: Trie = ["b", "a", ""].into_iter().collect();
        let copy = trie.clone();
        assert_eq!(copy.len(), 3);
        assert_eq!(format!("{copy:?}"), r#"{"", "a", "b"}"#);
    }
}
