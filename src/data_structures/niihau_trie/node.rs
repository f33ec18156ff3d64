//! Node implementation for the Niihau word trie.
//!
//! Nodes are the building blocks of the trie. Each node owns its children
//! outright, so dropping a node drops the whole subtree below it.

use std::collections::BTreeMap;

/// A node in the Niihau word trie.
///
/// Each edge represents one character; a node is a word boundary when the path
/// from the root to it spells a stored word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Map of characters to child nodes, ordered by code point
    pub(crate) children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node spells a complete word
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node terminates a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Child nodes in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// A node that is neither a word boundary nor leads to one.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_end_of_word && self.children.is_empty()
    }
}

impl Drop for TrieNode {
    // Unlinks descendants onto a heap stack so dropping a deep chain does not recurse.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
