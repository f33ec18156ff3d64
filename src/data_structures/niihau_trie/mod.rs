//! Niihau Word Trie Implementation
//!
//! This module provides a prefix tree for storing a dictionary vocabulary.
//! Lookup and insertion cost O(word length); words sharing a prefix share
//! nodes.
//!
//! Key features:
//! * Exact word lookup
//! * Removal that prunes every node left without purpose
//! * Depth-first enumeration of all words, or of all words under a prefix
//!
//! The trie itself performs no locking. Sessions that share it between threads
//! wrap it in a readers-writer lock (see [`crate::checker::SpellChecker`]).

mod node;

pub use node::TrieNode;

/// Niihau Word Trie: the in-memory dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NiihauTrie {
    /// The root node of the trie, representing the empty prefix
    root: TrieNode,

    /// Number of words stored
    len: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie around an existing node graph, counting its words.
    pub(crate) fn from_root(root: TrieNode) -> Self {
        let len = count_words(&root);
        Self { root, len }
    }

    /// The root node of the trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// Creates any missing nodes along the character path and marks the last
    /// one as a word boundary. Inserting the empty string marks the root.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly added, `false` if it was already present.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> bool {
        let mut node = &mut self.root;
        for c in word.as_ref().chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// Returns `false` as soon as a character along the path is missing, or
    /// when the path exists but does not end on a word boundary.
    pub fn search<W: AsRef<str>>(&self, word: W) -> bool {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_end_of_word)
    }

    /// Alias for [`NiihauTrie::search`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.search(word)
    }

    /// Removes a word from the trie.
    ///
    /// After clearing the word boundary, every node on the path that no
    /// longer leads to a word is pruned bottom-up.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it wasn't found.
    pub fn remove<W: AsRef<str>>(&mut self, word: W) -> bool {
        let chars: Vec<char> = word.as_ref().chars().collect();
        let removed = Self::remove_recursive(&mut self.root, &chars);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_recursive(node: &mut TrieNode, chars: &[char]) -> bool {
        let Some((&c, rest)) = chars.split_first() else {
            let was_word = node.is_end_of_word;
            node.is_end_of_word = false;
            return was_word;
        };

        let Some(child) = node.children.get_mut(&c) else {
            return false;
        };

        let removed = Self::remove_recursive(child, rest);
        if removed && child.is_dead() {
            node.children.remove(&c);
        }
        removed
    }

    /// Returns every word stored in the trie.
    ///
    /// Words are produced by a depth-first traversal; since children are kept
    /// in code point order the result is sorted.
    pub fn words(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.len);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut result);
        result
    }

    /// Returns every stored word that starts with `prefix`.
    pub fn words_with_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = prefix.as_ref();
        let mut result = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            let mut path = prefix.to_string();
            collect_words(node, &mut path, &mut result);
        }
        result
    }

    /// Returns the number of words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Clears all words from the trie.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

fn collect_words(node: &TrieNode, path: &mut String, result: &mut Vec<String>) {
    if node.is_end_of_word {
        result.push(path.clone());
    }

    for (c, child) in &node.children {
        path.push(*c);
        collect_words(child, path, result);
        path.pop();
    }
}

fn count_words(node: &TrieNode) -> usize {
    usize::from(node.is_end_of_word) + node.children.values().map(count_words).sum::<usize>()
}

fn count_nodes(node: &TrieNode) -> usize {
    1 + node.children.values().map(count_nodes).sum::<usize>()
}

impl<S: AsRef<str>> FromIterator<S> for NiihauTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for NiihauTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
