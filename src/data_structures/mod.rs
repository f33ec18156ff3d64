//! Data structures for the Mauka spell checker.
//!
//! This module contains the dictionary storage used by the checker.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, single-parent trees with deterministic traversal order

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, TrieNode};
