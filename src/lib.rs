//! Mauka Spell Library
//!
//! This library contains the core components of the Mauka spell checker:
//! the dictionary trie, edit distance metrics, the suggestion engine,
//! snapshot persistence, and the session type tying them together.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects such as word games.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability
//! - Comprehensive error handling and propagation
//! - Dictionary files are treated as untrusted input

// Re-export public modules
pub mod checker;
pub mod config;
pub mod data_structures;
pub mod distance;
pub mod error;
pub mod persistence;
pub mod suggest;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use checker::{CheckOutcome, LoadOutcome, SpellChecker};
pub use distance::DistanceMetric;
pub use suggest::{SuggestOptions, Suggestion};

/// Version information for the Mauka spell checker.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
