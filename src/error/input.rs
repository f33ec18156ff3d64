//! Input validation errors.

use thiserror::Error;

/// Errors for words rejected before they reach the dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    Empty,

    /// Error when a word contains a non-alphabetic character.
    #[error("Word '{word}' contains non-alphabetic character {ch:?}")]
    NonAlphabetic {
        /// The rejected word.
        word: String,
        /// The first offending character.
        ch: char,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    TooLong {
        /// The rejected word.
        word: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },
}
