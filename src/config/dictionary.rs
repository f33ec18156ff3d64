//! Dictionary configuration module.
//!
//! This module defines where the dictionary snapshot lives, which language label
//! the session carries, and the limits applied to words and snapshots.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted for `max_word_length` and `max_snapshot_depth`.
///
/// Trie walks, snapshot encoding and node drops recurse once per character,
/// so this also bounds their stack use.
pub const DEPTH_CEILING: usize = 1024;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path of the dictionary snapshot file
    pub path: PathBuf,

    /// Language label of the session (metadata only)
    pub language: String,

    /// Whether to write the snapshot after every successful add or remove
    pub autosave: bool,

    /// Whether word lookups are case sensitive; when false words are lowercased
    pub case_sensitive: bool,

    /// Maximum word length in characters
    pub max_word_length: usize,

    /// Maximum node depth accepted when decoding a snapshot
    pub max_snapshot_depth: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("english_dictionary.bin"),
            language: "english".to_string(),
            autosave: true,
            case_sensitive: true,
            max_word_length: 256,
            max_snapshot_depth: 1024,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Dictionary path cannot be empty".to_string(),
            ));
        }

        if self.language.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Language cannot be empty".to_string(),
            ));
        }

        if self.max_word_length == 0 || self.max_word_length > DEPTH_CEILING {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: format!("must be between 1 and {DEPTH_CEILING}"),
            });
        }

        if self.max_snapshot_depth > DEPTH_CEILING {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_snapshot_depth".to_string(),
                message: format!("must be at most {DEPTH_CEILING}"),
            });
        }

        // Anything we accept as a word must be loadable again.
        if self.max_snapshot_depth < self.max_word_length {
            return Err(ConfigError::ValidationError(format!(
                "max_snapshot_depth ({}) must be greater than or equal to max_word_length ({})",
                self.max_snapshot_depth, self.max_word_length
            )));
        }

        Ok(())
    }
}
