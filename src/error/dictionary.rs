//! Dictionary snapshot error module.
//!
//! Load failures are split into the two recoverable kinds the spell checker
//! heals from (`NotFound`, `Corrupt`) and plain read failures.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a dictionary snapshot.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// The snapshot file does not exist.
    #[error("Dictionary file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The snapshot exists but cannot be decoded.
    #[error("Dictionary file {} is corrupt: {reason}", .path.display())]
    Corrupt {
        /// Path of the snapshot
        path: PathBuf,
        /// What the decoder rejected
        reason: CorruptReason,
    },

    /// The snapshot exists but could not be read.
    #[error("Failed to read dictionary file {}: {source}", .path.display())]
    Io {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl LoadError {
    /// Path of the snapshot the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound(path) | Self::Corrupt { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

/// Reasons a snapshot is rejected by the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptReason {
    /// Input ended before a complete snapshot was read.
    #[error("snapshot is truncated")]
    Truncated,

    /// The file does not start with the snapshot magic bytes.
    #[error("bad magic bytes")]
    BadMagic,

    /// The format version is not understood.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    /// The stored checksum does not match the body.
    #[error("checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        /// Checksum recorded in the trailer
        stored: u32,
        /// Checksum of the bytes actually read
        computed: u32,
    },

    /// A node carries flag bits this version does not define.
    #[error("unknown node flags {0:#04x}")]
    InvalidFlags(u8),

    /// A child key is not a Unicode scalar value.
    #[error("invalid character code {0:#x}")]
    InvalidChar(u32),

    /// Child keys are duplicated or not in ascending order.
    #[error("child key {0:?} is out of order")]
    UnorderedKey(char),

    /// A non-root node is neither a word boundary nor has children.
    #[error("dead node at depth {0}")]
    DeadNode(usize),

    /// Node nesting exceeds the configured limit.
    #[error("node depth exceeds limit of {0}")]
    TooDeep(usize),

    /// Bytes remain after the root node record.
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
}
