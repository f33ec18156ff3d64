//! Dictionary persistence.
//!
//! Reads and writes [`NiihauTrie`] snapshots on disk. The encoding itself lives
//! in [`snapshot`]; this module adds file handling: mapping read failures onto
//! [`LoadError`] kinds, and replacing the destination atomically on save so a
//! crash mid-write never leaves a half-written dictionary behind.

pub mod snapshot;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::data_structures::NiihauTrie;
use crate::error::dictionary::LoadError;

/// Loads a dictionary snapshot from `path`.
///
/// # Arguments
///
/// * `path` - The snapshot file
/// * `max_depth` - Deepest node level accepted while decoding
///
/// # Returns
///
/// * `Ok(NiihauTrie)` - The decoded dictionary
/// * `Err(LoadError::NotFound)` - If the file does not exist
/// * `Err(LoadError::Corrupt)` - If the file cannot be decoded
/// * `Err(LoadError::Io)` - If the file exists but cannot be read
pub fn load_dictionary<P: AsRef<Path>>(path: P, max_depth: usize) -> Result<NiihauTrie, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: Arc::new(err),
        },
    })?;

    let trie = snapshot::decode(&bytes, max_depth).map_err(|reason| LoadError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), words = trie.len(), "Decoded dictionary snapshot");
    Ok(trie)
}

/// Saves a dictionary snapshot to `path`, replacing any existing file.
///
/// The snapshot is written to a temporary file in the destination directory,
/// synced, and then renamed over `path`. Missing parent directories are created.
pub fn save_dictionary<P: AsRef<Path>>(trie: &NiihauTrie, path: P) -> io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        snapshot::encode(trie, &mut writer)?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), words = trie.len(), "Wrote dictionary snapshot");
    Ok(())
}
