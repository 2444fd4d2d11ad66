//! Fact store persistence.
//!
//! The whole store is one JSON file, read and written in a single step.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use super::FactStore;
use crate::error::StoreError;

/// Load a store from `path`.
///
/// A missing file is not an error: it returns `Ok(None)` so the caller can
/// start empty. A file that is not a subject -> attributes map fails with
/// [`StoreError::MalformedFile`].
pub fn load_store(path: &Path) -> Result<Option<FactStore>, StoreError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let store: FactStore =
        serde_json::from_slice(&raw).map_err(|source| StoreError::MalformedFile {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), subjects = store.len(), "loaded fact store");
    Ok(Some(store))
}

/// Write the whole store to `path`, replacing any previous content.
pub fn save_store(store: &FactStore, path: &Path) -> Result<(), StoreError> {
    let bytes = store.to_bytes()?;
    fs::write(path, bytes).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), subjects = store.len(), "saved fact store");
    Ok(())
}
