//! Errors from the fact store and its persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from encoding, decoding, loading or saving a fact store.
///
/// Conversational failures (an empty or unparseable sentence) are not errors;
/// they are answered with a canned reply.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed fact store: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("malformed fact store at {path:?}: {source}")]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode fact store: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether the persisted data did not have the expected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Malformed(_) | StoreError::MalformedFile { .. })
    }
}
