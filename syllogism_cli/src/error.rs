//! Errors surfaced by the command line front end.

use grammar_rules::VocabularyError;
use std::path::PathBuf;
use syllogism_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("failed to read config at {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}
