//! Configuration file for the `sillogismi` shell.
//!
//! ```toml
//! vocabulary = "english.toml"
//!
//! [session]
//! store_path = "facts.js"
//!
//! [session.traversal]
//! mode = "legacy"
//! max_depth = 8
//! ```
//!
//! Command line flags win over the file.

use grammar_rules::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use syllogism_core::{SessionConfig, TraversalMode};

use crate::error::CliError;

/// Settings read from the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub session: SessionConfig,

    /// Vocabulary file replacing the built-in Italian word lists.
    pub vocabulary: Option<PathBuf>,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_path: Option<PathBuf>,
    pub vocabulary: Option<PathBuf>,
    pub legacy_traversal: bool,
}

/// Read a config file. The file must exist.
pub fn load_from(path: &Path) -> Result<CliConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply command line overrides on top of the file settings.
pub fn apply_overrides(mut config: CliConfig, overrides: Overrides) -> CliConfig {
    if let Some(store_path) = overrides.store_path {
        config.session.store_path = store_path;
    }
    if let Some(vocabulary) = overrides.vocabulary {
        config.vocabulary = Some(vocabulary);
    }
    if overrides.legacy_traversal && config.session.traversal == TraversalMode::Guarded {
        config.session.traversal = TraversalMode::legacy();
    }
    config
}

/// The vocabulary to use: the configured file, or the built-in one.
pub fn resolve_vocabulary(config: &CliConfig) -> Result<Vocabulary, CliError> {
    match &config.vocabulary {
        Some(path) => Ok(Vocabulary::load(path)?),
        None => Ok(Vocabulary::default()),
    }
}
