//! Session - owns a fact store and its file, and answers sentences.

use grammar_rules::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::interpreter::{Intent, Interpreter};
use crate::knowledge_base::{load_store, save_store, FactStore, TraversalMode};

/// File used when no storage location is configured.
pub const DEFAULT_STORE_FILE: &str = "Sillogismi.js";

/// Unique identifier for sessions, used to correlate log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the fact store is loaded from and saved to.
    pub store_path: PathBuf,

    /// How queries walk the fact graph.
    pub traversal: TraversalMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            traversal: TraversalMode::default(),
        }
    }
}

impl SessionConfig {
    /// Set the storage location.
    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    /// Set the traversal mode.
    pub fn with_traversal(mut self, traversal: TraversalMode) -> Self {
        self.traversal = traversal;
        self
    }
}

/// A conversation with one fact store.
///
/// The session is the only owner of its store; two sessions on the same file
/// will overwrite each other's saves.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: SessionConfig,
    interpreter: Interpreter,
    store: FactStore,
}

impl Session {
    /// Open a session with the default vocabulary.
    ///
    /// Loads the store from `config.store_path` if the file exists and starts
    /// empty otherwise.
    pub fn open(config: SessionConfig) -> Result<Self, StoreError> {
        Self::open_with_vocabulary(config, Vocabulary::default())
    }

    /// Open a session with a custom vocabulary.
    pub fn open_with_vocabulary(
        config: SessionConfig,
        vocabulary: Vocabulary,
    ) -> Result<Self, StoreError> {
        let id = SessionId::new();
        let store = match load_store(&config.store_path)? {
            Some(store) => store,
            None => {
                info!(
                    session = %id,
                    path = %config.store_path.display(),
                    "no fact store found, starting empty"
                );
                FactStore::new()
            }
        }
        .with_traversal(config.traversal);

        Ok(Self {
            id,
            config,
            interpreter: Interpreter::new(vocabulary),
            store,
        })
    }

    /// Identifier attached to this session's log records.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Read access to the fact store.
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// The reply that ends a session. Loops stop when `process` returns it.
    pub fn farewell(&self) -> &str {
        &self.interpreter.replies().farewell
    }

    /// Answer one sentence.
    ///
    /// Conversational problems are answered with a canned reply. The only
    /// error comes from saving the store when the session is ended.
    pub fn process(&mut self, sentence: &str) -> Result<String, StoreError> {
        let span = tracing::debug_span!("process", session = %self.id);
        let _enter = span.enter();

        let intent = self.interpreter.classify(sentence);
        debug!(?intent, "classified sentence");

        let replies = self.interpreter.replies();
        let reply = match intent {
            Intent::Prompt => replies.prompt.clone(),
            Intent::Farewell => {
                self.save()?;
                replies.farewell.clone()
            }
            Intent::Query { subject } => join_lines(self.store.query(subject))
                .unwrap_or_else(|| replies.unknown_subject.clone()),
            Intent::InverseQuery { object } => join_lines(self.store.inverse_query(object))
                .unwrap_or_else(|| replies.unknown_object.clone()),
            Intent::Assert { subject, object } => {
                if self.store.store(subject, object) {
                    debug!(subject, object, "stored fact");
                }
                replies.acknowledged.clone()
            }
            Intent::NotUnderstood => replies.not_understood.clone(),
        };
        Ok(reply)
    }

    /// Save the store to the configured location.
    pub fn save(&self) -> Result<(), StoreError> {
        save_store(&self.store, &self.config.store_path)
    }

    /// Save the store to another location.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        save_store(&self.store, path.as_ref())
    }
}

fn join_lines(lines: Vec<String>) -> Option<String> {
    (!lines.is_empty()).then(|| lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> Session {
        let config = SessionConfig::default().with_store_path(dir.path().join(DEFAULT_STORE_FILE));
        Session::open(config).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.store_path, PathBuf::from("Sillogismi.js"));
        assert_eq!(config.traversal, TraversalMode::Guarded);
    }

    #[test]
    fn test_statement_then_query() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);

        assert_eq!(session.process("Il gatto è un animale").unwrap(), "Ok.");
        assert_eq!(session.process("Cosa sai su gatto").unwrap(), "animale");
    }

    #[test]
    fn test_blank_sentence_prompts_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);

        assert_eq!(session.process("").unwrap(), "Hai scritto qualcosa?");
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_farewell_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);
        session.process("Il gatto è un animale").unwrap();

        let reply = session.process("Ciao").unwrap();
        assert_eq!(reply, session.farewell());
        assert_eq!(reply, "Ciao.");

        let reopened = open_in(&dir);
        assert_eq!(reopened.store(), session.store());
    }

    #[test]
    fn test_inverse_query_hit() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);
        session.process("Il gatto è un animale").unwrap();

        assert_eq!(session.process("Chi è un animale").unwrap(), "GATTO");
    }

    #[test]
    fn test_pronoun_prefix_asks_instead_of_storing() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);

        assert_eq!(session.process("Chiara è una ragazza").unwrap(), "Non lo so.");
        assert!(session.store().is_empty());

        session.process("Italia è un paese").unwrap();
        let subjects: Vec<_> = session.store().subjects().collect();
        assert_eq!(subjects, vec!["TALIA"]);
    }

    #[test]
    fn test_unknown_replies() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);

        assert_eq!(session.process("Cosa sai su gatto").unwrap(), "Non so nulla.");
        assert_eq!(session.process("Chi è un animale").unwrap(), "Non lo so.");
        assert_eq!(session.process("gatto animale").unwrap(), "Non ho capito.");
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_multi_line_answer() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);
        session.process("Socrate è un uomo").unwrap();
        session.process("Gli uomini sono mortali").unwrap();
        session.process("Un uomo è un essere vivente").unwrap();

        assert_eq!(
            session.process("Parlami dell'uomo").unwrap(),
            "essere vivente"
        );
        assert_eq!(
            session.process("Cosa sai di Socrate?").unwrap(),
            "uomo\nessere vivente"
        );
        assert_eq!(
            session.process("Chi è un essere vivente?").unwrap(),
            "UOMO\nSOCRATE"
        );
    }

    #[test]
    fn test_explicit_save_to() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_in(&dir);
        session.process("Il cane è un animale").unwrap();

        let backup = dir.path().join("backup.js");
        session.save_to(&backup).unwrap();

        let loaded = load_store(&backup).unwrap().unwrap();
        assert_eq!(loaded.attributes("cane").unwrap(), ["animale"]);
        assert!(!dir.path().join(DEFAULT_STORE_FILE).exists());
    }

    #[test]
    fn test_open_rejects_malformed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = Session::open(SessionConfig::default().with_store_path(&path)).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_farewell_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::default()
            .with_store_path(dir.path().join("missing").join(DEFAULT_STORE_FILE));
        let mut session = Session::open(config).unwrap();

        let err = session.process("Ciao").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_traversal_mode_reaches_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::default()
            .with_store_path(dir.path().join(DEFAULT_STORE_FILE))
            .with_traversal(TraversalMode::Legacy { max_depth: 1 });
        let mut session = Session::open(config).unwrap();
        session.process("A è B").unwrap();
        session.process("B è A").unwrap();

        assert_eq!(session.store().traversal(), TraversalMode::Legacy { max_depth: 1 });
        assert_eq!(session.process("Cosa sai su A").unwrap(), "B\nA");
    }
}
