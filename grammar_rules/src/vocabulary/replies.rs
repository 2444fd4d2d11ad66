//! Canned replies returned by the interpreter.

use serde::{Deserialize, Serialize};

/// Fixed replies, one per conversational outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replies {
    /// The sentence was empty.
    pub prompt: String,
    /// The session is over. Callers compare against this to stop their loop.
    pub farewell: String,
    /// A forward query found nothing.
    pub unknown_subject: String,
    /// The sentence matched no pattern.
    pub not_understood: String,
    /// An inverse query found nothing.
    pub unknown_object: String,
    /// A fact was stored.
    pub acknowledged: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            prompt: "Hai scritto qualcosa?".to_string(),
            farewell: "Ciao.".to_string(),
            unknown_subject: "Non so nulla.".to_string(),
            not_understood: "Non ho capito.".to_string(),
            unknown_object: "Non lo so.".to_string(),
            acknowledged: "Ok.".to_string(),
        }
    }
}
