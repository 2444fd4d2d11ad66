//! Sentence Interpreter - turns a sentence into an [`Intent`].
//!
//! Classification is pure: nothing here touches the fact store.
//! 1. **Empty**: a blank sentence asks the user to write something
//! 2. **Normalize**: terminal punctuation and outer whitespace are dropped
//! 3. **Rules**: the [`RULES`] table is tried in order, first match wins
//! 4. **Fallback**: anything no rule claims is not understood

mod rules;

pub use rules::*;

use grammar_rules::{strip_terminal_punctuation, Replies, Vocabulary};
use tracing::trace;

/// What a sentence asks for. Borrowed phrases point into the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    /// The sentence was blank.
    Prompt,
    /// End the session (after saving).
    Farewell,
    /// Everything known about `subject`.
    Query { subject: &'a str },
    /// Everything that leads to `object`.
    InverseQuery { object: &'a str },
    /// Store the fact `subject -> object`.
    Assert { subject: &'a str, object: &'a str },
    /// No pattern matched.
    NotUnderstood,
}

/// Classifies sentences against a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    vocabulary: Vocabulary,
}

impl Interpreter {
    /// Create an interpreter for the given vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Create an interpreter with the default Italian vocabulary.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The canned answers of the vocabulary.
    pub fn replies(&self) -> &Replies {
        &self.vocabulary.replies
    }

    /// Classify one sentence.
    pub fn classify<'a>(&self, sentence: &'a str) -> Intent<'a> {
        if sentence.trim().is_empty() {
            return Intent::Prompt;
        }

        let sentence = strip_terminal_punctuation(sentence);
        for rule in &RULES {
            if let Some(intent) = (rule.matcher)(&self.vocabulary, sentence) {
                trace!(rule = rule.name, "rule matched");
                return intent;
            }
        }
        Intent::NotUnderstood
    }
}
