//! The sentence vocabulary: which phrases end a session, ask a question,
//! separate a subject from its object, and which articles are dropped.
//!
//! Lists are data. The default is Italian; another vocabulary can be loaded
//! from TOML, where any list left out keeps its default.

mod replies;

pub use replies::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::normalize::{match_leading_phrase, strip_leading_article, MatchPolicy};

/// Errors from loading a vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("vocabulary list `{0}` must not be empty")]
    Empty(&'static str),

    #[error("vocabulary list `{0}` contains a blank entry")]
    BlankEntry(&'static str),
}

/// Word lists driving the sentence interpreter.
///
/// Order matters in every list: the first entry that matches wins, so longer
/// or more specific forms go before the ones they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Leading phrases that end the session.
    pub termination: Vec<String>,
    /// Leading phrases that ask for everything known about a subject.
    pub forward_query: Vec<String>,
    /// Copular verbs separating subject and object.
    pub predicates: Vec<String>,
    /// Interrogative pronouns turning a copular sentence into an inverse query.
    pub inverse_query: Vec<String>,
    /// Determiners dropped from the front of subjects and objects.
    pub articles: Vec<String>,
    /// How interrogative pronouns line up with the subject. `prefix` lets
    /// "Chiara" start with "CHI"; `word` does not.
    pub inverse_query_policy: MatchPolicy,
    /// How articles line up with the phrase they are stripped from.
    pub article_policy: MatchPolicy,
    /// Canned answers.
    pub replies: Replies,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            termination: words(&["FINE", "CIAO", "GRAZIE", "ESCI"]),
            forward_query: words(&[
                "PARLAMI DE",
                "COSA SAI SU",
                "COSA SAI DE",
                "COSA SAI DI",
                "INFORMAZIONI SU",
            ]),
            predicates: words(&["E'", "SONO", "è"]),
            inverse_query: words(&["CHI", "COSA", "CHE COSA"]),
            articles: words(&[
                "LLO", "LLA", "LLE", "LL'", "LL’", "IL", "LO", "LA", "GLI", "LE", "I", "UNO", "UNA",
                "UN'", "UN’", "UN", "L'", "L’", "L",
            ]),
            inverse_query_policy: MatchPolicy::Prefix,
            article_policy: MatchPolicy::Prefix,
            replies: Replies::default(),
        }
    }
}

impl Vocabulary {
    /// Termination phrases match as raw prefixes ("Grazie mille").
    pub const TERMINATION_POLICY: MatchPolicy = MatchPolicy::Prefix;
    /// Query phrases match as raw prefixes so that "Parlami dello gnomo"
    /// leaves "llo gnomo" for the article rules.
    pub const FORWARD_QUERY_POLICY: MatchPolicy = MatchPolicy::Prefix;

    /// Parse a vocabulary from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary = toml::from_str(raw)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Check that no list contains blank entries and that there is at least
    /// one predicate.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        if self.predicates.is_empty() {
            return Err(VocabularyError::Empty("predicates"));
        }

        let lists: [(&'static str, &[String]); 5] = [
            ("termination", &self.termination),
            ("forward_query", &self.forward_query),
            ("predicates", &self.predicates),
            ("inverse_query", &self.inverse_query),
            ("articles", &self.articles),
        ];
        for (name, list) in lists {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(VocabularyError::BlankEntry(name));
            }
        }
        Ok(())
    }

    /// The termination phrase leading `sentence`, if any.
    pub fn termination_phrase(&self, sentence: &str) -> Option<&str> {
        match_leading_phrase(sentence, &self.termination, Self::TERMINATION_POLICY)
            .map(|(phrase, _)| phrase)
    }

    /// The text following a leading forward-query phrase, if any.
    pub fn strip_forward_query<'a>(&self, sentence: &'a str) -> Option<&'a str> {
        match_leading_phrase(sentence, &self.forward_query, Self::FORWARD_QUERY_POLICY)
            .map(|(_, rest)| rest)
    }

    /// Whether `subject` starts with an interrogative pronoun.
    pub fn is_inverse_query(&self, subject: &str) -> bool {
        match_leading_phrase(subject, &self.inverse_query, self.inverse_query_policy).is_some()
    }

    /// Drop the first matching leading article from `phrase`.
    pub fn strip_article<'a>(&self, phrase: &'a str) -> &'a str {
        strip_leading_article(phrase, &self.articles, self.article_policy)
    }
}
