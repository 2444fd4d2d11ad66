//! Fact Store - subjects and their attributes, in insertion order.

use grammar_rules::{eq_ci, fold};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::TraversalMode;
use crate::error::StoreError;

/// One subject and everything stated about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactEntry {
    /// The subject key, upper-cased when it was first stored.
    pub subject: String,

    /// Attributes in insertion order, original casing.
    pub attributes: Vec<String>,
}

impl FactEntry {
    /// Check if this entry holds `attribute`, ignoring case.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| eq_ci(a, attribute))
    }
}

/// The fact store.
///
/// Entries keep the order in which their subjects were first stored. That
/// order is what inverse queries scan and what serialization writes, so both
/// are deterministic.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    pub(super) entries: Vec<FactEntry>,

    /// Folded subject -> position in `entries`.
    index: HashMap<String, usize>,

    pub(super) traversal: TraversalMode,
}

impl PartialEq for FactStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FactStore {}

impl FactStore {
    /// Create a new empty fact store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how queries walk the graph.
    pub fn with_traversal(mut self, traversal: TraversalMode) -> Self {
        self.traversal = traversal;
        self
    }

    /// The traversal mode used by queries.
    pub fn traversal(&self) -> TraversalMode {
        self.traversal
    }

    /// Record that `subject` has `attribute`.
    ///
    /// The subject is upper-cased; the attribute is kept as written and is
    /// not added again if the subject already has it in any casing. Returns
    /// `true` if the store changed.
    pub fn store(&mut self, subject: &str, attribute: &str) -> bool {
        let key = fold(subject);
        match self.index.get(&key) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                if entry.has_attribute(attribute) {
                    false
                } else {
                    entry.attributes.push(attribute.to_string());
                    true
                }
            }
            None => {
                self.push_entry(key, vec![attribute.to_string()]);
                true
            }
        }
    }

    /// Direct attributes of a subject, if it is known.
    pub fn attributes(&self, subject: &str) -> Option<&[String]> {
        self.attributes_by_key(&fold(subject))
    }

    /// Direct attributes by already-folded key.
    pub(super) fn attributes_by_key(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].attributes.as_slice())
    }

    /// Check if a subject is known.
    pub fn contains(&self, subject: &str) -> bool {
        self.index.contains_key(&fold(subject))
    }

    /// Iterate over all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &FactEntry> {
        self.entries.iter()
    }

    /// Subject keys in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.subject.as_str())
    }

    /// Get the number of subjects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode the whole store as a JSON object `{"SUBJECT": ["attr", ...]}`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(self).map_err(StoreError::Encode)
    }

    /// Decode a store written by [`FactStore::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        serde_json::from_slice(bytes).map_err(StoreError::Malformed)
    }

    fn push_entry(&mut self, subject: String, attributes: Vec<String>) {
        self.index.insert(fold(&subject), self.entries.len());
        self.entries.push(FactEntry {
            subject,
            attributes,
        });
    }
}

impl Serialize for FactStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.subject, &entry.attributes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FactStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FactStoreVisitor)
    }
}

struct FactStoreVisitor;

impl<'de> Visitor<'de> for FactStoreVisitor {
    type Value = FactStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from subject to a list of attributes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FactStore, A::Error> {
        let mut store = FactStore::new();
        while let Some((subject, attributes)) = access.next_entry::<String, Vec<String>>()? {
            if store.contains(&subject) {
                return Err(de::Error::custom(format!("duplicate subject `{subject}`")));
            }
            // Entries are restored exactly as written, subject casing included.
            store.push_entry(subject, attributes);
        }
        Ok(store)
    }
}
