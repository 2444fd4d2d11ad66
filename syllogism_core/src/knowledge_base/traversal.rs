//! Transitive queries over the fact store.
//!
//! A forward query lists the direct attributes of a subject, then everything
//! reachable from each of them, depth first in insertion order. An inverse
//! query walks the same edges backwards.
//!
//! The graph may contain cycles (`A -> B`, `B -> A`). [`TraversalMode::Guarded`]
//! keeps visited sets keyed by folded identity and always terminates.
//! [`TraversalMode::Legacy`] repeats nodes exactly like a naive recursion
//! would, and stops after `max_depth` levels or [`LEGACY_RESULT_LIMIT`]
//! results, whichever comes first.

use grammar_rules::fold;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use super::FactStore;

/// Recursion limit used by [`TraversalMode::Legacy`] unless configured.
pub const DEFAULT_LEGACY_DEPTH: usize = 16;

/// Most results a [`TraversalMode::Legacy`] query returns. A cycle through a
/// subject with several attributes grows by that factor at every level.
pub const LEGACY_RESULT_LIMIT: usize = 10_000;

fn default_legacy_depth() -> usize {
    DEFAULT_LEGACY_DEPTH
}

/// How queries walk the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TraversalMode {
    /// Each node is reported and expanded at most once.
    #[default]
    Guarded,

    /// Naive recursion without deduplication, cut off after `max_depth`
    /// levels or [`LEGACY_RESULT_LIMIT`] results.
    Legacy {
        #[serde(default = "default_legacy_depth")]
        max_depth: usize,
    },
}

impl TraversalMode {
    /// Legacy traversal with the default depth limit.
    pub fn legacy() -> Self {
        TraversalMode::Legacy {
            max_depth: DEFAULT_LEGACY_DEPTH,
        }
    }
}

/// Visited sets of a guarded forward walk, keyed by folded identity.
#[derive(Default)]
struct Walk {
    reported: HashSet<String>,
    expanded: HashSet<String>,
    found: Vec<String>,
}

impl FactStore {
    /// Everything reachable from `subject`: its direct attributes followed by
    /// the query of each attribute in turn.
    ///
    /// Returns an empty list for an unknown subject.
    pub fn query(&self, subject: &str) -> Vec<String> {
        match self.traversal {
            TraversalMode::Guarded => self.forward_guarded(subject),
            TraversalMode::Legacy { max_depth } => {
                let mut found = Vec::new();
                if self.forward_legacy(subject, 0, max_depth, &mut found) {
                    warn!(subject, max_depth, "forward query cut off at legacy limit");
                }
                found
            }
        }
    }

    /// Every subject that reaches `attribute`: each subject holding it, in
    /// insertion order, followed by the inverse query of that subject.
    pub fn inverse_query(&self, attribute: &str) -> Vec<String> {
        match self.traversal {
            TraversalMode::Guarded => self.inverse_guarded(attribute),
            TraversalMode::Legacy { max_depth } => {
                let mut found = Vec::new();
                if self.inverse_legacy(attribute, 0, max_depth, &mut found) {
                    warn!(attribute, max_depth, "inverse query cut off at legacy limit");
                }
                found
            }
        }
    }

    fn forward_guarded(&self, subject: &str) -> Vec<String> {
        let mut walk = Walk::default();
        let mut stack: Vec<std::slice::Iter<'_, String>> = Vec::new();

        if let Some(attributes) = self.expand(fold(subject), &mut walk) {
            stack.push(attributes.iter());
        }
        while let Some(pending) = stack.last_mut() {
            let Some(attribute) = pending.next() else {
                stack.pop();
                continue;
            };
            if let Some(attributes) = self.expand(fold(attribute), &mut walk) {
                stack.push(attributes.iter());
            }
        }
        walk.found
    }

    /// Report the attributes of `key` not seen yet. Returns them for further
    /// walking unless `key` is unknown or was expanded before.
    fn expand<'s>(&'s self, key: String, walk: &mut Walk) -> Option<&'s [String]> {
        let attributes = self.attributes_by_key(&key)?;
        if !walk.expanded.insert(key) {
            return None;
        }
        for attribute in attributes {
            if walk.reported.insert(fold(attribute)) {
                walk.found.push(attribute.clone());
            }
        }
        Some(attributes)
    }

    fn inverse_guarded(&self, attribute: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut reported: HashSet<String> = HashSet::new();
        let root = fold(attribute);
        let mut scanned: HashSet<String> = HashSet::from([root.clone()]);

        // (folded target, position of the next entry to scan)
        let mut stack: Vec<(String, usize)> = vec![(root, 0)];
        while let Some((target, cursor)) = stack.last_mut() {
            let hit = self.entries[*cursor..]
                .iter()
                .position(|entry| entry.has_attribute(target.as_str()));
            let Some(offset) = hit else {
                stack.pop();
                continue;
            };
            let position = *cursor + offset;
            *cursor = position + 1;

            let subject = &self.entries[position].subject;
            let key = fold(subject);
            if reported.insert(key.clone()) {
                found.push(subject.clone());
                if scanned.insert(key.clone()) {
                    stack.push((key, 0));
                }
            }
        }
        found
    }

    /// Returns `true` if a limit cut the walk short.
    fn forward_legacy(
        &self,
        subject: &str,
        depth: usize,
        max_depth: usize,
        found: &mut Vec<String>,
    ) -> bool {
        let Some(attributes) = self.attributes(subject) else {
            return false;
        };
        if depth > max_depth || found.len() >= LEGACY_RESULT_LIMIT {
            return true;
        }
        let room = LEGACY_RESULT_LIMIT - found.len();
        found.extend(attributes.iter().take(room).cloned());
        if attributes.len() > room {
            return true;
        }

        let mut truncated = false;
        for attribute in attributes {
            truncated |= self.forward_legacy(attribute, depth + 1, max_depth, found);
        }
        truncated
    }

    /// Returns `true` if a limit cut the walk short.
    fn inverse_legacy(
        &self,
        attribute: &str,
        depth: usize,
        max_depth: usize,
        found: &mut Vec<String>,
    ) -> bool {
        let mut truncated = false;
        for entry in self.entries.iter().filter(|e| e.has_attribute(attribute)) {
            if depth > max_depth || found.len() >= LEGACY_RESULT_LIMIT {
                return true;
            }
            found.push(entry.subject.clone());
            truncated |= self.inverse_legacy(&entry.subject, depth + 1, max_depth, found);
        }
        truncated
    }
}
