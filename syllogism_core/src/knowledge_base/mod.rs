//! Knowledge Base module - the fact store.
//!
//! The store is a directed graph over case-folded identities:
//! - **Subjects**: keys, upper-cased on the way in
//! - **Attributes**: values kept as written, unique per subject ignoring case
//! - **Edges**: an attribute that is also a subject links the two entries
//!
//! Cycles are allowed; see [`TraversalMode`] for how queries deal with them.

mod persist;
mod store;
mod traversal;

pub use persist::*;
pub use store::*;
pub use traversal::*;
