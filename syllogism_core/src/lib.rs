//! # Syllogism Core
//!
//! A fact store with transitive queries, driven by a tiny sentence
//! interpreter. Statements of the form "X è Y" add facts, "Cosa sai su X"
//! walks everything reachable from X, and "Chi è Y" walks back to everything
//! that reaches Y.
//!
//! ## Core Components
//!
//! - **knowledge_base**: The fact store, its traversal engine and persistence
//! - **interpreter**: Classifies a sentence into an [`Intent`]
//! - **session**: Owns a store and its file, answers sentences
//!
//! The read/print loop lives in `syllogism_cli`; this crate never touches a
//! terminal.

pub mod error;
pub mod interpreter;
pub mod knowledge_base;
pub mod session;

pub use error::*;
pub use interpreter::*;
pub use knowledge_base::*;
pub use session::*;
