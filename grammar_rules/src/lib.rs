//! # Grammar Rules
//!
//! The language rules of Sillogismi: how text is case folded, how phrases are
//! normalized before they become fact-store keys, and which words the
//! interpreter reacts to. This crate knows nothing about facts or storage.

pub mod folding;
pub mod normalize;
pub mod vocabulary;

pub use folding::*;
pub use normalize::*;
pub use vocabulary::*;
