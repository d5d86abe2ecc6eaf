//! # Xiphos
//!
//! An in-memory boolean full-text search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Inverted and positional indexes, globally and per field
//! - Boolean query language with `AND`, `OR`, `NOT`, and grouping
//! - Proximity operators `NEAR/k` and `ADJ/k`
//! - Field-qualified terms (`title:rust`) and quoted literals
//! - Skip-pointer overlays over the global posting lists
//!
//! ## Quick start
//!
//! ```
//! use xiphos::SearchEngine;
//!
//! let engine = SearchEngine::new();
//! engine.add_document(&[
//!     ("title", "Cats"),
//!     ("content", "the quick brown fox jumps over the lazy dog"),
//! ]);
//! engine.add_document(&[
//!     ("title", "Dogs"),
//!     ("content", "the lazy dog sleeps"),
//! ]);
//!
//! assert_eq!(engine.execute_query("lazy AND NOT quick"), vec![2]);
//! assert_eq!(engine.execute_query("title:cats"), vec![1]);
//! ```

// Core modules
pub mod analysis;
mod engine;
mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod source;

// Re-exports for the public API
pub use engine::SearchEngine;
pub use error::{Result, XiphosError};
pub use index::{DocId, IndexStats, Indexer, PositionEntry, ScopeIndex, SkipList};
pub use query::{FieldTerm, QueryNode, QueryParser};
pub use source::{DocumentSource, VecSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
