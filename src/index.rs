//! Index structures and maintenance.
//!
//! This module provides the in-memory index the search engine runs against:
//!
//! - `posting`: inverted and positional (coordinate) posting lists, grouped
//!   per scope (the global document text or a single named field)
//! - `skip`: skip-pointer overlays rebuilt over the global inverted lists
//! - `indexer`: document ingestion, id assignment, and stored-field access

pub mod indexer;
pub mod posting;
pub mod skip;

pub use indexer::{IndexStats, Indexer};
pub use posting::{DocId, PositionEntry, ScopeIndex};
pub use skip::SkipList;
