//! Query execution against the index.
//!
//! - `algebra`: merge-style set operations over sorted posting lists
//! - `evaluator`: recursive interpreter for the query AST
//!
//! Every operation consumes and produces strictly ascending, duplicate-free
//! document id vectors, which is what keeps the merges linear.

pub mod algebra;
pub mod evaluator;

pub use evaluator::Evaluator;
