//! Text analysis for indexing and querying.
//!
//! The analysis pipeline turns raw text into a stream of positioned terms:
//!
//! ```text
//! Text → Tokenizer → raw tokens → Normalizer → analyzed terms
//! ```
//!
//! Tokenization splits on whitespace and sentence punctuation; normalization
//! keeps only lowercased alphanumerics. A token whose normalized form is
//! empty is discarded, but its position is still consumed, so distances
//! measured between surviving terms reflect the original token stream.
//!
//! # Examples
//!
//! ```
//! use xiphos::analysis::analyze;
//!
//! let terms = analyze("The quick... brown FOX!");
//! let texts: Vec<_> = terms.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["the", "quick", "brown", "fox"]);
//! ```

pub mod normalizer;
pub mod token;
pub mod tokenizer;

pub use normalizer::normalize;
pub use token::{Token, analyze};
pub use tokenizer::tokenize;
