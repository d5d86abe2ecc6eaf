//! Error types for the xiphos library.

use thiserror::Error;

/// Error type for xiphos operations.
///
/// Query execution is total and never produces an error: ill-formed queries
/// and unknown terms degrade to empty result sets. Errors arise only at the
/// library boundary, chiefly from [`DocumentSource`](crate::source::DocumentSource)
/// implementations during ingestion.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// Invalid argument provided to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A document source failed to produce a document.
    #[error("Document source error: {0}")]
    Source(String),
}

impl XiphosError {
    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        XiphosError::InvalidArgument(message.into())
    }

    /// Create a document source error.
    pub fn source<S: Into<String>>(message: S) -> Self {
        XiphosError::Source(message.into())
    }
}

/// Result type alias for xiphos operations.
pub type Result<T> = std::result::Result<T, XiphosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XiphosError::invalid_argument("corpus has no usable columns");
        assert_eq!(
            err.to_string(),
            "Invalid argument: corpus has no usable columns"
        );

        let err = XiphosError::source("unreadable row");
        assert_eq!(err.to_string(), "Document source error: unreadable row");
    }
}
