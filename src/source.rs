//! Document source contract for bulk ingestion.

use crate::error::Result;

/// A pull-based supplier of documents for ingestion.
///
/// Each document is an ordered list of `(field_name, text)` pairs; the
/// order is preserved by the indexer when it builds the concatenated global
/// text. Sources are fallible: reading or decoding an underlying corpus may
/// fail, and such errors propagate out of
/// [`SearchEngine::ingest`](crate::SearchEngine::ingest).
pub trait DocumentSource {
    /// Produce the next document, or `None` when the source is exhausted.
    fn next_document(&mut self) -> Result<Option<Vec<(String, String)>>>;
}

/// A source over an in-memory collection of documents.
///
/// Useful in tests and for callers that already hold their corpus in
/// memory.
#[derive(Debug, Default)]
pub struct VecSource {
    documents: std::vec::IntoIter<Vec<(String, String)>>,
}

impl VecSource {
    /// Create a source from a list of documents.
    pub fn new(documents: Vec<Vec<(String, String)>>) -> Self {
        VecSource {
            documents: documents.into_iter(),
        }
    }
}

impl DocumentSource for VecSource {
    fn next_document(&mut self) -> Result<Option<Vec<(String, String)>>> {
        Ok(self.documents.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_yields_in_order() {
        let mut source = VecSource::new(vec![
            vec![("title".to_string(), "first".to_string())],
            vec![("title".to_string(), "second".to_string())],
        ]);

        assert_eq!(
            source.next_document().unwrap().unwrap()[0].1,
            "first"
        );
        assert_eq!(
            source.next_document().unwrap().unwrap()[0].1,
            "second"
        );
        assert!(source.next_document().unwrap().is_none());
    }
}
