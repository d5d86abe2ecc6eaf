//! High-level search engine facade.

use parking_lot::RwLock;

use crate::error::Result;
use crate::index::{DocId, IndexStats, Indexer};
use crate::source::DocumentSource;

/// A shareable search engine over an in-memory index.
///
/// Wraps an [`Indexer`] in a readers-writer lock: queries and stored-field
/// reads take a shared lock and may run concurrently, while insertions take
/// the exclusive lock, since post-insert maintenance rewrites posting lists
/// in place. The core index itself stays single-threaded; this facade is
/// the discipline callers use to share it.
///
/// # Examples
///
/// ```
/// use xiphos::SearchEngine;
///
/// let engine = SearchEngine::new();
/// engine.add_document(&[
///     ("title", "Dogs"),
///     ("content", "the lazy dog sleeps"),
/// ]);
///
/// assert_eq!(engine.execute_query("lazy AND dog"), vec![1]);
/// assert_eq!(engine.document_title(1), "Dogs");
/// ```
#[derive(Debug, Default)]
pub struct SearchEngine {
    index: RwLock<Indexer>,
}

impl SearchEngine {
    /// Create an engine over an empty index.
    pub fn new() -> Self {
        SearchEngine {
            index: RwLock::new(Indexer::new()),
        }
    }

    /// Add a document and return its assigned id.
    pub fn add_document(&self, fields: &[(&str, &str)]) -> DocId {
        self.index.write().add_document(fields)
    }

    /// Ingest every document a source yields; returns the number added.
    ///
    /// Stops at the first source error; documents ingested before the
    /// failure remain in the index.
    pub fn ingest(&self, source: &mut dyn DocumentSource) -> Result<u64> {
        self.ingest_with_progress(source, |_| {})
    }

    /// Ingest every document a source yields, invoking `progress` with the
    /// running count after each document.
    ///
    /// Callers decide the reporting cadence inside the callback; the CLI
    /// prints a counter every fixed number of documents.
    pub fn ingest_with_progress(
        &self,
        source: &mut dyn DocumentSource,
        mut progress: impl FnMut(u64),
    ) -> Result<u64> {
        let mut count = 0;
        while let Some(fields) = source.next_document()? {
            let pairs: Vec<(&str, &str)> = fields
                .iter()
                .map(|(name, text)| (name.as_str(), text.as_str()))
                .collect();
            self.add_document(&pairs);
            count += 1;
            progress(count);
        }
        Ok(count)
    }

    /// Execute a query, returning matching document ids in ascending order.
    pub fn execute_query(&self, query: &str) -> Vec<DocId> {
        self.index.read().execute_query(query)
    }

    /// The stored title of a document, or a `"Document <id>"` placeholder.
    pub fn document_title(&self, doc_id: DocId) -> String {
        self.index.read().document_title(doc_id)
    }

    /// The stored content of a document, or the empty string.
    pub fn document_content(&self, doc_id: DocId) -> String {
        self.index.read().document_content(doc_id)
    }

    /// Current index size counters.
    pub fn stats(&self) -> IndexStats {
        self.index.read().stats()
    }
}
