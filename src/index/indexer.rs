//! Document ingestion and index maintenance.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::Serialize;

use crate::analysis::normalize;
use crate::query::QueryParser;
use crate::query::ast::FieldTerm;
use crate::search::Evaluator;

use super::posting::{DocId, PositionEntry, ScopeIndex};
use super::skip::SkipList;

/// Field name whose text is stored for title retrieval.
const TITLE_FIELD: &str = "title";
/// Field name whose text is stored for content retrieval.
const CONTENT_FIELD: &str = "content";

/// A snapshot of index size counters.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Number of documents in the index.
    pub doc_count: u64,
    /// Number of unique terms in the global index.
    pub term_count: u64,
    /// Number of named fields with their own index.
    pub field_count: usize,
}

/// An in-memory inverted index over structured documents.
///
/// Documents are ordered lists of `(field_name, text)` pairs. Each document
/// is indexed twice: every field into its own per-field scope, and the
/// space-joined concatenation of all fields into the global scope. The two
/// resulting position spaces are independent: proximity on unqualified
/// terms measures distances in the concatenated stream, proximity on
/// field-qualified terms measures distances within that field alone.
///
/// Document ids are assigned sequentially starting at 1 and never reused.
/// Documents are immutable once added; the index only grows.
///
/// The indexer is single-threaded: an insertion rewrites posting lists in
/// place, so it must never overlap a query. [`SearchEngine`] layers a
/// readers-writer lock on top for callers that want concurrent reads.
///
/// # Examples
///
/// ```
/// use xiphos::Indexer;
///
/// let mut indexer = Indexer::new();
/// let id = indexer.add_document(&[
///     ("title", "Cats"),
///     ("content", "the quick brown fox"),
/// ]);
/// assert_eq!(id, 1);
/// assert_eq!(indexer.execute_query("quick"), vec![1]);
/// assert_eq!(indexer.execute_query("title:cats"), vec![1]);
/// ```
///
/// [`SearchEngine`]: crate::SearchEngine
#[derive(Debug)]
pub struct Indexer {
    /// Index over the concatenated text of each document.
    global: ScopeIndex,
    /// Per-field indexes, keyed by field name.
    fields: AHashMap<String, ScopeIndex>,
    /// Skip overlays for the global inverted lists, keyed by term.
    skip_lists: AHashMap<String, SkipList>,
    /// Stored titles, for documents that supplied a `title` field.
    titles: AHashMap<DocId, String>,
    /// Stored contents, for documents that supplied a `content` field.
    contents: AHashMap<DocId, String>,
    /// Every document id ever assigned, in ascending order.
    universe: BTreeSet<DocId>,
    next_doc_id: DocId,
}

impl Indexer {
    /// Create an empty indexer.
    pub fn new() -> Self {
        Indexer {
            global: ScopeIndex::new(),
            fields: AHashMap::new(),
            skip_lists: AHashMap::new(),
            titles: AHashMap::new(),
            contents: AHashMap::new(),
            universe: BTreeSet::new(),
            next_doc_id: 1,
        }
    }

    /// Add a document and return its assigned id.
    ///
    /// Fields are indexed in the order supplied. `title` and `content`
    /// fields are additionally stored for retrieval; all other field names
    /// are indexed but not retrievable as text. After the insertion every
    /// posting list is re-sorted and de-duplicated and the skip overlays
    /// are rebuilt, so queries may again assume sorted postings.
    pub fn add_document(&mut self, fields: &[(&str, &str)]) -> DocId {
        let doc_id = self.next_doc_id;
        self.next_doc_id += 1;
        self.universe.insert(doc_id);

        for (name, text) in fields {
            if *name == TITLE_FIELD {
                self.titles.insert(doc_id, (*text).to_string());
            }
            if *name == CONTENT_FIELD {
                self.contents.insert(doc_id, (*text).to_string());
            }

            self.fields
                .entry((*name).to_string())
                .or_default()
                .index_text(doc_id, text);
        }

        let joined = fields
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>()
            .join(" ");
        self.global.index_text(doc_id, &joined);

        self.global.restore_order();
        for scope in self.fields.values_mut() {
            scope.restore_order();
        }
        self.rebuild_skip_lists();

        doc_id
    }

    /// Execute a query and return matching document ids in ascending order.
    ///
    /// Queries never fail: an empty or ill-formed query, an unknown term,
    /// or an unknown field all degrade to an empty result set.
    pub fn execute_query(&self, query: &str) -> Vec<DocId> {
        match QueryParser::new(query).parse() {
            Some(ast) => Evaluator::new(self).evaluate(&ast),
            None => Vec::new(),
        }
    }

    /// The stored title of a document, or a `"Document <id>"` placeholder
    /// when the document supplied no `title` field.
    pub fn document_title(&self, doc_id: DocId) -> String {
        match self.titles.get(&doc_id) {
            Some(title) => title.clone(),
            None => format!("Document {doc_id}"),
        }
    }

    /// The stored content of a document, or the empty string when the
    /// document supplied no `content` field.
    pub fn document_content(&self, doc_id: DocId) -> String {
        self.contents.get(&doc_id).cloned().unwrap_or_default()
    }

    /// Resolve the inverted posting list for a field term.
    ///
    /// The term value is normalized before lookup. An empty field selects
    /// the global scope; an unknown field or term yields `None`.
    pub fn lookup_postings(&self, term: &FieldTerm) -> Option<&[DocId]> {
        let normalized = normalize(&term.value);
        self.scope(&term.field)?.postings(&normalized)
    }

    /// Resolve the positional posting list for a field term.
    ///
    /// Scope selection matches [`lookup_postings`](Indexer::lookup_postings):
    /// each operand of a proximity query resolves positions within its own
    /// field's position space.
    pub fn lookup_positions(&self, term: &FieldTerm) -> Option<&[PositionEntry]> {
        let normalized = normalize(&term.value);
        self.scope(&term.field)?.positions(&normalized)
    }

    /// The set of all assigned document ids, in ascending order.
    pub fn universe(&self) -> &BTreeSet<DocId> {
        &self.universe
    }

    /// The skip overlay for a term of the global index.
    pub fn skip_list(&self, term: &str) -> Option<&SkipList> {
        self.skip_lists.get(&normalize(term))
    }

    /// The global scope index.
    pub fn global_index(&self) -> &ScopeIndex {
        &self.global
    }

    /// The scope index of a named field.
    pub fn field_index(&self, field: &str) -> Option<&ScopeIndex> {
        self.fields.get(field)
    }

    /// Names of all fields seen so far.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of documents in the index.
    pub fn doc_count(&self) -> u64 {
        self.universe.len() as u64
    }

    /// Number of unique terms in the global index.
    pub fn term_count(&self) -> u64 {
        self.global.term_count() as u64
    }

    /// Current index size counters.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count(),
            term_count: self.term_count(),
            field_count: self.fields.len(),
        }
    }

    fn scope(&self, field: &str) -> Option<&ScopeIndex> {
        if field.is_empty() {
            Some(&self.global)
        } else {
            self.fields.get(field)
        }
    }

    /// Discard and rebuild every skip overlay from the global inverted index.
    fn rebuild_skip_lists(&mut self) {
        self.skip_lists.clear();
        for (term, postings) in self.global.iter_postings() {
            if postings.is_empty() {
                continue;
            }
            self.skip_lists
                .insert(term.to_string(), SkipList::from_postings(postings));
        }
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}
