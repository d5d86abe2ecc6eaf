//! Inverted and positional posting lists.

use ahash::AHashMap;

use crate::analysis::analyze;

/// Document identifier, assigned sequentially starting at 1.
pub type DocId = u64;

/// Positions of one term within one document.
///
/// Part of a positional posting list: entries are kept sorted ascending by
/// `doc_id`, each document appears at most once, and `positions` is sorted
/// ascending without duplicates once [`ScopeIndex::restore_order`] has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionEntry {
    /// The document this entry belongs to.
    pub doc_id: DocId,
    /// Token positions of the term within the indexed text.
    pub positions: Vec<u32>,
}

impl PositionEntry {
    /// Create a new entry for a document.
    pub fn new(doc_id: DocId, positions: Vec<u32>) -> Self {
        PositionEntry { doc_id, positions }
    }
}

/// The inverted and positional indexes for a single scope.
///
/// A scope is either the global document text (the space-joined
/// concatenation of all fields) or one named field. Both kinds of scope are
/// indexed by the same algorithm; only the text they see differs, which is
/// why global and per-field position spaces are independent.
///
/// The build path tolerates out-of-order appends; [`restore_order`]
/// re-establishes sortedness and uniqueness and must be called once per
/// completed insertion before any merge-based query runs.
///
/// [`restore_order`]: ScopeIndex::restore_order
#[derive(Debug, Clone, Default)]
pub struct ScopeIndex {
    /// term → ascending, duplicate-free document ids.
    inverted: AHashMap<String, Vec<DocId>>,
    /// term → per-document position entries, ascending by document id.
    coordinate: AHashMap<String, Vec<PositionEntry>>,
}

impl ScopeIndex {
    /// Create an empty scope index.
    pub fn new() -> Self {
        ScopeIndex::default()
    }

    /// Index a text for a document within this scope.
    ///
    /// Runs the analysis pipeline, accumulates positions per term, and
    /// appends to the inverted and positional lists. Duplicate suppression
    /// here is limited to the list tail; full ordering is restored by
    /// [`ScopeIndex::restore_order`].
    pub fn index_text(&mut self, doc_id: DocId, text: &str) {
        let mut term_positions: AHashMap<String, Vec<u32>> = AHashMap::new();
        for token in analyze(text) {
            term_positions.entry(token.text).or_default().push(token.position);
        }

        for (term, positions) in term_positions {
            let postings = self.inverted.entry(term.clone()).or_default();
            if postings.last() != Some(&doc_id) {
                postings.push(doc_id);
            }

            let entries = self.coordinate.entry(term).or_default();
            match entries.iter_mut().find(|e| e.doc_id == doc_id) {
                Some(entry) => entry.positions.extend(positions),
                None => entries.push(PositionEntry::new(doc_id, positions)),
            }
        }
    }

    /// Re-sort every list in this scope and drop duplicates.
    ///
    /// Inverted lists become strictly ascending; positional lists are sorted
    /// by document id, and each entry's positions become strictly ascending.
    pub fn restore_order(&mut self) {
        for postings in self.inverted.values_mut() {
            postings.sort_unstable();
            postings.dedup();
        }

        for entries in self.coordinate.values_mut() {
            entries.sort_unstable_by_key(|e| e.doc_id);
            for entry in entries.iter_mut() {
                entry.positions.sort_unstable();
                entry.positions.dedup();
            }
        }
    }

    /// Look up the inverted posting list for a term.
    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.inverted.get(term).map(Vec::as_slice)
    }

    /// Look up the positional posting list for a term.
    pub fn positions(&self, term: &str) -> Option<&[PositionEntry]> {
        self.coordinate.get(term).map(Vec::as_slice)
    }

    /// Iterate over all terms with an inverted posting list.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.inverted.keys().map(String::as_str)
    }

    /// Number of unique terms in this scope.
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    /// Iterate over `(term, postings)` pairs of the inverted index.
    pub fn iter_postings(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.inverted.iter().map(|(t, l)| (t.as_str(), l.as_slice()))
    }
}
