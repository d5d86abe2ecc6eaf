//! End-to-end query scenarios against a small fixed corpus.

use xiphos::{DocId, SearchEngine};

/// The shared three-document corpus.
///
/// Global token streams (title joined with content by a space):
///   doc 1: cats the quick brown fox jumps over the lazy dog
///   doc 2: dogs the lazy dog sleeps
///   doc 3: mix quick dog and lazy fox
fn fixture() -> SearchEngine {
    let engine = SearchEngine::new();
    engine.add_document(&[
        ("title", "Cats"),
        ("content", "the quick brown fox jumps over the lazy dog"),
    ]);
    engine.add_document(&[("title", "Dogs"), ("content", "the lazy dog sleeps")]);
    engine.add_document(&[("title", "Mix"), ("content", "quick dog and lazy fox")]);
    engine
}

#[test]
fn test_single_term() {
    let engine = fixture();
    assert_eq!(engine.execute_query("quick"), vec![1, 3]);
}

#[test]
fn test_and_across_fields() {
    let engine = fixture();
    // All three documents contain both terms somewhere in their global text.
    assert_eq!(engine.execute_query("dog AND lazy"), vec![1, 2, 3]);
}

#[test]
fn test_near_distances() {
    let engine = fixture();
    // Doc 1: fox at 4, dog at 9 → distance 5. Doc 3: dog at 2, fox at 5 →
    // distance 3.
    assert_eq!(engine.execute_query("fox NEAR/2 dog"), Vec::<DocId>::new());
    assert_eq!(engine.execute_query("fox NEAR/3 dog"), vec![3]);
    assert_eq!(engine.execute_query("fox NEAR/5 dog"), vec![1, 3]);
}

#[test]
fn test_adjacency_is_directed() {
    let engine = fixture();
    // Doc 3: quick at 1, dog at 2 → dog follows quick by 1. Doc 1: dog
    // follows quick by 7, too far.
    assert_eq!(engine.execute_query("quick ADJ/3 dog"), vec![3]);
    assert_eq!(engine.execute_query("dog ADJ/3 quick"), Vec::<DocId>::new());
}

#[test]
fn test_field_qualified_term() {
    let engine = fixture();
    assert_eq!(engine.execute_query("title:dogs"), vec![2]);
    assert_eq!(engine.execute_query("content:dogs"), Vec::<DocId>::new());
}

#[test]
fn test_and_not() {
    let engine = fixture();
    assert_eq!(engine.execute_query("lazy AND NOT fox"), vec![2]);
}

#[test]
fn test_or_with_unknown_term() {
    let engine = fixture();
    assert_eq!(engine.execute_query("zzz OR dog"), vec![1, 2, 3]);
}

#[test]
fn test_grouping() {
    let engine = fixture();
    assert_eq!(
        engine.execute_query("(quick OR sleeps) AND dog"),
        vec![1, 2, 3]
    );
}

#[test]
fn test_root_not_yields_rest_of_universe() {
    let engine = fixture();
    assert_eq!(engine.execute_query("NOT quick"), vec![2]);
    assert_eq!(engine.execute_query("NOT zzz"), vec![1, 2, 3]);
}

#[test]
fn test_field_proximity_uses_field_positions() {
    let engine = fixture();
    // Within the content field of doc 1, fox is at 3 and dog at 8: distance
    // 5, one token closer than in the global stream where the title shifts
    // everything by one.
    assert_eq!(
        engine.execute_query("content:fox NEAR/5 content:dog"),
        vec![1, 3]
    );
    assert_eq!(
        engine.execute_query("content:fox NEAR/4 content:dog"),
        vec![3]
    );
}

#[test]
fn test_quoted_value_collapses_to_one_term() {
    let engine = fixture();
    // "lazy dog" is a single lexeme; normalization collapses the interior
    // space, and no document contains the term "lazydog".
    assert_eq!(engine.execute_query("\"lazy dog\""), Vec::<DocId>::new());
    assert_eq!(engine.execute_query("\"lazy\""), vec![1, 2, 3]);
}

// --- Degradation behavior ---

#[test]
fn test_empty_query() {
    let engine = fixture();
    assert_eq!(engine.execute_query(""), Vec::<DocId>::new());
    assert_eq!(engine.execute_query("   \t  "), Vec::<DocId>::new());
}

#[test]
fn test_unbalanced_parentheses_are_tolerated() {
    let engine = fixture();
    assert_eq!(engine.execute_query("(quick OR sleeps"), vec![1, 2, 3]);
    assert_eq!(engine.execute_query("(lazy AND NOT fox"), vec![2]);
}

#[test]
fn test_malformed_proximity_degrades() {
    let engine = fixture();
    // NEAR/abc never fuses; NEAR, the slash, and abc become ordinary terms
    // that match nothing, so the AND chain collapses to empty.
    assert_eq!(
        engine.execute_query("fox NEAR/abc dog"),
        Vec::<DocId>::new()
    );
}

#[test]
fn test_tilde_is_ignored_not_rejected() {
    let engine = fixture();
    // `~` lexes as its own token and evaluates as an unknown term.
    assert_eq!(engine.execute_query("quick ~ dog"), Vec::<DocId>::new());
}

#[test]
fn test_unknown_field_degrades() {
    let engine = fixture();
    assert_eq!(engine.execute_query("author:tolstoy"), Vec::<DocId>::new());
    assert_eq!(engine.execute_query("author:tolstoy OR quick"), vec![1, 3]);
}

// --- Stored fields ---

#[test]
fn test_document_metadata() {
    let engine = fixture();
    assert_eq!(engine.document_title(2), "Dogs");
    assert_eq!(engine.document_content(2), "the lazy dog sleeps");

    // Ids that never stored a title or content fall back.
    assert_eq!(engine.document_title(99), "Document 99");
    assert_eq!(engine.document_content(99), "");
}

#[test]
fn test_query_terms_are_normalized() {
    let engine = fixture();
    assert_eq!(engine.execute_query("QUICK"), vec![1, 3]);
    assert_eq!(engine.execute_query("Quick!"), vec![1, 3]);
    assert_eq!(engine.execute_query("title:DOGS"), vec![2]);
}
