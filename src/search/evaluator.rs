//! Recursive evaluation of query trees.

use std::cmp::Ordering;

use crate::index::{DocId, Indexer, PositionEntry};
use crate::query::ast::{FieldTerm, QueryNode};

use super::algebra;

/// Evaluates a query tree against an indexer.
///
/// Holds a read-only borrow of the index for the duration of one query.
/// Every node evaluates to a strictly ascending, duplicate-free vector of
/// document ids; empty operands propagate naturally (an AND with an empty
/// side is empty, an OR passes the other side through, a proximity with a
/// missing operand is empty).
pub struct Evaluator<'a> {
    index: &'a Indexer,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over an indexer.
    pub fn new(index: &'a Indexer) -> Self {
        Evaluator { index }
    }

    /// Evaluate a query tree to the matching document ids, ascending.
    pub fn evaluate(&self, node: &QueryNode) -> Vec<DocId> {
        match node {
            QueryNode::Term(term) => self
                .index
                .lookup_postings(term)
                .map(<[DocId]>::to_vec)
                .unwrap_or_default(),
            QueryNode::And(left, right) => {
                algebra::intersect(&self.evaluate(left), &self.evaluate(right))
            }
            QueryNode::Or(left, right) => {
                algebra::union(&self.evaluate(left), &self.evaluate(right))
            }
            QueryNode::Not(operand) => {
                algebra::complement(self.index.universe(), &self.evaluate(operand))
            }
            QueryNode::Near {
                left,
                right,
                distance,
            } => self.evaluate_proximity(left, right, *distance, false),
            QueryNode::Adj {
                left,
                right,
                distance,
            } => self.evaluate_proximity(left, right, *distance, true),
        }
    }

    /// Documents where both terms occur with positions satisfying the
    /// proximity predicate.
    ///
    /// Each operand resolves its positional list in its own field scope, so
    /// the two sides of one proximity operator may measure positions in
    /// different spaces. The document lists are merged by a two-pointer
    /// walk; on each shared document the position-level predicate decides
    /// whether it is emitted.
    fn evaluate_proximity(
        &self,
        left: &FieldTerm,
        right: &FieldTerm,
        distance: u32,
        directed: bool,
    ) -> Vec<DocId> {
        let Some(list1) = self.index.lookup_positions(left) else {
            return Vec::new();
        };
        let Some(list2) = self.index.lookup_positions(right) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < list1.len() && j < list2.len() {
            match list1[i].doc_id.cmp(&list2[j].doc_id) {
                Ordering::Equal => {
                    if positions_match(&list1[i], &list2[j], distance, directed) {
                        results.push(list1[i].doc_id);
                    }
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }

        results
    }
}

fn positions_match(left: &PositionEntry, right: &PositionEntry, distance: u32, directed: bool) -> bool {
    if directed {
        has_adjacent_positions(&left.positions, &right.positions, distance)
    } else {
        has_close_positions(&left.positions, &right.positions, distance)
    }
}

/// Whether some pair of positions lies within `max_distance`, either order.
///
/// Two-pointer walk over the sorted position lists, advancing the smaller
/// side, so each pair that could be the closest is examined once.
fn has_close_positions(positions1: &[u32], positions2: &[u32], max_distance: u32) -> bool {
    let (mut i, mut j) = (0, 0);

    while i < positions1.len() && j < positions2.len() {
        if positions1[i].abs_diff(positions2[j]) <= max_distance {
            return true;
        }
        if positions1[i] < positions2[j] {
            i += 1;
        } else {
            j += 1;
        }
    }

    false
}

/// Whether some position of the second list follows one of the first by at
/// most `max_distance`. Order matters: the first term must come first.
fn has_adjacent_positions(positions1: &[u32], positions2: &[u32], max_distance: u32) -> bool {
    let (mut i, mut j) = (0, 0);

    while i < positions1.len() && j < positions2.len() {
        if positions2[j] > positions1[i] && positions2[j] - positions1[i] <= max_distance {
            return true;
        }
        if positions1[i] < positions2[j] {
            i += 1;
        } else {
            j += 1;
        }
    }

    false
}
