//! Query abstract syntax tree.

/// A term, optionally qualified with the field to search in.
///
/// An empty `field` targets the global index (all fields at once). The
/// `value` is kept as written in the query; normalization happens at
/// evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTerm {
    /// Field to search in; empty means the global scope.
    pub field: String,
    /// Raw term value from the query.
    pub value: String,
}

impl FieldTerm {
    /// Create a new field term.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        FieldTerm {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A node of the parsed query tree.
///
/// Binary operators keep their operands as full subtrees. Proximity
/// operators are deliberately narrower: their operands are bare field
/// terms, never subexpressions, mirroring the grammar where `NEAR/k` and
/// `ADJ/k` bind two adjacent terms at the primary level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// A single term, optionally field-qualified.
    Term(FieldTerm),
    /// Both operands must match.
    And(Box<QueryNode>, Box<QueryNode>),
    /// Either operand may match.
    Or(Box<QueryNode>, Box<QueryNode>),
    /// The operand must not match.
    Not(Box<QueryNode>),
    /// The operands occur within `distance` positions of each other,
    /// in either order.
    Near {
        left: FieldTerm,
        right: FieldTerm,
        distance: u32,
    },
    /// `right` follows `left` within `distance` positions.
    Adj {
        left: FieldTerm,
        right: FieldTerm,
        distance: u32,
    },
}

impl QueryNode {
    /// Create a term node.
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        QueryNode::Term(FieldTerm::new(field, value))
    }

    /// Combine two nodes with AND.
    pub fn and(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::And(Box::new(left), Box::new(right))
    }

    /// Combine two nodes with OR.
    pub fn or(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::Or(Box::new(left), Box::new(right))
    }

    /// Negate a node.
    pub fn not(operand: QueryNode) -> Self {
        QueryNode::Not(Box::new(operand))
    }
}
