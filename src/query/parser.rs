//! Recursive-descent query parser.

use super::ast::{FieldTerm, QueryNode};
use super::lexer::lex;

/// Recursive-descent parser over a lexed token stream.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// or       := and { "OR" and }
/// and      := not { [ "AND" ] not }        (AND is optional: juxtaposition)
/// not      := "NOT" primary | primary
/// primary  := "(" or ")"
///           | term "NEAR/k" term
///           | term "ADJ/k"  term
///           | term
/// term     := [ field ":" ] value          (value may be quote-wrapped)
/// ```
///
/// `OR` and `AND` are left-associative; `NOT` binds tighter than `AND`;
/// the proximity operators bind at the primary level and accept only bare
/// field terms as operands. Parentheses override precedence.
///
/// Parsing is total. A missing closing parenthesis is tolerated (the group
/// simply ends with the token stream), operators missing an operand degrade
/// to whatever was parsed so far, and a proximity operator that failed to
/// fuse in the lexer is consumed as an ordinary term.
///
/// # Examples
///
/// ```
/// use xiphos::query::{QueryNode, QueryParser};
///
/// let ast = QueryParser::new("quick OR lazy dog").parse().unwrap();
/// // AND binds tighter: quick OR (lazy AND dog)
/// assert!(matches!(ast, QueryNode::Or(_, _)));
/// ```
#[derive(Debug)]
pub struct QueryParser {
    tokens: Vec<String>,
    current: usize,
}

impl QueryParser {
    /// Lex a query string and set up the parser.
    pub fn new(query: &str) -> Self {
        QueryParser {
            tokens: lex(query),
            current: 0,
        }
    }

    /// Parse the token stream into a query tree.
    ///
    /// Returns `None` for an empty query.
    pub fn parse(mut self) -> Option<QueryNode> {
        if self.tokens.is_empty() {
            return None;
        }
        self.parse_or()
    }

    fn parse_or(&mut self) -> Option<QueryNode> {
        let mut left = self.parse_and()?;

        while self.peek() == Some("OR") {
            self.current += 1;
            match self.parse_and() {
                Some(right) => left = QueryNode::or(left, right),
                None => break,
            }
        }

        Some(left)
    }

    fn parse_and(&mut self) -> Option<QueryNode> {
        let mut left = self.parse_not()?;

        while let Some(token) = self.peek() {
            // Juxtaposition implies AND, but only before a plain operand:
            // OR, NOT, a closing parenthesis, and the proximity operators
            // all end the run.
            if token == "OR" || token == "NOT" || token == ")" {
                break;
            }
            if is_proximity_operator(token) {
                break;
            }

            if token == "AND" {
                self.current += 1;
            }

            let Some(right) = self.parse_not() else {
                break;
            };
            left = QueryNode::and(left, right);
        }

        Some(left)
    }

    fn parse_not(&mut self) -> Option<QueryNode> {
        if self.peek() == Some("NOT") {
            self.current += 1;
            // A NOT with no operand negates the empty term, which matches
            // nothing; the result is then the whole universe.
            let operand = self
                .parse_primary()
                .unwrap_or_else(|| QueryNode::term("", ""));
            return Some(QueryNode::not(operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Option<QueryNode> {
        if self.peek() == Some("(") {
            self.current += 1;
            let node = self.parse_or();
            // A missing ")" is tolerated: the group ends with the stream.
            if self.peek() == Some(")") {
                self.current += 1;
            }
            return node;
        }

        // A `term NEAR/k term` or `term ADJ/k term` triplet is consumed as
        // one proximity node whose operands are bare field terms.
        if self.current + 2 < self.tokens.len() {
            let op = &self.tokens[self.current + 1];
            if is_proximity_operator(op) {
                let directed = op.starts_with("ADJ/");
                let distance = op.split_once('/').map_or(0, |(_, rest)| parse_distance(rest));
                let left = parse_field_term(&self.tokens[self.current]);
                let right = parse_field_term(&self.tokens[self.current + 2]);
                self.current += 3;

                return Some(if directed {
                    QueryNode::Adj {
                        left,
                        right,
                        distance,
                    }
                } else {
                    QueryNode::Near {
                        left,
                        right,
                        distance,
                    }
                });
            }
        }

        let token = self.tokens.get(self.current)?.clone();
        self.current += 1;
        Some(QueryNode::Term(parse_field_term(&token)))
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.current).map(String::as_str)
    }
}

fn is_proximity_operator(token: &str) -> bool {
    token.starts_with("NEAR/") || token.starts_with("ADJ/")
}

/// Parse a distance parameter from the digits that lead the string.
fn parse_distance(s: &str) -> u32 {
    let digits: &str = s
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s, |end| &s[..end]);
    digits.parse().unwrap_or(0)
}

/// Split a lexeme into field and value.
///
/// A colon at an interior position separates the field name from the value;
/// a lexeme with no interior colon is an unqualified term targeting the
/// global scope. A value wrapped in a matching pair of double quotes has
/// them stripped.
fn parse_field_term(lexeme: &str) -> FieldTerm {
    let (field, value) = match lexeme.find(':') {
        Some(p) if p > 0 && p < lexeme.len() - 1 => (&lexeme[..p], &lexeme[p + 1..]),
        _ => ("", lexeme),
    };
    FieldTerm::new(field, strip_quotes(value))
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
