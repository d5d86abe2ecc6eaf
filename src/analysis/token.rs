//! Positioned terms produced by the analysis pipeline.

use super::normalizer::normalize;
use super::tokenizer::tokenize;

/// A normalized term together with its position in the token stream.
///
/// Positions are zero-based offsets into the raw token sequence of the text
/// that produced them. When a raw token normalizes to the empty string it is
/// dropped, but the position it occupied is not reassigned: the surviving
/// terms keep their original offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The normalized term text.
    pub text: String,
    /// Zero-based position in the raw token stream.
    pub position: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, position: u32) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// Run the full analysis pipeline over a text.
///
/// Tokenizes, normalizes each raw token, and drops tokens that normalize to
/// the empty string while preserving the original position numbering.
pub fn analyze(text: &str) -> Vec<Token> {
    tokenize(text)
        .into_iter()
        .enumerate()
        .filter_map(|(position, raw)| {
            let term = normalize(&raw);
            if term.is_empty() {
                None
            } else {
                Some(Token::new(term, position as u32))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_assigns_positions() {
        let tokens = analyze("the quick brown fox");
        assert_eq!(tokens, vec![
            Token::new("the", 0),
            Token::new("quick", 1),
            Token::new("brown", 2),
            Token::new("fox", 3),
        ]);
    }

    #[test]
    fn test_analyze_preserves_positions_of_dropped_tokens() {
        // "--" tokenizes as a token of its own but normalizes to nothing;
        // "b" must stay at position 2.
        let tokens = analyze("a -- b");
        assert_eq!(tokens, vec![Token::new("a", 0), Token::new("b", 2)]);
    }

    #[test]
    fn test_analyze_normalizes() {
        let tokens = analyze("The LAZY dog.");
        assert_eq!(tokens, vec![
            Token::new("the", 0),
            Token::new("lazy", 1),
            Token::new("dog", 2),
        ]);
    }

    #[test]
    fn test_analyze_empty_text() {
        assert!(analyze("").is_empty());
        assert!(analyze("... --- !!!").is_empty());
    }
}
