//! Query string tokenization.

/// Characters that are emitted as single-character tokens outside quotes.
const SPECIAL_CHARS: [char; 4] = ['(', ')', '~', '/'];

/// Split a query string into tokens.
///
/// Two passes: a character scan that honors double quotes, then a fusion
/// pass that joins `NEAR / k` and `ADJ / k` triplets into single operator
/// tokens.
///
/// Scan rules:
/// - A double quote toggles quoted mode and flushes the current token; the
///   quote itself is never emitted.
/// - Outside quotes, whitespace flushes the current token.
/// - Outside quotes, each of `( ) ~ /` flushes the current token and is
///   emitted as a token of its own.
/// - Everything else, and every character inside quotes, accumulates into
///   the current token.
pub fn lex(query: &str) -> Vec<String> {
    fuse_proximity(scan(query))
}

fn scan(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;

    for c in query.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
        } else if c.is_whitespace() && !in_quotes {
            if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
        } else if SPECIAL_CHARS.contains(&c) && !in_quotes {
            if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
            tokens.push(c.to_string());
        } else {
            token.push(c);
        }
    }

    if !token.is_empty() {
        tokens.push(token);
    }

    tokens
}

/// Join `X / Y` triplets into `X/Y` where `X` is `NEAR` or `ADJ` and `Y`
/// begins with a decimal digit.
///
/// Triplets that do not match, such as `NEAR / abc`, are left as separate
/// tokens; the parser then sees `NEAR` as an ordinary term.
fn fuse_proximity(tokens: Vec<String>) -> Vec<String> {
    let mut fused = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let is_op = tokens[i] == "NEAR" || tokens[i] == "ADJ";
        if is_op
            && i + 2 < tokens.len()
            && tokens[i + 1] == "/"
            && tokens[i + 2].starts_with(|c: char| c.is_ascii_digit())
        {
            fused.push(format!("{}/{}", tokens[i], tokens[i + 2]));
            i += 3;
        } else {
            fused.push(tokens[i].clone());
            i += 1;
        }
    }

    fused
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(query: &str) -> Vec<String> {
        lex(query)
    }

    #[test]
    fn test_lex_splits_on_whitespace() {
        assert_eq!(toks("quick brown fox"), ["quick", "brown", "fox"]);
    }

    #[test]
    fn test_lex_special_characters_are_own_tokens() {
        assert_eq!(toks("(a OR b)"), ["(", "a", "OR", "b", ")"]);
        assert_eq!(toks("a~b"), ["a", "~", "b"]);
    }

    #[test]
    fn test_lex_quotes_protect_whitespace() {
        assert_eq!(toks("\"lazy dog\""), ["lazy dog"]);
        assert_eq!(toks("quick \"lazy dog\" fox"), ["quick", "lazy dog", "fox"]);
    }

    #[test]
    fn test_lex_quotes_protect_special_characters() {
        assert_eq!(toks("\"a/b (c)\""), ["a/b (c)"]);
    }

    #[test]
    fn test_lex_opening_quote_flushes_pending_token() {
        // The colon-prefixed token is flushed when the quote starts.
        assert_eq!(toks("title:\"lazy dog\""), ["title:", "lazy dog"]);
    }

    #[test]
    fn test_fuse_proximity_operator() {
        assert_eq!(toks("fox NEAR/5 dog"), ["fox", "NEAR/5", "dog"]);
        assert_eq!(toks("quick ADJ/3 dog"), ["quick", "ADJ/3", "dog"]);
    }

    #[test]
    fn test_fuse_requires_leading_digit() {
        assert_eq!(toks("fox NEAR/abc dog"), ["fox", "NEAR", "/", "abc", "dog"]);
    }

    #[test]
    fn test_fuse_only_near_and_adj() {
        assert_eq!(toks("a FAR/2 b"), ["a", "FAR", "/", "2", "b"]);
    }

    #[test]
    fn test_fuse_at_end_of_stream() {
        assert_eq!(toks("fox NEAR/5"), ["fox", "NEAR/5"]);
        // A dangling slash has nothing to fuse with.
        assert_eq!(toks("fox NEAR/"), ["fox", "NEAR", "/"]);
    }

    #[test]
    fn test_lex_empty_query() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }
}
