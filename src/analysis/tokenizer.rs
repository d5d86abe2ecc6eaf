//! Text tokenization.

/// Characters that terminate a token in addition to whitespace.
const BREAK_CHARS: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Split raw text into tokens.
///
/// Tokens are separated by whitespace and by the sentence punctuation set
/// `. , ! ? ; :`. Separator characters are consumed and never appear in the
/// output; empty tokens are not emitted. All other characters, including
/// hyphens and apostrophes, accumulate into the current token.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();

    for c in text.chars() {
        if c.is_whitespace() || BREAK_CHARS.contains(&c) {
            if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
        } else {
            token.push(c);
        }
    }

    if !token.is_empty() {
        tokens.push(token);
    }

    tokens
}
