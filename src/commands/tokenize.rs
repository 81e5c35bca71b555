//! Quote-aware tokenizer
//!
//! Splits a command line into words. A `"` or `'` opens a quoted span that
//! only the same quote character closes; whitespace inside a span is kept.
//! An unterminated quote stays open until the end of input. Empty tokens are
//! never produced.

/// A token together with the byte offset where its raw text starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with quote characters stripped
    pub text: String,
    /// Byte offset of the token's first raw character (including a quote)
    pub start: usize,
}

/// Split `line` into tokens
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_spans(line).into_iter().map(|t| t.text).collect()
}

/// Split `line` into tokens, keeping their raw start offsets
pub fn tokenize_spans(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;

    for (offset, ch) in line.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                start.get_or_insert(offset);
            }
            None if ch.is_whitespace() => {
                if let Some(s) = start.take() {
                    if !current.is_empty() {
                        tokens.push(Token {
                            text: std::mem::take(&mut current),
                            start: s,
                        });
                    }
                }
            }
            None => {
                start.get_or_insert(offset);
                current.push(ch);
            }
        }
    }

    if let Some(s) = start {
        if !current.is_empty() {
            tokens.push(Token {
                text: current,
                start: s,
            });
        }
    }

    tokens
}

/// Whether the text ends on a token boundary (i.e. in whitespace)
pub fn ends_with_whitespace(text: &str) -> bool {
    text.chars().last().is_some_and(char::is_whitespace)
}

/// Whether a quoted span is still open at the end of `text`
pub fn has_open_quote(text: &str) -> bool {
    let mut quote: Option<char> = None;
    for ch in text.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None => {}
        }
    }
    quote.is_some()
}

/// Remove every quote character from `text`
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| *c != '"' && *c != '\'').collect()
}
