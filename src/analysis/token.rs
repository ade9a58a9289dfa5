//! Token types for text analysis.
//!
//! A [`Token`] is a non-empty, contiguous run of non-separator characters cut
//! out of the source text. Tokens are produced once by a tokenizer and are
//! read-only afterwards; downstream stages work on their text.
//!
//! # Examples
//!
//! ```
//! use wordform::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Consume the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is the ordered sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::with_offsets("слово", 2, 6, 16);
        assert_eq!(token.text, "слово");
        assert_eq!(token.position, 2);
        assert_eq!(token.end_offset - token.start_offset, token.text.len());
        assert_eq!(token.into_text(), "слово");
    }

    #[test]
    fn test_token_stream_preserves_order() {
        let stream = vec![
            Token::with_offsets("b", 0, 0, 1),
            Token::with_offsets("a", 1, 2, 3),
            Token::with_offsets("b", 2, 4, 5),
        ]
        .into_token_stream();
        let positions: Vec<(usize, String)> = stream.map(|token| (token.position, token.text)).collect();
        assert_eq!(positions, vec![(0, "b".into()), (1, "a".into()), (2, "b".into())]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::with_offsets("word", 3, 0, 4).to_string(), "word");
    }
}
