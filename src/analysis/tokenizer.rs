//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline, responsible for splitting
//! input text into tokens.
//!
//! # Examples
//!
//! ```
//! use wordform::analysis::separator::SeparatorStrategy;
//! use wordform::analysis::tokenizer::{SeparatorTokenizer, Tokenizer};
//! use wordform::config::ProbabilityConfig;
//!
//! let tokenizer = SeparatorTokenizer::from_strategy(
//!     SeparatorStrategy::Predefined,
//!     &ProbabilityConfig::default(),
//! );
//! let tokens: Vec<_> = tokenizer.tokenize("Hello,  world!!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod separator;

pub use separator::SeparatorTokenizer;
