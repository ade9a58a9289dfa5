//! Text analysis: separator classification and tokenization.
//!
//! ```text
//! Text → Separator Classifier → Separator Set → Tokenizer → Token Stream
//! ```

pub mod separator;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use separator::{SeparatorClassifier, SeparatorExtractor, SeparatorSet, SeparatorStrategy};
pub use token::{Token, TokenStream};
pub use tokenizer::{SeparatorTokenizer, Tokenizer};
