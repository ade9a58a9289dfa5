//! # Wordform
//!
//! Builds a dictionary of words from raw text: each word is a root token
//! with every surface form of it seen in the text and how often they occur.
//!
//! ## Features
//!
//! - Separator classification: predefined, non-alphabetic or inferred from
//!   the character statistics of the text
//! - Prefix and edit-distance comparison of tokens, no lexicon required
//! - Deterministic, order-defined grouping of forms
//! - Parallel word construction on a bounded thread pool
//! - Quality evaluation against a reference dictionary

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod morphology;
pub mod pipeline;
pub mod quality;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{SeparatorSet, SeparatorStrategy, Token, Tokenizer};
    pub use crate::config::DictionaryConfig;
    pub use crate::error::{Result, WordformError};
    pub use crate::morphology::{Dictionary, LexicalEntry, PipelineObserver, Word};
    pub use crate::pipeline::DictionaryPipeline;
    pub use crate::quality::{IdealDictionary, QualityReport, QualityThresholds};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
