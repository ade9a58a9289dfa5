//! Tokenizer splitting on a classified separator set.

use regex::Regex;

use super::Tokenizer;
use crate::analysis::separator::{
    SeparatorClassifier, SeparatorExtractor, SeparatorSet, SeparatorStrategy,
};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::config::ProbabilityConfig;
use crate::error::{Result, WordformError};

/// A tokenizer that classifies the separators of each text and emits the
/// gaps between separator runs as tokens.
///
/// Consecutive separators collapse into a single boundary and empty pieces
/// are dropped, so every emitted token is non-empty.
#[derive(Clone, Debug)]
pub struct SeparatorTokenizer {
    extractor: SeparatorExtractor,
}

impl SeparatorTokenizer {
    /// Create a tokenizer using the given separator extractor.
    pub fn new(extractor: SeparatorExtractor) -> Self {
        SeparatorTokenizer { extractor }
    }

    /// Create a tokenizer for a separator strategy.
    pub fn from_strategy(strategy: SeparatorStrategy, probability: &ProbabilityConfig) -> Self {
        Self::new(SeparatorExtractor::new(strategy, probability))
    }

    /// The separator extractor used by this tokenizer.
    pub fn extractor(&self) -> &SeparatorExtractor {
        &self.extractor
    }

    /// Classify the separators of `text`.
    pub fn separators(&self, text: &str) -> SeparatorSet {
        self.extractor.classify(text)
    }

    /// Split `text` into token strings, in order of appearance.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let separators = self.separators(text);
        Ok(split_with(text, &separators)?
            .into_iter()
            .map(Token::into_text)
            .collect())
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let separators = self.separators(text);
        Ok(split_with(text, &separators)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}

/// Split `text` on maximal runs of characters from `separators`.
pub fn split_with(text: &str, separators: &SeparatorSet) -> Result<Vec<Token>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let Some(pattern) = separators.to_pattern() else {
        return Ok(vec![Token::with_offsets(text, 0, 0, text.len())]);
    };
    let regex = Regex::new(&pattern)
        .map_err(|e| WordformError::analysis(format!("Invalid separator pattern: {e}")))?;

    let mut tokens = Vec::new();
    let mut last_end = 0;

    for mat in regex.find_iter(text) {
        if mat.start() > last_end {
            let position = tokens.len();
            tokens.push(Token::with_offsets(
                &text[last_end..mat.start()],
                position,
                last_end,
                mat.start(),
            ));
        }
        last_end = mat.end();
    }

    // Add final gap if any
    if last_end < text.len() {
        let position = tokens.len();
        tokens.push(Token::with_offsets(
            &text[last_end..],
            position,
            last_end,
            text.len(),
        ));
    }

    Ok(tokens)
}
