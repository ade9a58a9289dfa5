//! Dictionary words: a root with its surface variants and a frequency.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordformError};
use crate::morphology::comparator::TokenComparator;
use crate::morphology::grouper::FormGroup;
use crate::morphology::root::RootExtractor;

/// Read access shared by dictionary entries.
pub trait LexicalEntry {
    /// The canonical form.
    fn root(&self) -> &str;

    /// All surface forms, the root included.
    fn variants(&self) -> &[String];

    /// Total occurrences of all variants in the source token stream.
    fn frequency(&self) -> u64;

    /// Check whether `token` is one of the variants.
    fn contains(&self, token: &str) -> bool {
        self.variants().iter().any(|variant| variant == token)
    }
}

/// A dictionary entry.
///
/// The root is always one of the variants and variants are distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    root: String,
    variants: Vec<String>,
    frequency: u64,
}

impl Word {
    /// Create a word, checking that `root` is one of `variants`.
    pub fn new<S: Into<String>>(root: S, variants: Vec<String>, frequency: u64) -> Result<Self> {
        let root = root.into();
        if !variants.contains(&root) {
            return Err(WordformError::invalid_operation(format!(
                "root {root:?} is not one of the variants"
            )));
        }

        let mut word = Word {
            root,
            variants: Vec::with_capacity(variants.len()),
            frequency,
        };
        word.extend_variants(variants);
        Ok(word)
    }

    /// Absorb `other` into this word: append its unseen variants and add its
    /// frequency. The root of `self` is kept.
    pub(crate) fn merge(&mut self, other: Word) {
        self.extend_variants(other.variants);
        self.frequency += other.frequency;
    }

    fn extend_variants(&mut self, variants: Vec<String>) {
        for variant in variants {
            if !self.variants.contains(&variant) {
                self.variants.push(variant);
            }
        }
    }
}

impl LexicalEntry for Word {
    fn root(&self) -> &str {
        &self.root
    }

    fn variants(&self) -> &[String] {
        &self.variants
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Turns form groups into words.
#[derive(Clone, Debug)]
pub struct WordBuilder {
    root_extractor: RootExtractor,
}

impl WordBuilder {
    pub fn new(comparator: Arc<dyn TokenComparator>) -> Self {
        WordBuilder {
            root_extractor: RootExtractor::new(comparator),
        }
    }

    /// Build the word for `group`, with `frequency` occurrences in total.
    pub fn build(&self, group: &FormGroup, frequency: u64) -> Result<Word> {
        let root = self.root_extractor.extract(group)?;
        Word::new(root, group.members().to_vec(), frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::comparator::PrefixEditComparator;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_word_requires_root_among_variants() {
        assert!(Word::new("run", strings(&["running", "run"]), 2).is_ok());

        let result = Word::new("ran", strings(&["running", "run"]), 2);
        assert!(matches!(result, Err(WordformError::InvalidOperation(_))));
    }

    #[test]
    fn test_word_deduplicates_variants() {
        let word = Word::new("run", strings(&["run", "runs", "run"]), 3).unwrap();
        assert_eq!(word.variants(), ["run", "runs"]);
        assert!(word.contains("runs"));
        assert!(!word.contains("ran"));
    }

    #[test]
    fn test_merge() {
        let mut word = Word::new("Run", strings(&["Run", "Runs"]), 2).unwrap();
        let other = Word::new("run", strings(&["run", "Runs"]), 5).unwrap();

        word.merge(other);

        assert_eq!(word.root(), "Run");
        assert_eq!(word.variants(), ["Run", "Runs", "run"]);
        assert_eq!(word.frequency(), 7);
    }

    #[test]
    fn test_builder_uses_root_extractor() {
        let builder = WordBuilder::new(Arc::new(PrefixEditComparator::default()));
        let group = FormGroup::from_tokens(["running", "run", "runs"]);

        let word = builder.build(&group, 3).unwrap();

        assert_eq!(word.root(), "run");
        assert_eq!(word.variants(), ["running", "run", "runs"]);
        assert_eq!(word.frequency(), 3);
    }
}
