//! Separator classification.
//!
//! A separator classifier decides, per character, whether it acts as a token
//! boundary in a given text. Three strategies are available:
//!
//! - [`predefined::PredefinedSeparators`] - a fixed list of whitespace and punctuation
//! - [`non_alphabetic::NonAlphabeticSeparators`] - every non-letter character
//! - [`probability::ProbabilitySeparators`] - inferred from character statistics
//!
//! [`SeparatorExtractor`] is the closed set of these strategies, built from a
//! [`SeparatorStrategy`] value by [`SeparatorExtractor::new`].
//!
//! # Examples
//!
//! ```
//! use wordform::analysis::separator::{SeparatorClassifier, SeparatorExtractor, SeparatorStrategy};
//! use wordform::config::ProbabilityConfig;
//!
//! let extractor = SeparatorExtractor::new(SeparatorStrategy::Predefined, &ProbabilityConfig::default());
//! let separators = extractor.classify("Hello, world!");
//! assert!(separators.contains(' '));
//! assert!(separators.contains(','));
//! assert!(!separators.contains('o'));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ProbabilityConfig;

pub mod non_alphabetic;
pub mod predefined;
pub mod probability;

pub use non_alphabetic::NonAlphabeticSeparators;
pub use predefined::PredefinedSeparators;
pub use probability::ProbabilitySeparators;

/// Set of characters classified as token boundaries.
///
/// Members are kept in code-point order so that patterns and serialized forms
/// built from the set are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Create an empty separator set.
    pub fn new() -> Self {
        SeparatorSet {
            chars: BTreeSet::new(),
        }
    }

    /// Check whether a character is a separator.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Add a character to the set.
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    /// Number of separators.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the separators in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Regular expression matching a maximal run of one or more separators.
    ///
    /// Returns `None` for an empty set, which never splits anything.
    pub fn to_pattern(&self) -> Option<String> {
        if self.chars.is_empty() {
            return None;
        }
        let class: String = self
            .chars
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Some(format!("[{class}]+"))
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        SeparatorSet {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.chars.iter().map(|c| format!("{c:?}")).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Selectable separator classification strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStrategy {
    /// Fixed whitespace and punctuation characters.
    Predefined,
    /// Every character that is not a letter.
    NonAlphabetic,
    /// Characters inferred from the statistics of the text itself.
    Probability,
}

impl SeparatorStrategy {
    /// Name of the strategy as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparatorStrategy::Predefined => "predefined",
            SeparatorStrategy::NonAlphabetic => "non_alphabetic",
            SeparatorStrategy::Probability => "probability",
        }
    }
}

impl fmt::Display for SeparatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for classifiers that derive a separator set from text.
pub trait SeparatorClassifier: Send + Sync {
    /// Classify the characters of `text`, returning the separators.
    ///
    /// Empty text has no statistics, so every strategy returns the
    /// predefined set for it.
    fn classify(&self, text: &str) -> SeparatorSet;

    /// Get the name of this classifier (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The closed set of separator classification strategies.
#[derive(Clone, Debug)]
pub enum SeparatorExtractor {
    Predefined(PredefinedSeparators),
    NonAlphabetic(NonAlphabeticSeparators),
    Probability(ProbabilitySeparators),
}

impl SeparatorExtractor {
    /// Build the extractor for `strategy`. The probability tuning is only
    /// used by [`SeparatorStrategy::Probability`].
    pub fn new(strategy: SeparatorStrategy, probability: &ProbabilityConfig) -> Self {
        match strategy {
            SeparatorStrategy::Predefined => {
                SeparatorExtractor::Predefined(PredefinedSeparators::new())
            }
            SeparatorStrategy::NonAlphabetic => {
                SeparatorExtractor::NonAlphabetic(NonAlphabeticSeparators::new())
            }
            SeparatorStrategy::Probability => {
                SeparatorExtractor::Probability(ProbabilitySeparators::new(probability.clone()))
            }
        }
    }

    /// The strategy this extractor implements.
    pub fn strategy(&self) -> SeparatorStrategy {
        match self {
            SeparatorExtractor::Predefined(_) => SeparatorStrategy::Predefined,
            SeparatorExtractor::NonAlphabetic(_) => SeparatorStrategy::NonAlphabetic,
            SeparatorExtractor::Probability(_) => SeparatorStrategy::Probability,
        }
    }
}

impl SeparatorClassifier for SeparatorExtractor {
    fn classify(&self, text: &str) -> SeparatorSet {
        match self {
            SeparatorExtractor::Predefined(inner) => inner.classify(text),
            SeparatorExtractor::NonAlphabetic(inner) => inner.classify(text),
            SeparatorExtractor::Probability(inner) => inner.classify(text),
        }
    }

    fn name(&self) -> &'static str {
        self.strategy().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_escapes_members() {
        let set: SeparatorSet = [' ', '-', ']', '.'].into_iter().collect();
        let pattern = set.to_pattern().unwrap();
        let regex = regex::Regex::new(&pattern).unwrap();

        assert!(regex.is_match("-"));
        assert!(regex.is_match("]"));
        assert!(!regex.is_match("a"));
        assert_eq!(regex.find("ab .- cd").unwrap().as_str(), " .- ");
    }

    #[test]
    fn test_empty_set_has_no_pattern() {
        assert_eq!(SeparatorSet::new().to_pattern(), None);
    }

    #[test]
    fn test_set_is_ordered_and_deduplicated() {
        let set: SeparatorSet = ['b', 'a', 'b', ' '].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![' ', 'a', 'b']);
    }

    #[test]
    fn test_factory_matches_strategy() {
        let config = ProbabilityConfig::default();
        for strategy in [
            SeparatorStrategy::Predefined,
            SeparatorStrategy::NonAlphabetic,
            SeparatorStrategy::Probability,
        ] {
            let extractor = SeparatorExtractor::new(strategy, &config);
            assert_eq!(extractor.strategy(), strategy);
            assert_eq!(extractor.name(), strategy.as_str());
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&SeparatorStrategy::NonAlphabetic).unwrap();
        assert_eq!(json, "\"non_alphabetic\"");
        let parsed: SeparatorStrategy = serde_json::from_str("\"probability\"").unwrap();
        assert_eq!(parsed, SeparatorStrategy::Probability);
    }

    #[test]
    fn test_empty_text_returns_predefined_for_every_strategy() {
        let config = ProbabilityConfig::default();
        let predefined = PredefinedSeparators::new().classify("");
        for strategy in [
            SeparatorStrategy::Predefined,
            SeparatorStrategy::NonAlphabetic,
            SeparatorStrategy::Probability,
        ] {
            let extractor = SeparatorExtractor::new(strategy, &config);
            assert_eq!(extractor.classify(""), predefined);
        }
    }
}
