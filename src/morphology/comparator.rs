//! Token comparison: are two tokens forms of the same word?
//!
//! There is no lexicon behind the comparison. Two tokens are judged to be
//! forms of one word from their shape alone: they must share a long enough
//! prefix, and what remains after that prefix must be a few edits apart.
//!
//! The relation is symmetric and deterministic but not transitive; the
//! grouper decides how chains of matches are resolved.

use std::borrow::Cow;
use std::fmt::Debug;

use crate::config::ComparatorConfig;
use crate::error::{Result, WordformError};
use crate::util::levenshtein::{common_prefix_len, levenshtein_distance_threshold};

/// Trait for deciding whether two tokens are surface forms of one word.
///
/// Implementations must be symmetric and return the same verdict for the same
/// pair every time.
pub trait TokenComparator: Send + Sync + Debug {
    /// Fold a token the way comparisons see it (e.g. lowercase it).
    ///
    /// Root selection and dictionary keys use the same folding.
    fn normalize<'a>(&self, token: &'a str) -> Cow<'a, str>;

    /// Decide whether `left` and `right` are forms of the same word.
    ///
    /// Fails with [`WordformError::InvalidToken`] for an empty token.
    fn is_same_word(&self, left: &str, right: &str) -> Result<bool>;

    /// Get the name of this comparator (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Comparator based on a shared prefix and a bounded suffix edit distance.
///
/// Two tokens match when, after optional case folding, they are equal, or:
///
/// - they share at least `min_prefix_len` leading characters,
/// - the shared prefix covers at least `min_prefix_ratio` of the shorter token, and
/// - the suffixes left after the prefix are at most `max_suffix_distance` edits apart.
///
/// # Examples
///
/// ```
/// use wordform::config::ComparatorConfig;
/// use wordform::morphology::comparator::{PrefixEditComparator, TokenComparator};
///
/// let comparator = PrefixEditComparator::new(ComparatorConfig::default(), true);
/// assert!(comparator.is_same_word("running", "run").unwrap());
/// assert!(comparator.is_same_word("Runs", "run").unwrap());
/// assert!(!comparator.is_same_word("jump", "run").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PrefixEditComparator {
    config: ComparatorConfig,
    case_insensitive: bool,
}

impl PrefixEditComparator {
    /// Create a new comparator.
    pub fn new(config: ComparatorConfig, case_insensitive: bool) -> Self {
        PrefixEditComparator {
            config,
            case_insensitive,
        }
    }

    /// The thresholds used by this comparator.
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }
}

impl Default for PrefixEditComparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default(), true)
    }
}

impl TokenComparator for PrefixEditComparator {
    fn normalize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        }
    }

    fn is_same_word(&self, left: &str, right: &str) -> Result<bool> {
        if left.is_empty() || right.is_empty() {
            return Err(WordformError::invalid_token(format!(
                "cannot compare empty token ({left:?} vs {right:?})"
            )));
        }

        let a: Vec<char> = self.normalize(left).chars().collect();
        let b: Vec<char> = self.normalize(right).chars().collect();
        if a == b {
            return Ok(true);
        }

        let prefix = common_prefix_len(&a, &b);
        if prefix < self.config.min_prefix_len {
            return Ok(false);
        }

        let shorter = a.len().min(b.len());
        if (prefix as f64) < self.config.min_prefix_ratio * shorter as f64 {
            return Ok(false);
        }

        Ok(
            levenshtein_distance_threshold(&a[prefix..], &b[prefix..], self.config.max_suffix_distance)
                .is_some(),
        )
    }

    fn name(&self) -> &'static str {
        "prefix_edit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator() -> PrefixEditComparator {
        PrefixEditComparator::default()
    }

    #[test]
    fn test_inflections_match() {
        let comparator = comparator();
        assert!(comparator.is_same_word("run", "runs").unwrap());
        assert!(comparator.is_same_word("running", "run").unwrap());
        assert!(comparator.is_same_word("running", "runs").unwrap());
        assert!(comparator.is_same_word("walked", "walking").unwrap());
        assert!(comparator.is_same_word("слово", "слова").unwrap());
    }

    #[test]
    fn test_unrelated_tokens_do_not_match() {
        let comparator = comparator();
        assert!(!comparator.is_same_word("jump", "run").unwrap());
        assert!(!comparator.is_same_word("in", "into").unwrap());
        assert!(!comparator.is_same_word("structure", "strength").unwrap());
    }

    #[test]
    fn test_symmetric() {
        let comparator = comparator();
        let pairs = [
            ("running", "runs"),
            ("walked", "walking"),
            ("jump", "run"),
            ("The", "there"),
            ("abc", "abcdefgh"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                comparator.is_same_word(a, b).unwrap(),
                comparator.is_same_word(b, a).unwrap(),
                "{a} / {b}"
            );
        }
    }

    #[test]
    fn test_case_folding_is_configurable() {
        let folding = PrefixEditComparator::new(ComparatorConfig::default(), true);
        let exact = PrefixEditComparator::new(ComparatorConfig::default(), false);

        assert!(folding.is_same_word("Run", "run").unwrap());
        assert!(!exact.is_same_word("Run", "run").unwrap());
        assert!(exact.is_same_word("Run", "Run").unwrap());
        assert_eq!(folding.normalize("RuN"), "run");
        assert_eq!(exact.normalize("RuN"), "RuN");
    }

    #[test]
    fn test_suffix_distance_bound() {
        let strict = PrefixEditComparator::new(
            ComparatorConfig {
                max_suffix_distance: 1,
                ..ComparatorConfig::default()
            },
            true,
        );
        assert!(strict.is_same_word("run", "runs").unwrap());
        assert!(!strict.is_same_word("run", "running").unwrap());
    }

    #[test]
    fn test_short_tokens_only_match_exactly() {
        let comparator = comparator();
        assert!(comparator.is_same_word("a", "A").unwrap());
        assert!(!comparator.is_same_word("an", "a").unwrap());
    }

    #[test]
    fn test_empty_token_is_invalid() {
        let result = comparator().is_same_word("", "run");
        assert!(matches!(result, Err(WordformError::InvalidToken(_))));
        assert!(comparator().is_same_word("run", "").is_err());
    }
}
