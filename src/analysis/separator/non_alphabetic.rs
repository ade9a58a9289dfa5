//! Separators defined as every character that is not a letter.

use super::predefined::PredefinedSeparators;
use super::{SeparatorClassifier, SeparatorSet};

/// Classifier marking each non-alphabetic character of the text as a separator.
///
/// Letters are recognised with Unicode's `Alphabetic` property, so Cyrillic,
/// Greek, CJK and other scripts are never split.
#[derive(Clone, Debug, Default)]
pub struct NonAlphabeticSeparators;

impl NonAlphabeticSeparators {
    /// Create a new non-alphabetic classifier.
    pub fn new() -> Self {
        NonAlphabeticSeparators
    }
}

impl SeparatorClassifier for NonAlphabeticSeparators {
    fn classify(&self, text: &str) -> SeparatorSet {
        if text.is_empty() {
            return PredefinedSeparators::separators();
        }
        text.chars().filter(|c| !c.is_alphabetic()).collect()
    }

    fn name(&self) -> &'static str {
        "non_alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_letters_are_separators() {
        let set = NonAlphabeticSeparators::new().classify("Привет, мир! 2024 well-known");
        for c in [',', ' ', '!', '2', '0', '4', '-'] {
            assert!(set.contains(c), "{c:?} should be a separator");
        }
        for c in ['П', 'р', 'м', 'w', 'n'] {
            assert!(!set.contains(c), "{c:?} should not be a separator");
        }
    }

    #[test]
    fn test_only_characters_of_the_text() {
        let set = NonAlphabeticSeparators::new().classify("a b");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![' ']);
    }

    #[test]
    fn test_letters_only_text_has_no_separators() {
        assert!(NonAlphabeticSeparators::new().classify("word").is_empty());
    }
}
