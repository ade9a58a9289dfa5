//! Fixed separator set, independent of the input text.

use super::{SeparatorClassifier, SeparatorSet};

/// Whitespace characters treated as boundaries.
const WHITESPACE: &[char] = &[
    ' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}',
];

/// Punctuation treated as boundaries. Hyphens and apostrophes are left out
/// because they occur inside words.
const PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '"', '(', ')', '[', ']', '{', '}', '«', '»', '“', '”', '„', '…',
];

/// Classifier returning the same whitespace and punctuation set for any text.
#[derive(Clone, Debug, Default)]
pub struct PredefinedSeparators;

impl PredefinedSeparators {
    /// Create a new predefined classifier.
    pub fn new() -> Self {
        PredefinedSeparators
    }

    /// The predefined separator set.
    pub fn separators() -> SeparatorSet {
        WHITESPACE.iter().chain(PUNCTUATION.iter()).copied().collect()
    }
}

impl SeparatorClassifier for PredefinedSeparators {
    fn classify(&self, _text: &str) -> SeparatorSet {
        Self::separators()
    }

    fn name(&self) -> &'static str {
        "predefined"
    }
}
