//! Quality validation against a reference dictionary.
//!
//! A produced dictionary is compared with an "ideal" one of the same
//! root → variants shape. Each produced word is matched with the ideal
//! entry whose key is its root, or else whose variants contain its root.
//! The root is an error unless it equals the key of that entry (ignoring
//! case). Without any entry every variant of the word is a token error;
//! otherwise only the variants missing from the ideal entry are.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::morphology::dictionary::Dictionary;
use crate::morphology::word::LexicalEntry;

/// Reference dictionary: root → variants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealDictionary {
    pub words: BTreeMap<String, Vec<String>>,
}

impl IdealDictionary {
    pub fn new(words: BTreeMap<String, Vec<String>>) -> Self {
        IdealDictionary { words }
    }

    /// Parse a reference dictionary in `{"words": {root: [variants]}}` form.
    ///
    /// Every entry needs a non-empty root and at least one variant, and no
    /// variant may be empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let ideal: IdealDictionary = serde_json::from_str(json)?;

        for (key, variants) in &ideal.words {
            if key.is_empty() {
                return Err(anyhow::anyhow!("Reference entry with an empty root").into());
            }
            if variants.is_empty() {
                return Err(anyhow::anyhow!("Reference entry {key:?} has no variants").into());
            }
            if variants.iter().any(String::is_empty) {
                return Err(anyhow::anyhow!("Reference entry {key:?} has an empty variant").into());
            }
        }

        Ok(ideal)
    }

    /// Load a reference dictionary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Find the entry for `root`, compared case-insensitively.
    ///
    /// An entry keyed by the root wins; otherwise the first entry in key
    /// order listing the root among its variants.
    pub fn find_target(&self, root: &str) -> Option<(&str, &[String])> {
        let folded = root.to_lowercase();
        self.words
            .iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .or_else(|| {
                self.words.iter().find(|(_, variants)| {
                    variants.iter().any(|variant| variant.to_lowercase() == folded)
                })
            })
            .map(|(key, variants)| (key.as_str(), variants.as_slice()))
    }

    /// Compare `dictionary` with this reference.
    pub fn evaluate(&self, dictionary: &Dictionary) -> QualityReport {
        let mut report = QualityReport::default();

        for word in dictionary.words() {
            report.words_evaluated += 1;
            match self.find_target(word.root()) {
                Some((key, expected)) => {
                    if key.to_lowercase() != word.root().to_lowercase() {
                        report.root_token_errors += 1;
                    }
                    report.token_errors += word
                        .variants()
                        .iter()
                        .filter(|variant| !expected.contains(*variant))
                        .count();
                }
                None => {
                    report.root_token_errors += 1;
                    report.token_errors += word.variants().len();
                }
            }
        }

        report
    }
}

/// Error counts of one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub words_evaluated: usize,
    pub root_token_errors: usize,
    pub token_errors: usize,
}

impl QualityReport {
    /// Check the counts against `thresholds`.
    pub fn within(&self, thresholds: &QualityThresholds) -> bool {
        thresholds
            .max_root_token_errors
            .is_none_or(|max| self.root_token_errors <= max)
            && thresholds
                .max_token_errors
                .is_none_or(|max| self.token_errors <= max)
    }
}

/// Agreed error budgets. `None` leaves a count unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityThresholds {
    pub max_root_token_errors: Option<usize>,
    pub max_token_errors: Option<usize>,
}

impl QualityThresholds {
    pub fn new(max_root_token_errors: Option<usize>, max_token_errors: Option<usize>) -> Self {
        QualityThresholds {
            max_root_token_errors,
            max_token_errors,
        }
    }
}
