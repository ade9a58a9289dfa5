//! Configuration for the dictionary pipeline.
//!
//! A [`DictionaryConfig`] value is built explicitly (defaults, builder
//! methods, or JSON) and passed into [`crate::pipeline::DictionaryPipeline`];
//! every stage receives the part it needs through its constructor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::separator::SeparatorStrategy;
use crate::error::{Result, WordformError};

/// Top-level configuration for building a dictionary from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// How token separators are determined.
    pub separator_strategy: SeparatorStrategy,

    /// Fold case when comparing tokens and choosing roots.
    pub case_insensitive: bool,

    /// Thresholds of the prefix/edit-distance comparator.
    pub comparator: ComparatorConfig,

    /// Tuning of the probability-based separator classifier.
    pub probability: ProbabilityConfig,

    /// Worker threads used to build words in parallel.
    /// If None, uses the number of CPU cores.
    pub worker_threads: Option<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            separator_strategy: SeparatorStrategy::Probability,
            case_insensitive: true,
            comparator: ComparatorConfig::default(),
            probability: ProbabilityConfig::default(),
            worker_threads: None,
        }
    }
}

impl DictionaryConfig {
    /// Parse a configuration from a JSON document. Missing fields take
    /// their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DictionaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Set the separator strategy.
    pub fn with_separator_strategy(mut self, strategy: SeparatorStrategy) -> Self {
        self.separator_strategy = strategy;
        self
    }

    /// Enable or disable case folding.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Replace the comparator thresholds.
    pub fn with_comparator(mut self, comparator: ComparatorConfig) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the probability classifier tuning.
    pub fn with_probability(mut self, probability: ProbabilityConfig) -> Self {
        self.probability = probability;
        self
    }

    /// Set the number of worker threads.
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Check that every value is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == Some(0) {
            return Err(WordformError::invalid_config(
                "worker_threads must be greater than zero",
            ));
        }
        self.comparator.validate()?;
        self.probability.validate()
    }
}

/// Thresholds for deciding that two tokens are forms of the same word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Minimum number of shared leading characters.
    pub min_prefix_len: usize,

    /// Minimum shared prefix as a fraction of the shorter token's length.
    pub min_prefix_ratio: f64,

    /// Maximum edit distance between the suffixes left after the shared prefix.
    pub max_suffix_distance: usize,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 3,
            min_prefix_ratio: 0.6,
            max_suffix_distance: 4,
        }
    }
}

impl ComparatorConfig {
    /// Check that every value is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.min_prefix_len == 0 {
            return Err(WordformError::invalid_config(
                "comparator.min_prefix_len must be greater than zero",
            ));
        }
        check_ratio("comparator.min_prefix_ratio", self.min_prefix_ratio)
    }
}

/// Tuning of the probability-based separator classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Characters seen fewer times than this are never separators.
    pub min_occurrences: usize,

    /// Minimum share of all characters for the primary separator.
    pub min_primary_share: f64,

    /// Minimum mean normalised neighbour entropy for the primary separator.
    pub min_primary_entropy: f64,

    /// Share of occurrences that must touch a separator on one side
    /// before a character is attached to the separator set.
    pub boundary_ratio: f64,

    /// Texts shorter than this many characters fall back to the predefined set.
    pub min_text_len: usize,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            min_occurrences: 2,
            min_primary_share: 0.05,
            min_primary_entropy: 0.5,
            boundary_ratio: 0.9,
            min_text_len: 64,
        }
    }
}

impl ProbabilityConfig {
    /// Check that every value is within its valid range.
    pub fn validate(&self) -> Result<()> {
        check_ratio("probability.min_primary_share", self.min_primary_share)?;
        check_ratio("probability.min_primary_entropy", self.min_primary_entropy)?;
        check_ratio("probability.boundary_ratio", self.boundary_ratio)
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(WordformError::invalid_config(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}
