//! Separators inferred from the character statistics of the text itself.
//!
//! Every character is profiled by how often it occurs and by the
//! distributions of its left and right neighbours (the text boundaries count
//! as a neighbour). Letters and digits are word material in every script, so
//! only the remaining characters are candidates. Classification then runs in
//! two steps:
//!
//! 1. **Primary separator.** The candidate with the highest
//!    `share × mean normalised neighbour entropy`. A boundary character is
//!    frequent, and what stands next to it is hard to predict. Characters that
//!    mostly neighbour themselves are excluded, since they separate nothing.
//! 2. **Attached separators.** Candidates that touch a known separator (or a
//!    text boundary) on one side in almost all occurrences join the set. This
//!    picks up punctuation such as `,` or `.` which sit between a word and the
//!    primary separator, while word-internal marks like the hyphen in
//!    `well-known` stay content. The step is repeated until the set stops
//!    growing.
//!
//! When no character qualifies as primary, or the text is too short to
//! profile, the predefined set is returned instead.

use std::collections::BTreeMap;

use super::predefined::PredefinedSeparators;
use super::{SeparatorClassifier, SeparatorSet};
use crate::config::ProbabilityConfig;

/// Characters whose neighbour slots are at least this much themselves
/// cannot be the primary separator.
const MAX_SELF_ADJACENCY: f64 = 0.5;

/// Neighbour of a character occurrence; `None` is a text boundary.
type Neighbour = Option<char>;

/// Occurrence statistics of one character.
#[derive(Debug, Default)]
struct CharProfile {
    count: usize,
    left: BTreeMap<Neighbour, usize>,
    right: BTreeMap<Neighbour, usize>,
}

impl CharProfile {
    fn self_adjacency(&self, c: char) -> f64 {
        let own = self.left.get(&Some(c)).copied().unwrap_or(0)
            + self.right.get(&Some(c)).copied().unwrap_or(0);
        own as f64 / (2 * self.count) as f64
    }
}

/// Classifier inferring separators from character distributions.
#[derive(Clone, Debug, Default)]
pub struct ProbabilitySeparators {
    config: ProbabilityConfig,
}

impl ProbabilitySeparators {
    /// Create a classifier with the given tuning.
    pub fn new(config: ProbabilityConfig) -> Self {
        ProbabilitySeparators { config }
    }

    /// The tuning used by this classifier.
    pub fn config(&self) -> &ProbabilityConfig {
        &self.config
    }

    /// Classify `text`, returning `None` when statistics are inconclusive.
    pub fn infer(&self, text: &str) -> Option<SeparatorSet> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() || chars.len() < self.config.min_text_len {
            return None;
        }

        let profiles = profile(&chars);
        let alphabet = profiles.len();
        let primary = self.primary_separator(&profiles, chars.len(), alphabet)?;

        let mut separators = SeparatorSet::new();
        separators.insert(primary);
        self.attach_separators(&profiles, &mut separators);
        Some(separators)
    }

    fn primary_separator(
        &self,
        profiles: &BTreeMap<char, CharProfile>,
        total: usize,
        alphabet: usize,
    ) -> Option<char> {
        let mut best: Option<(char, f64)> = None;

        for (&c, profile) in candidates(profiles, self.config.min_occurrences) {
            let share = profile.count as f64 / total as f64;
            let entropy = (normalized_entropy(&profile.left, profile.count, alphabet)
                + normalized_entropy(&profile.right, profile.count, alphabet))
                / 2.0;

            if share < self.config.min_primary_share
                || entropy < self.config.min_primary_entropy
                || profile.self_adjacency(c) >= MAX_SELF_ADJACENCY
            {
                continue;
            }

            // Strictly greater keeps the smaller code point on ties.
            let score = share * entropy;
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((c, score));
            }
        }

        best.map(|(c, _)| c)
    }

    fn attach_separators(&self, profiles: &BTreeMap<char, CharProfile>, separators: &mut SeparatorSet) {
        loop {
            let mut changed = false;

            for (&c, profile) in candidates(profiles, self.config.min_occurrences) {
                if !separators.contains(c) && self.is_attached(profile, separators) {
                    separators.insert(c);
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }

    fn is_attached(&self, profile: &CharProfile, separators: &SeparatorSet) -> bool {
        boundary_ratio(&profile.left, profile.count, separators) >= self.config.boundary_ratio
            || boundary_ratio(&profile.right, profile.count, separators) >= self.config.boundary_ratio
    }
}

impl SeparatorClassifier for ProbabilitySeparators {
    fn classify(&self, text: &str) -> SeparatorSet {
        self.infer(text)
            .unwrap_or_else(PredefinedSeparators::separators)
    }

    fn name(&self) -> &'static str {
        "probability"
    }
}

fn profile(chars: &[char]) -> BTreeMap<char, CharProfile> {
    let mut profiles: BTreeMap<char, CharProfile> = BTreeMap::new();

    for (i, &c) in chars.iter().enumerate() {
        let left = i.checked_sub(1).map(|j| chars[j]);
        let right = chars.get(i + 1).copied();

        let entry = profiles.entry(c).or_default();
        entry.count += 1;
        *entry.left.entry(left).or_insert(0) += 1;
        *entry.right.entry(right).or_insert(0) += 1;
    }

    profiles
}

/// Profiles of the characters that may act as separators: seen often
/// enough, and neither a letter nor a digit.
fn candidates(
    profiles: &BTreeMap<char, CharProfile>,
    min_occurrences: usize,
) -> impl Iterator<Item = (&char, &CharProfile)> {
    profiles
        .iter()
        .filter(move |(c, profile)| !c.is_alphanumeric() && profile.count >= min_occurrences)
}

/// Shannon entropy of a neighbour distribution, divided by the largest
/// entropy `count` samples over `alphabet + 1` outcomes could reach.
fn normalized_entropy(neighbours: &BTreeMap<Neighbour, usize>, count: usize, alphabet: usize) -> f64 {
    let cap = count.min(alphabet + 1);
    if cap < 2 {
        return 0.0;
    }

    let total = count as f64;
    let entropy: f64 = neighbours
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum();

    entropy / (cap as f64).log2()
}

/// Share of occurrences whose neighbour is a separator or a text boundary.
fn boundary_ratio(neighbours: &BTreeMap<Neighbour, usize>, count: usize, separators: &SeparatorSet) -> f64 {
    let touching: usize = neighbours
        .iter()
        .filter(|(neighbour, _)| neighbour.is_none_or(|c| separators.contains(c)))
        .map(|(_, &n)| n)
        .sum();
    touching as f64 / count as f64
}
