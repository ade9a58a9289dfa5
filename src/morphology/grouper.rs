//! Grouping of tokens into word-form equivalence groups.
//!
//! Distinct tokens are visited in first-seen order. Each token is compared
//! with the representative (first member) of every existing group, in group
//! creation order, and joins the first group that matches; otherwise it
//! starts a new group.
//!
//! Because the comparator is not transitive, the result depends on that
//! order: feeding the same tokens in a different order may group them
//! differently. For a fixed order and comparator the grouping is always the
//! same, and the groups always partition the distinct tokens.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordformError};
use crate::morphology::comparator::TokenComparator;

/// A set of distinct tokens judged to be forms of one word.
///
/// Members keep the order in which they were first seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormGroup {
    tokens: Vec<String>,
}

impl FormGroup {
    /// Start a group from its first token.
    pub fn new<S: Into<String>>(seed: S) -> Self {
        FormGroup {
            tokens: vec![seed.into()],
        }
    }

    /// Build a group from tokens, dropping repeated members.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = FormGroup { tokens: Vec::new() };
        for token in tokens {
            group.push(token.into());
        }
        group
    }

    fn push(&mut self, token: String) {
        if !self.contains(&token) {
            self.tokens.push(token);
        }
    }

    /// The token other tokens are compared against.
    pub fn representative(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Members in first-seen order.
    pub fn members(&self) -> &[String] {
        &self.tokens
    }

    /// Check whether `token` belongs to this group.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Greedy, order-dependent grouper of tokens.
#[derive(Clone, Debug)]
pub struct FormGrouper {
    comparator: Arc<dyn TokenComparator>,
}

impl FormGrouper {
    /// Create a grouper using `comparator`.
    pub fn new(comparator: Arc<dyn TokenComparator>) -> Self {
        FormGrouper { comparator }
    }

    /// The comparator used to match tokens.
    pub fn comparator(&self) -> &Arc<dyn TokenComparator> {
        &self.comparator
    }

    /// Partition the distinct tokens of `tokens` into form groups.
    ///
    /// Duplicates are allowed in the input; each distinct token ends up in
    /// exactly one group. Groups are returned in creation order.
    pub fn group<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<FormGroup>> {
        let mut groups: Vec<FormGroup> = Vec::new();

        for token in distinct_in_order(tokens) {
            if token.is_empty() {
                return Err(WordformError::invalid_token("empty token in token stream"));
            }

            let mut target = None;
            for (index, group) in groups.iter().enumerate() {
                if let Some(representative) = group.representative()
                    && self.comparator.is_same_word(representative, token)?
                {
                    target = Some(index);
                    break;
                }
            }

            match target {
                Some(index) => groups[index].push(token.to_string()),
                None => groups.push(FormGroup::new(token)),
            }
        }

        Ok(groups)
    }
}

/// Distinct tokens in the order they first appear.
pub fn distinct_in_order<S: AsRef<str>>(tokens: &[S]) -> Vec<&str> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| seen.insert(*token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparatorConfig;
    use crate::morphology::comparator::PrefixEditComparator;

    fn grouper(case_insensitive: bool) -> FormGrouper {
        FormGrouper::new(Arc::new(PrefixEditComparator::new(
            ComparatorConfig::default(),
            case_insensitive,
        )))
    }

    #[test]
    fn test_groups_inflections() {
        let groups = grouper(true)
            .group(&["running", "run", "runs", "jump"])
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members(), ["running", "run", "runs"]);
        assert_eq!(groups[1].members(), ["jump"]);
    }

    #[test]
    fn test_partition_with_duplicates() {
        let tokens = ["b", "a", "b", "walked", "a", "walking", "walked", "c"];
        let groups = grouper(true).group(&tokens).unwrap();

        let mut members: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.members().iter().map(String::as_str))
            .collect();
        let total = members.len();
        members.sort();
        members.dedup();
        assert_eq!(members.len(), total, "groups must not overlap");
        assert_eq!(members, vec!["a", "b", "c", "walked", "walking"]);
    }

    #[test]
    fn test_order_dependence() {
        // "abcd" matches both other tokens, which do not match each other.
        let comparator = PrefixEditComparator::new(
            ComparatorConfig {
                min_prefix_len: 3,
                min_prefix_ratio: 0.6,
                max_suffix_distance: 3,
            },
            false,
        );
        let grouper = FormGrouper::new(Arc::new(comparator));

        let forward = grouper.group(&["abcdxyz", "abcd", "abcdqrs"]).unwrap();
        let backward = grouper.group(&["abcd", "abcdxyz", "abcdqrs"]).unwrap();

        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 1);
    }

    #[test]
    fn test_case_insensitive_grouping() {
        let groups = grouper(true).group(&["Run", "run", "RUNS"]).unwrap();
        assert_eq!(groups.len(), 1);

        let groups = grouper(false).group(&["Run", "run"]).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert!(grouper(true).group(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_empty_token_fails_fast() {
        let result = grouper(true).group(&["run", ""]);
        assert!(matches!(result, Err(WordformError::InvalidToken(_))));

        let result = grouper(true).group(&["", "run"]);
        assert!(matches!(result, Err(WordformError::InvalidToken(_))));
    }

    #[test]
    fn test_distinct_in_order() {
        assert_eq!(
            distinct_in_order(&["b", "a", "b", "c", "a"]),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_form_group_deduplicates() {
        let group = FormGroup::from_tokens(["x", "y", "x"]);
        assert_eq!(group.members(), ["x", "y"]);
        assert_eq!(group.representative(), Some("x"));
        assert!(group.contains("y"));
        assert!(!group.contains("z"));
    }
}
