//! Root token selection.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{Result, WordformError};
use crate::morphology::comparator::TokenComparator;
use crate::morphology::grouper::FormGroup;

/// Picks the canonical member of a form group.
///
/// The root is the shortest member (in characters). Ties are broken by
/// comparing the members after the comparator's case folding, and then by
/// their raw text, so the choice never depends on member order.
#[derive(Clone, Debug)]
pub struct RootExtractor {
    comparator: Arc<dyn TokenComparator>,
}

impl RootExtractor {
    /// Create a root extractor folding case the way `comparator` does.
    pub fn new(comparator: Arc<dyn TokenComparator>) -> Self {
        RootExtractor { comparator }
    }

    /// Select the root of `group`. The result is always one of its members.
    pub fn extract<'a>(&self, group: &'a FormGroup) -> Result<&'a str> {
        group
            .members()
            .iter()
            .min_by(|a, b| self.order(a, b))
            .map(String::as_str)
            .ok_or_else(|| WordformError::invalid_operation("cannot extract root of an empty group"))
    }

    fn order(&self, a: &str, b: &str) -> Ordering {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| self.comparator.normalize(a).cmp(&self.comparator.normalize(b)))
            .then_with(|| a.cmp(b))
    }
}
