//! Checkpoint notifications from the dictionary pipeline.
//!
//! Pipeline stages never log on their own. They report to a
//! [`PipelineObserver`] at fixed checkpoints; [`LogObserver`] turns those
//! reports into `log` records.

use log::{debug, warn};

use crate::morphology::dictionary::Dictionary;
use crate::morphology::grouper::FormGroup;
use crate::morphology::word::{LexicalEntry, Word};

/// Receiver of pipeline checkpoints. Every method defaults to a no-op.
pub trait PipelineObserver: Send + Sync {
    /// The input text was split into `count` tokens.
    fn on_tokens_split(&self, _count: usize) {}

    /// The token stream was partitioned into `groups`.
    fn on_groups_computed(&self, _groups: &[FormGroup]) {}

    /// Two words resolved to the same dictionary key and are being merged.
    fn on_root_collision(&self, _key: &str, _existing: &Word, _incoming: &Word) {}

    /// The dictionary is complete.
    fn on_dictionary_assembled(&self, _dictionary: &Dictionary) {}
}

/// Observer that ignores every checkpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that writes checkpoints to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_tokens_split(&self, count: usize) {
        debug!("Split text into {count} tokens");
    }

    fn on_groups_computed(&self, groups: &[FormGroup]) {
        let tokens: usize = groups.iter().map(FormGroup::len).sum();
        debug!(
            "Computed {} form groups over {tokens} distinct tokens",
            groups.len()
        );
    }

    fn on_root_collision(&self, key: &str, existing: &Word, incoming: &Word) {
        warn!(
            "Root collision on {key:?}: merging {:?} ({} variants) into {:?} ({} variants)",
            incoming.root(),
            incoming.variants().len(),
            existing.root(),
            existing.variants().len()
        );
    }

    fn on_dictionary_assembled(&self, dictionary: &Dictionary) {
        debug!(
            "Assembled dictionary with {} words, total frequency {}",
            dictionary.len(),
            dictionary.total_frequency()
        );
    }
}
