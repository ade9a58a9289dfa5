//! Dictionary assembly.
//!
//! The assembler runs the grouper over a token stream, counts how often the
//! members of each group occur, and builds one [`Word`] per group. Grouping
//! is sequential; counting and word construction run in parallel on a
//! bounded rayon pool, and the results are keyed into an ordered map so the
//! dictionary never depends on completion order.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashMap;
use anyhow::Context;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordformError};
use crate::morphology::comparator::TokenComparator;
use crate::morphology::grouper::{FormGroup, FormGrouper};
use crate::morphology::observer::{NoopObserver, PipelineObserver};
use crate::morphology::word::{LexicalEntry, Word, WordBuilder};

/// The set of words derived from one token stream.
///
/// Words are keyed by their root under the comparator's case folding, so no
/// two words share a root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    words: BTreeMap<String, Word>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a word by its key (the folded root).
    pub fn get(&self, key: &str) -> Option<&Word> {
        self.words.get(key)
    }

    /// Words ordered by key.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all word frequencies. Equals the length of the source stream.
    pub fn total_frequency(&self) -> u64 {
        self.words.values().map(|word| word.frequency()).sum()
    }

    /// Convert to the interchange form, optionally with frequencies.
    pub fn to_record(&self, with_frequencies: bool) -> DictionaryRecord {
        let words = self
            .words
            .values()
            .map(|word| (word.root().to_string(), word.variants().to_vec()))
            .collect();
        let frequencies = with_frequencies.then(|| {
            self.words
                .values()
                .map(|word| (word.root().to_string(), word.frequency()))
                .collect()
        });

        DictionaryRecord { words, frequencies }
    }

    /// Serialize the interchange form to JSON.
    pub fn to_json(&self, with_frequencies: bool, pretty: bool) -> Result<String> {
        let record = self.to_record(with_frequencies);
        let json = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(json)
    }
}

/// Interchange form of a dictionary: root → variants, plus optional
/// root → frequency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    pub words: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<BTreeMap<String, u64>>,
}

/// Builds dictionaries from token streams.
pub struct DictionaryBuilder {
    grouper: FormGrouper,
    word_builder: WordBuilder,
    comparator: Arc<dyn TokenComparator>,
    thread_pool: Arc<ThreadPool>,
    observer: Arc<dyn PipelineObserver>,
}

impl DictionaryBuilder {
    /// Create a builder around `comparator`.
    ///
    /// `worker_threads` bounds the pool that builds words; `None` uses one
    /// thread per CPU.
    pub fn new(comparator: Arc<dyn TokenComparator>, worker_threads: Option<usize>) -> Result<Self> {
        let thread_pool_size = worker_threads.unwrap_or_else(num_cpus::get);
        if thread_pool_size == 0 {
            return Err(WordformError::invalid_config(
                "worker_threads must be greater than 0",
            ));
        }

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("wordform-worker-{i}"))
            .build()
            .context("Failed to create thread pool")?;

        Ok(DictionaryBuilder {
            grouper: FormGrouper::new(Arc::clone(&comparator)),
            word_builder: WordBuilder::new(Arc::clone(&comparator)),
            comparator,
            thread_pool: Arc::new(thread_pool),
            observer: Arc::new(NoopObserver),
        })
    }

    /// Report checkpoints to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Number of threads in the word-building pool.
    pub fn worker_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Build the dictionary of `tokens`.
    pub fn build<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Result<Dictionary> {
        let groups = self.grouper.group(tokens)?;
        self.observer.on_groups_computed(&groups);

        let mut counts: AHashMap<&str, u64> = AHashMap::with_capacity(tokens.len());
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }

        let words = self.thread_pool.install(|| {
            groups
                .par_iter()
                .map(|group| self.word_builder.build(group, group_frequency(group, &counts)))
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(self.assemble(words))
    }

    /// Key `words` by their folded root, merging words whose keys collide.
    pub fn assemble(&self, words: Vec<Word>) -> Dictionary {
        let mut entries: BTreeMap<String, Word> = BTreeMap::new();

        for word in words {
            let key = self.comparator.normalize(word.root()).into_owned();
            match entries.get_mut(&key) {
                Some(existing) => {
                    self.observer.on_root_collision(&key, existing, &word);
                    existing.merge(word);
                }
                None => {
                    entries.insert(key, word);
                }
            }
        }

        let dictionary = Dictionary { words: entries };
        self.observer.on_dictionary_assembled(&dictionary);
        dictionary
    }
}

fn group_frequency(group: &FormGroup, counts: &AHashMap<&str, u64>) -> u64 {
    group
        .members()
        .iter()
        .map(|token| counts.get(token.as_str()).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::sync::Mutex;

    use super::*;
    use crate::morphology::comparator::PrefixEditComparator;

    fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new(Arc::new(PrefixEditComparator::default()), Some(2)).unwrap()
    }

    /// Folds case for keys but only matches identical tokens, so "Run" and
    /// "run" land in different groups with colliding keys.
    #[derive(Debug)]
    struct ExactComparator;

    impl TokenComparator for ExactComparator {
        fn normalize<'a>(&self, token: &'a str) -> Cow<'a, str> {
            Cow::Owned(token.to_lowercase())
        }

        fn is_same_word(&self, left: &str, right: &str) -> Result<bool> {
            Ok(left == right)
        }

        fn name(&self) -> &'static str {
            "exact"
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl PipelineObserver for RecordingObserver {
        fn on_groups_computed(&self, groups: &[FormGroup]) {
            self.events.lock().unwrap().push(format!("groups:{}", groups.len()));
        }

        fn on_root_collision(&self, key: &str, existing: &Word, incoming: &Word) {
            self.events.lock().unwrap().push(format!(
                "collision:{key}:{}:{}",
                existing.root(),
                incoming.root()
            ));
        }

        fn on_dictionary_assembled(&self, dictionary: &Dictionary) {
            self.events
                .lock()
                .unwrap()
                .push(format!("assembled:{}", dictionary.len()));
        }
    }

    #[test]
    fn test_build_groups_and_counts() {
        let dictionary = builder().build(&["running", "run", "runs", "jump"]).unwrap();

        assert_eq!(dictionary.len(), 2);
        let run = dictionary.get("run").unwrap();
        assert_eq!(run.root(), "run");
        assert_eq!(run.variants(), ["running", "run", "runs"]);
        assert_eq!(run.frequency(), 3);

        let jump = dictionary.get("jump").unwrap();
        assert_eq!(jump.variants(), ["jump"]);
        assert_eq!(jump.frequency(), 1);
    }

    #[test]
    fn test_frequency_counts_duplicates() {
        let tokens = ["run", "jump", "runs", "run", "jump", "run"];
        let dictionary = builder().build(&tokens).unwrap();

        assert_eq!(dictionary.get("run").unwrap().frequency(), 4);
        assert_eq!(dictionary.get("jump").unwrap().frequency(), 2);
        assert_eq!(dictionary.total_frequency(), tokens.len() as u64);
    }

    #[test]
    fn test_empty_stream() {
        let tokens: [&str; 0] = [];
        let dictionary = builder().build(&tokens).unwrap();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.total_frequency(), 0);
    }

    #[test]
    fn test_root_collision_merges() {
        let observer = Arc::new(RecordingObserver::default());
        let builder = DictionaryBuilder::new(Arc::new(ExactComparator), Some(1))
            .unwrap()
            .with_observer(observer.clone());

        let dictionary = builder.build(&["Run", "run", "Run", "jump"]).unwrap();

        assert_eq!(dictionary.len(), 2);
        let run = dictionary.get("run").unwrap();
        assert_eq!(run.root(), "Run");
        assert_eq!(run.variants(), ["Run", "run"]);
        assert_eq!(run.frequency(), 3);
        assert_eq!(dictionary.total_frequency(), 4);

        let events = observer.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["groups:3", "collision:run:Run:run", "assembled:2"]
        );
    }

    #[test]
    fn test_words_ordered_by_key() {
        let dictionary = builder().build(&["walked", "walking", "sky"]).unwrap();

        let roots: Vec<&str> = dictionary.words().map(|word| word.root()).collect();
        assert_eq!(roots, vec!["sky", "walked"]);
        assert!(dictionary.get("walked").unwrap().contains("walking"));
        assert!(dictionary.get("walking").is_none());
    }

    #[test]
    fn test_record_and_json() {
        let dictionary = builder().build(&["run", "runs", "run"]).unwrap();

        let record = dictionary.to_record(false);
        assert_eq!(record.words["run"], vec!["run", "runs"]);
        assert!(record.frequencies.is_none());
        assert_eq!(dictionary.to_json(false, false).unwrap(), r#"{"words":{"run":["run","runs"]}}"#);

        let json = dictionary.to_json(true, false).unwrap();
        assert_eq!(json, r#"{"words":{"run":["run","runs"]},"frequencies":{"run":3}}"#);

        let parsed: DictionaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dictionary.to_record(true));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = DictionaryBuilder::new(Arc::new(PrefixEditComparator::default()), Some(0));
        assert!(matches!(result, Err(WordformError::InvalidConfig(_))));
    }

    #[test]
    fn test_worker_threads() {
        assert_eq!(builder().worker_threads(), 2);
    }
}
