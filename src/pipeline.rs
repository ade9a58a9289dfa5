//! End-to-end dictionary construction.

use std::sync::Arc;

use crate::analysis::separator::SeparatorSet;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{SeparatorTokenizer, Tokenizer};
use crate::config::DictionaryConfig;
use crate::error::Result;
use crate::morphology::comparator::{PrefixEditComparator, TokenComparator};
use crate::morphology::dictionary::{Dictionary, DictionaryBuilder};
use crate::morphology::observer::{NoopObserver, PipelineObserver};

/// Text in, dictionary out.
///
/// # Examples
///
/// ```
/// use wordform::config::DictionaryConfig;
/// use wordform::analysis::separator::SeparatorStrategy;
/// use wordform::morphology::LexicalEntry;
/// use wordform::pipeline::DictionaryPipeline;
///
/// let config = DictionaryConfig::default()
///     .with_separator_strategy(SeparatorStrategy::Predefined);
/// let pipeline = DictionaryPipeline::new(config).unwrap();
///
/// let dictionary = pipeline.build_from_text("running, run, runs; jump!").unwrap();
/// assert_eq!(dictionary.len(), 2);
/// assert_eq!(dictionary.get("run").unwrap().frequency(), 3);
/// ```
pub struct DictionaryPipeline {
    config: DictionaryConfig,
    tokenizer: SeparatorTokenizer,
    builder: DictionaryBuilder,
    observer: Arc<dyn PipelineObserver>,
}

impl DictionaryPipeline {
    /// Create a pipeline from a validated configuration.
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer =
            SeparatorTokenizer::from_strategy(config.separator_strategy, &config.probability);
        let comparator: Arc<dyn TokenComparator> = Arc::new(PrefixEditComparator::new(
            config.comparator.clone(),
            config.case_insensitive,
        ));
        let builder = DictionaryBuilder::new(comparator, config.worker_threads)?;

        Ok(DictionaryPipeline {
            config,
            tokenizer,
            builder,
            observer: Arc::new(NoopObserver),
        })
    }

    /// Report checkpoints to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.builder = self.builder.with_observer(Arc::clone(&observer));
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Classify the separators of `text` with the configured strategy.
    pub fn separators(&self, text: &str) -> SeparatorSet {
        self.tokenizer.separators(text)
    }

    /// Tokenize `text`, keeping positions and offsets.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(text)
    }

    /// Split `text` into bare token strings.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.split(text)?;
        self.observer.on_tokens_split(tokens.len());
        Ok(tokens)
    }

    /// Build the dictionary of `text`.
    pub fn build_from_text(&self, text: &str) -> Result<Dictionary> {
        let tokens = self.split(text)?;
        self.builder.build(&tokens)
    }

    /// Build the dictionary of an already tokenized stream.
    pub fn build_from_tokens<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Result<Dictionary> {
        self.builder.build(tokens)
    }
}
