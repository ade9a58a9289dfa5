//! Morphological grouping: from a token stream to a dictionary of words.
//!
//! ```text
//! Token Stream → Form Grouper (Token Comparator) → Form Groups
//!              → Root Extractor + Word Builder → Dictionary
//! ```

pub mod comparator;
pub mod dictionary;
pub mod grouper;
pub mod observer;
pub mod root;
pub mod word;

pub use comparator::{PrefixEditComparator, TokenComparator};
pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryRecord};
pub use grouper::{FormGroup, FormGrouper};
pub use observer::{LogObserver, NoopObserver, PipelineObserver};
pub use root::RootExtractor;
pub use word::{LexicalEntry, Word, WordBuilder};
