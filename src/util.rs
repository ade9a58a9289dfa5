//! Shared utility modules used across Wordform components.

pub mod levenshtein;
