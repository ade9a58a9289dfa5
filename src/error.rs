//! Error types for the Wordform library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordformError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordform::error::{Result, WordformError};
//!
//! fn check(token: &str) -> Result<()> {
//!     if token.is_empty() {
//!         return Err(WordformError::invalid_token("empty token"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("word").is_ok());
//! assert!(check("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordform operations.
#[derive(Error, Debug)]
pub enum WordformError {
    /// A token violated the non-empty invariant guaranteed by the splitter.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Analysis-related errors (separator classification, splitting).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// I/O errors (reading corpora, configs, reference dictionaries)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors raised with context through anyhow (malformed reference
    /// entries, worker pool start-up).
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordformError.
pub type Result<T> = std::result::Result<T, WordformError>;

impl WordformError {
    /// Create a new invalid token error.
    pub fn invalid_token<S: Into<String>>(msg: S) -> Self {
        WordformError::InvalidToken(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordformError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordformError::InvalidConfig(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        WordformError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordformError::Other(msg.into())
    }
}
