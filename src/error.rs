//! Error types for the spamknn library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpamError`] enum. Feature extraction itself is total and never fails;
//! errors come from classifier preconditions, configuration and data loading.
//!
//! # Examples
//!
//! ```
//! use spamknn::error::{Result, SpamError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamError::invalid_config("k must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spamknn operations.
#[derive(Error, Debug)]
pub enum SpamError {
    /// I/O errors (reading datasets or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The classifier holds no training examples.
    #[error("Cannot {operation}: the classifier has no training examples")]
    EmptyTrainingSet { operation: &'static str },

    /// The classifier holds fewer training examples than the operation needs.
    #[error("Cannot {operation}: requires at least {required} training examples, found {actual}")]
    InsufficientTrainingData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// Accuracy over an empty evaluation set is undefined.
    #[error("Cannot evaluate: the evaluation set is empty")]
    EmptyEvaluationSet,

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A dataset record that cannot be turned into a labeled text.
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// A label outside of {0, 1}.
    #[error("Invalid label: {0} (expected 0 or 1)")]
    InvalidLabel(i64),
}

/// Result type alias for operations that may fail with SpamError.
pub type Result<T> = std::result::Result<T, SpamError>;

impl SpamError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpamError::InvalidConfig(msg.into())
    }

    /// Create a new invalid record error.
    pub fn invalid_record<S: Into<String>>(line: usize, reason: S) -> Self {
        SpamError::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn empty_training_set(operation: &'static str) -> Self {
        SpamError::EmptyTrainingSet { operation }
    }

    pub(crate) fn insufficient_training_data(
        operation: &'static str,
        required: usize,
        actual: usize,
    ) -> Self {
        SpamError::InsufficientTrainingData {
            operation,
            required,
            actual,
        }
    }
}
