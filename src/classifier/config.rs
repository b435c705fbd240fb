//! Classifier configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::{Result, SpamError};

/// Default number of neighbors taking part in a vote.
pub const DEFAULT_K: usize = 5;

/// Configuration for the k-NN classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of nearest neighbors voting on a label.
    pub k: usize,
    /// Training-set (or evaluation-set) size from which work is parallelized.
    pub parallel_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    /// Default configuration with a custom neighbor count.
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Reject degenerate settings.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(SpamError::invalid_config("k must be greater than zero"));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
