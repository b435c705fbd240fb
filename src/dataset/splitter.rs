//! Reproducible train/test partitioning.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::classifier::LabeledText;
use crate::error::{Result, SpamError};

use super::loader::{RecordLayout, load_records};

/// Default share of records used for training.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Default shuffle seed.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for splitting a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Share of records that go to the training set, in (0, 1).
    pub train_ratio: f64,
    /// Seed of the shuffle preceding the split.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: DEFAULT_SEED,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(SpamError::invalid_config(format!(
                "train ratio must be between 0 and 1 (exclusive), got {}",
                self.train_ratio
            )));
        }
        Ok(())
    }
}

/// A dataset partitioned into training and test records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub training: Vec<LabeledText>,
    pub test: Vec<LabeledText>,
}

/// Shuffles records with a fixed seed and splits them by ratio.
#[derive(Debug, Clone, Default)]
pub struct DatasetSplitter {
    config: SplitConfig,
}

impl DatasetSplitter {
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Shuffle `records` and split them at `floor(len * train_ratio)`.
    pub fn split(&self, mut records: Vec<LabeledText>) -> Dataset {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        records.shuffle(&mut rng);

        let split_index = (records.len() as f64 * self.config.train_ratio) as usize;
        let test = records.split_off(split_index);
        log::debug!(
            "Split {} records into {} training / {} test",
            records.len() + test.len(),
            records.len(),
            test.len()
        );

        Dataset {
            training: records,
            test,
        }
    }

    /// Load a dataset file and split it.
    pub fn load_and_split<P: AsRef<Path>>(&self, path: P, layout: RecordLayout) -> Result<Dataset> {
        let records = load_records(path, layout)?;
        Ok(self.split(records))
    }
}
