//! # spamknn
//!
//! Spam detection for short text messages (email, SMS) with a
//! k-nearest-neighbors classifier over handcrafted features.
//!
//! ## Features
//!
//! - Pure, total feature extraction into a fixed 25-key schema
//! - Euclidean k-NN voting with deterministic tie-breaking
//! - Accuracy evaluation and variance-based feature importance
//! - Reproducible dataset loading and train/test splitting
//! - Optional parallel distance computation via rayon

pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod features;

pub mod prelude {
    pub use crate::classifier::{
        ClassifierConfig, EvaluationReport, FeatureImportance, KnnClassifier, Label, LabeledText,
    };
    pub use crate::error::{Result, SpamError};
    pub use crate::features::{FeatureExtractor, FeatureKey, FeatureVector};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
