//! Results returned by the classifier: accuracy and feature importance.

use std::fmt;

use serde::Serialize;

use crate::features::{FeatureKey, FeatureVector};

/// Accuracy of a classifier over a labeled evaluation set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Number of correctly predicted examples.
    pub correct: usize,
    /// Number of evaluated examples (always > 0).
    pub total: usize,
    /// `correct / total`.
    pub accuracy: f64,
}

impl EvaluationReport {
    pub(crate) fn new(correct: usize, total: usize) -> Self {
        Self {
            correct,
            total,
            accuracy: correct as f64 / total as f64,
        }
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accuracy: {:.2}% ({}/{})",
            self.accuracy * 100.0,
            self.correct,
            self.total
        )
    }
}

/// Sample variance of every feature across the training set.
///
/// This measures spread, not discriminative power: a feature with a wide
/// natural range ranks high regardless of how well it separates the classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureImportance {
    variances: FeatureVector,
}

impl FeatureImportance {
    pub(crate) fn new(variances: FeatureVector) -> Self {
        Self { variances }
    }

    pub fn get(&self, key: FeatureKey) -> f64 {
        self.variances.get(key)
    }

    /// Iterate over `(key, variance)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        self.variances.iter()
    }

    /// All features sorted by descending variance; ties keep schema order.
    pub fn ranked(&self) -> Vec<(FeatureKey, f64)> {
        let mut ranked: Vec<(FeatureKey, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// The `n` features with the largest variance.
    pub fn top(&self, n: usize) -> Vec<(FeatureKey, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
