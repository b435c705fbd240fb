//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::classifier::{EvaluationReport, FeatureImportance, Label};
use crate::cli::args::{OutputFormat, SpamArgs};
use crate::error::Result;
use crate::features::{FeatureKey, FeatureVector};

/// A command result that can also be shown as plain text.
pub trait HumanOutput: Serialize {
    fn to_human(&self) -> String;
}

/// One entry of a feature importance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedFeature {
    pub feature: FeatureKey,
    pub variance: f64,
}

impl RankedFeature {
    /// The `n` highest-variance features of `importance`.
    pub fn top(importance: &FeatureImportance, n: usize) -> Vec<RankedFeature> {
        importance
            .top(n)
            .into_iter()
            .map(|(feature, variance)| RankedFeature { feature, variance })
            .collect()
    }
}

/// Result of the `evaluate` command.
#[derive(Debug, Serialize)]
pub struct EvaluationResult {
    pub training_examples: usize,
    pub test_examples: usize,
    pub report: EvaluationReport,
    pub feature_importance: Vec<RankedFeature>,
}

/// Result of the `classify` command.
#[derive(Debug, Serialize)]
pub struct ClassificationResult {
    pub predictions: Vec<Prediction>,
}

/// Predicted label of one text.
#[derive(Debug, Serialize)]
pub struct Prediction {
    pub text: String,
    pub label: Label,
}

/// Result of the `features` command.
#[derive(Debug, Serialize)]
pub struct FeaturesResult {
    pub text: String,
    pub features: FeatureVector,
}

/// Result of the `importance` command.
#[derive(Debug, Serialize)]
pub struct ImportanceResult {
    pub training_examples: usize,
    pub feature_importance: Vec<RankedFeature>,
}

fn write_ranking(out: &mut String, ranking: &[RankedFeature]) {
    let _ = writeln!(out, "Feature Importance:");
    for entry in ranking {
        let _ = writeln!(out, "{}: {:.3}", entry.feature, entry.variance);
    }
}

impl HumanOutput for EvaluationResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.report);
        let _ = writeln!(out);
        write_ranking(&mut out, &self.feature_importance);
        out
    }
}

impl HumanOutput for ClassificationResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for prediction in &self.predictions {
            let _ = writeln!(out, "{}\t{}", prediction.label, prediction.text);
        }
        out
    }
}

impl HumanOutput for FeaturesResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.features.iter() {
            let _ = writeln!(out, "{key}: {value:.3}");
        }
        out
    }
}

impl HumanOutput for ImportanceResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Training examples: {}", self.training_examples);
        let _ = writeln!(out);
        write_ranking(&mut out, &self.feature_importance);
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &SpamArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SpamArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpamArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
