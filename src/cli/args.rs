//! Command line argument parsing for the spamknn CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dataset::RecordLayout;

/// spamknn - k-nearest-neighbors spam classification for short messages
#[derive(Parser, Debug, Clone)]
#[command(name = "spamknn")]
#[command(about = "Classify short text messages as spam or not spam with k-NN")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split a dataset, train on one part and report accuracy on the other
    Evaluate(EvaluateArgs),

    /// Train on a whole dataset and classify the given texts
    Classify(ClassifyArgs),

    /// Print the feature vector extracted from a text
    Features(FeaturesArgs),

    /// Train on a whole dataset and rank features by variance
    Importance(ImportanceArgs),
}

/// Options shared by every command that trains a classifier
#[derive(Args, Debug, Clone)]
pub struct TrainingOptions {
    /// Path to the dataset file (header line, then label and text per line)
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Column order of the dataset file
    #[arg(long, value_enum, default_value = "label-first")]
    pub layout: RecordLayout,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of neighbors (overrides the configuration file)
    #[arg(short, long)]
    pub k: Option<usize>,
}

/// Arguments for evaluating a classifier
#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub training: TrainingOptions,

    /// Share of records used for training
    #[arg(long)]
    pub train_ratio: Option<f64>,

    /// Shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of features shown in the importance ranking
    #[arg(long, default_value = "10")]
    pub top: usize,
}

/// Arguments for classifying texts
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub training: TrainingOptions,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for printing a feature vector
#[derive(Args, Debug, Clone)]
pub struct FeaturesArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for ranking features
#[derive(Args, Debug, Clone)]
pub struct ImportanceArgs {
    #[command(flatten)]
    pub training: TrainingOptions,

    /// Number of features shown
    #[arg(long, default_value = "10")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
