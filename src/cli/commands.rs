//! Command implementations for the spamknn CLI.

use crate::classifier::{ClassifierConfig, KnnClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{DatasetSplitter, SplitConfig, load_records};
use crate::error::Result;
use crate::features::FeatureExtractor;

/// Execute a CLI command.
pub fn execute_command(args: SpamArgs) -> Result<()> {
    match &args.command {
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Classify(classify_args) => classify(classify_args, &args),
        Command::Features(features_args) => show_features(features_args, &args),
        Command::Importance(importance_args) => show_importance(importance_args, &args),
    }
}

/// Build an untrained classifier from the configuration file and flags.
fn build_classifier(options: &TrainingOptions) -> Result<KnnClassifier> {
    let mut config = match &options.config {
        Some(path) => {
            log::info!("Loading classifier configuration from {}", path.display());
            ClassifierConfig::from_json_file(path)?
        }
        None => ClassifierConfig::default(),
    };
    if let Some(k) = options.k {
        config.k = k;
    }
    KnnClassifier::new(config)
}

/// Load the whole dataset and train a classifier on it.
fn train_on_all(options: &TrainingOptions) -> Result<KnnClassifier> {
    let mut classifier = build_classifier(options)?;
    let records = load_records(&options.data, options.layout)?;
    classifier.train(&records);
    Ok(classifier)
}

/// Train on a split of the dataset and evaluate on the remainder.
fn evaluate(args: &EvaluateArgs, cli_args: &SpamArgs) -> Result<()> {
    let mut split_config = SplitConfig::default();
    if let Some(train_ratio) = args.train_ratio {
        split_config.train_ratio = train_ratio;
    }
    if let Some(seed) = args.seed {
        split_config.seed = seed;
    }

    let mut classifier = build_classifier(&args.training)?;
    let dataset = DatasetSplitter::new(split_config)?
        .load_and_split(&args.training.data, args.training.layout)?;

    log::info!(
        "Training on {} examples, evaluating on {}",
        dataset.training.len(),
        dataset.test.len()
    );
    classifier.train(&dataset.training);
    let report = classifier.evaluate(&dataset.test)?;
    let importance = classifier.feature_importance()?;

    output_result(
        "Evaluation finished",
        &EvaluationResult {
            training_examples: dataset.training.len(),
            test_examples: dataset.test.len(),
            report,
            feature_importance: RankedFeature::top(&importance, args.top),
        },
        cli_args,
    )
}

/// Classify free texts with a classifier trained on the whole dataset.
fn classify(args: &ClassifyArgs, cli_args: &SpamArgs) -> Result<()> {
    let classifier = train_on_all(&args.training)?;

    let predictions = args
        .texts
        .iter()
        .map(|text| -> Result<Prediction> {
            Ok(Prediction {
                text: text.clone(),
                label: classifier.classify(text)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Classification finished",
        &ClassificationResult { predictions },
        cli_args,
    )
}

/// Print the feature vector of a text.
fn show_features(args: &FeaturesArgs, cli_args: &SpamArgs) -> Result<()> {
    let features = FeatureExtractor::new().extract(&args.text);
    output_result(
        "Extracted features",
        &FeaturesResult {
            text: args.text.clone(),
            features,
        },
        cli_args,
    )
}

/// Rank features by their variance over the whole dataset.
fn show_importance(args: &ImportanceArgs, cli_args: &SpamArgs) -> Result<()> {
    let classifier = train_on_all(&args.training)?;
    let importance = classifier.feature_importance()?;

    output_result(
        "Feature importance",
        &ImportanceResult {
            training_examples: classifier.len(),
            feature_importance: RankedFeature::top(&importance, args.top),
        },
        cli_args,
    )
}
