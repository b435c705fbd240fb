//! k-nearest-neighbors spam classifier.
//!
//! The classifier keeps every training example as an extracted
//! [`FeatureVector`] and predicts by majority vote among the `k` stored
//! examples closest to the query under Euclidean distance. Search is a brute
//! force scan over the whole training set.

use rayon::prelude::*;

use crate::distance::batch_distances;
use crate::error::{Result, SpamError};
use crate::features::{FEATURE_COUNT, FeatureExtractor, FeatureVector};

use super::config::ClassifierConfig;
use super::report::{EvaluationReport, FeatureImportance};
use super::types::{Label, LabeledText, Neighbor};

/// Append-only k-NN classifier over handcrafted text features.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    config: ClassifierConfig,
    extractor: FeatureExtractor,
    /// Training vectors in insertion order.
    features: Vec<FeatureVector>,
    /// Labels, parallel to `features`.
    labels: Vec<Label>,
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
            extractor: FeatureExtractor::new(),
            features: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl KnnClassifier {
    /// Create an empty classifier, rejecting a degenerate configuration.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Create an empty classifier with default settings and `k` neighbors.
    pub fn with_k(k: usize) -> Result<Self> {
        Self::new(ClassifierConfig::with_k(k))
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Number of stored training examples.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Extract and store every example, in order.
    ///
    /// Repeated calls accumulate; nothing is ever replaced.
    pub fn train(&mut self, examples: &[LabeledText]) {
        self.features.reserve(examples.len());
        self.labels.reserve(examples.len());
        for example in examples {
            self.features.push(self.extractor.extract(&example.text));
            self.labels.push(example.label);
        }
        log::debug!(
            "Trained on {} examples ({} stored)",
            examples.len(),
            self.features.len()
        );
    }

    /// The `k` stored examples closest to `features`, nearest first.
    ///
    /// Equal distances keep insertion order.
    pub fn nearest_neighbors(&self, features: &FeatureVector) -> Result<Vec<Neighbor>> {
        self.ensure_can_vote("predict")?;

        let distances = batch_distances(features, &self.features, self.config.parallel_threshold);
        let mut order: Vec<usize> = (0..distances.len()).collect();
        order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

        Ok(order
            .into_iter()
            .take(self.config.k)
            .map(|index| Neighbor {
                index,
                distance: distances[index],
                label: self.labels[index],
            })
            .collect())
    }

    /// Predict the label of an already extracted feature vector.
    ///
    /// Spam wins only with strictly more than `k / 2` (integer division)
    /// votes, so an even split is classified as ham.
    pub fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let neighbors = self.nearest_neighbors(features)?;
        let spam_votes = neighbors.iter().filter(|n| n.label.is_spam()).count();

        if spam_votes > self.config.k / 2 {
            Ok(Label::Spam)
        } else {
            Ok(Label::Ham)
        }
    }

    /// Extract features from `text` and predict its label.
    pub fn classify(&self, text: &str) -> Result<Label> {
        self.predict(&self.extractor.extract(text))
    }

    /// Accuracy of the classifier over a labeled evaluation set.
    pub fn evaluate(&self, examples: &[LabeledText]) -> Result<EvaluationReport> {
        if examples.is_empty() {
            return Err(SpamError::EmptyEvaluationSet);
        }
        self.ensure_can_vote("evaluate")?;

        let outcomes: Vec<bool> = if examples.len() < self.config.parallel_threshold {
            examples
                .iter()
                .map(|example| self.is_correct(example))
                .collect::<Result<_>>()?
        } else {
            examples
                .par_iter()
                .map(|example| self.is_correct(example))
                .collect::<Result<_>>()?
        };

        let correct = outcomes.iter().filter(|&&ok| ok).count();
        let report = EvaluationReport::new(correct, examples.len());
        log::debug!("Evaluated {} examples: {}", examples.len(), report);
        Ok(report)
    }

    /// Unbiased sample variance of each feature across the training set.
    pub fn feature_importance(&self) -> Result<FeatureImportance> {
        const OPERATION: &str = "compute feature importance";

        let n = self.features.len();
        if n == 0 {
            return Err(SpamError::empty_training_set(OPERATION));
        }
        if n < 2 {
            return Err(SpamError::insufficient_training_data(OPERATION, 2, n));
        }

        let mut means = [0.0; FEATURE_COUNT];
        for vector in &self.features {
            for (mean, value) in means.iter_mut().zip(vector.values()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n as f64;
        }

        let mut variances = [0.0; FEATURE_COUNT];
        for vector in &self.features {
            for ((variance, mean), value) in variances.iter_mut().zip(&means).zip(vector.values()) {
                let diff = value - mean;
                *variance += diff * diff;
            }
        }
        for variance in &mut variances {
            *variance /= (n - 1) as f64;
        }

        Ok(FeatureImportance::new(FeatureVector::from_values(variances)))
    }

    fn is_correct(&self, example: &LabeledText) -> Result<bool> {
        Ok(self.classify(&example.text)? == example.label)
    }

    fn ensure_can_vote(&self, operation: &'static str) -> Result<()> {
        if self.features.is_empty() {
            return Err(SpamError::empty_training_set(operation));
        }
        if self.config.k > self.features.len() {
            return Err(SpamError::insufficient_training_data(
                operation,
                self.config.k,
                self.features.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureKey;

    fn sample(text: &str, label: u8) -> LabeledText {
        let label = if label == 1 { Label::Spam } else { Label::Ham };
        LabeledText::new(text, label)
    }

    fn scenario_training_set() -> Vec<LabeledText> {
        vec![
            sample("free money now!!!", 1),
            sample("let's meet for lunch tomorrow", 0),
            sample("WIN A FREE PRIZE", 1),
            sample("see the attached report", 0),
            sample("urgent: claim your winnings now", 1),
        ]
    }

    #[test]
    fn test_zero_k_is_rejected() {
        assert!(matches!(
            KnnClassifier::with_k(0),
            Err(SpamError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_train_accumulates() {
        let mut classifier = KnnClassifier::with_k(3).unwrap();
        assert!(classifier.is_empty());

        classifier.train(&scenario_training_set());
        assert_eq!(classifier.len(), 5);

        classifier.train(&scenario_training_set()[..2]);
        assert_eq!(classifier.len(), 7);
    }

    #[test]
    fn test_predict_on_empty_classifier_fails() {
        let classifier = KnnClassifier::default();
        let features = FeatureExtractor::new().extract("anything");
        assert!(matches!(
            classifier.predict(&features),
            Err(SpamError::EmptyTrainingSet { .. })
        ));
    }

    #[test]
    fn test_k_larger_than_training_set_fails() {
        let mut classifier = KnnClassifier::with_k(5).unwrap();
        classifier.train(&scenario_training_set()[..3]);
        assert!(matches!(
            classifier.classify("hello"),
            Err(SpamError::InsufficientTrainingData {
                required: 5,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_stored_vector_is_its_own_nearest_neighbor() {
        let mut classifier = KnnClassifier::with_k(1).unwrap();
        let training = scenario_training_set();
        classifier.train(&training);

        let extractor = FeatureExtractor::new();
        for (index, example) in training.iter().enumerate() {
            let features = extractor.extract(&example.text);
            let neighbors = classifier.nearest_neighbors(&features).unwrap();
            assert_eq!(neighbors[0].index, index);
            assert_eq!(neighbors[0].distance, 0.0);
            assert_eq!(classifier.predict(&features).unwrap(), example.label);
        }
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut classifier = KnnClassifier::with_k(2).unwrap();
        classifier.train(&[
            sample("same text", 0),
            sample("same text", 1),
            sample("same text", 1),
        ]);

        let neighbors = classifier
            .nearest_neighbors(&FeatureExtractor::new().extract("same text"))
            .unwrap();
        let indices: Vec<usize> = neighbors.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_even_split_votes_ham() {
        // Two identical neighbors with opposite labels: one spam vote is not
        // strictly more than 2 / 2.
        let mut classifier = KnnClassifier::with_k(2).unwrap();
        classifier.train(&[sample("hello there", 1), sample("hello there", 0)]);
        assert_eq!(classifier.classify("hello there").unwrap(), Label::Ham);

        let mut classifier = KnnClassifier::with_k(3).unwrap();
        classifier.train(&[
            sample("hello there", 1),
            sample("hello there", 0),
            sample("hello there", 1),
        ]);
        assert_eq!(classifier.classify("hello there").unwrap(), Label::Spam);
    }

    #[test]
    fn test_unscaled_length_dominates_neighbor_selection() {
        let mut classifier = KnnClassifier::with_k(3).unwrap();
        classifier.train(&scenario_training_set());

        let query = FeatureExtractor::new().extract("URGENT offer, win free prize now!");
        let neighbors = classifier.nearest_neighbors(&query).unwrap();
        let indices: Vec<usize> = neighbors.iter().map(|n| n.index).collect();

        // The closest example shares both length and keyword profile, but the
        // two short spam messages lose to the similarly long ham messages.
        assert_eq!(indices, vec![4, 1, 3]);
        assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(classifier.predict(&query).unwrap(), Label::Ham);
    }

    #[test]
    fn test_spam_majority_among_similar_messages() {
        let mut classifier = KnnClassifier::with_k(3).unwrap();
        classifier.train(&[
            sample("WIN A FREE PRIZE NOW!!!", 1),
            sample("WIN A FREE OFFER NOW!!!", 1),
            sample("are we still on for dinner at eight tonight", 0),
            sample("WIN A FREE TRIP NOW!!!", 1),
            sample("please review the quarterly budget draft", 0),
        ]);

        assert_eq!(classifier.classify("WIN A FREE PHONE NOW!!!").unwrap(), Label::Spam);
        assert_eq!(
            classifier
                .classify("can we move dinner to nine tonight instead")
                .unwrap(),
            Label::Ham
        );
    }

    #[test]
    fn test_evaluate_perfect_accuracy() {
        let mut classifier = KnnClassifier::with_k(1).unwrap();
        let training = scenario_training_set();
        classifier.train(&training);

        let report = classifier.evaluate(&training).unwrap();
        assert_eq!(report.correct, report.total);
        assert_eq!(report.total, 5);
        assert_eq!(report.accuracy, 1.0);
    }

    #[test]
    fn test_evaluate_empty_set_fails() {
        let mut classifier = KnnClassifier::with_k(1).unwrap();
        classifier.train(&scenario_training_set());
        assert!(matches!(
            classifier.evaluate(&[]),
            Err(SpamError::EmptyEvaluationSet)
        ));
    }

    #[test]
    fn test_evaluate_untrained_fails() {
        let classifier = KnnClassifier::default();
        let error = classifier.evaluate(&scenario_training_set()).unwrap_err();
        assert!(matches!(error, SpamError::EmptyTrainingSet { operation: "evaluate" }));
        assert!(error.to_string().starts_with("Cannot evaluate"));

        let error = classifier.classify("hello").unwrap_err();
        assert!(matches!(error, SpamError::EmptyTrainingSet { operation: "predict" }));
    }

    #[test]
    fn test_evaluate_reports_insufficient_data_as_evaluate() {
        let mut classifier = KnnClassifier::with_k(5).unwrap();
        classifier.train(&scenario_training_set()[..2]);
        assert!(matches!(
            classifier.evaluate(&scenario_training_set()),
            Err(SpamError::InsufficientTrainingData {
                operation: "evaluate",
                required: 5,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_parallel_evaluation_matches_sequential() {
        let training: Vec<LabeledText> = (0..60)
            .map(|i| {
                if i % 2 == 0 {
                    sample(&format!("FREE PRIZE {i} WINNER!!! call now"), 1)
                } else {
                    sample(&format!("meeting notes for item {i} attached"), 0)
                }
            })
            .collect();

        let sequential_config = ClassifierConfig {
            k: 3,
            parallel_threshold: usize::MAX,
        };
        let parallel_config = ClassifierConfig {
            k: 3,
            parallel_threshold: 1,
        };

        let mut sequential = KnnClassifier::new(sequential_config).unwrap();
        let mut parallel = KnnClassifier::new(parallel_config).unwrap();
        sequential.train(&training[..40]);
        parallel.train(&training[..40]);

        assert_eq!(
            sequential.evaluate(&training[40..]).unwrap(),
            parallel.evaluate(&training[40..]).unwrap()
        );
    }

    #[test]
    fn test_importance_of_identical_texts_is_zero() {
        let mut classifier = KnnClassifier::default();
        classifier.train(&vec![sample("Exactly the same message!", 1); 2]);

        let importance = classifier.feature_importance().unwrap();
        for (key, variance) in importance.iter() {
            assert_eq!(variance, 0.0, "{key} should have no spread");
        }

        let mut classifier = KnnClassifier::default();
        classifier.train(&vec![sample("Call 555-123-4567 NOW!!", 1); 7]);

        let importance = classifier.feature_importance().unwrap();
        for (key, variance) in importance.iter() {
            assert!(variance.abs() < 1e-12, "{key} should have no spread");
        }
    }

    #[test]
    fn test_importance_is_sample_variance() {
        let mut classifier = KnnClassifier::default();
        classifier.train(&[sample("a", 0), sample("abc", 1), sample("abcde", 0)]);

        // Lengths 1, 3, 5: mean 3, squared deviations 8, divided by n - 1 = 2.
        let importance = classifier.feature_importance().unwrap();
        assert_eq!(importance.get(FeatureKey::Length), 4.0);
        assert_eq!(importance.get(FeatureKey::WordCount), 0.0);
        assert_eq!(importance.top(1)[0].0, FeatureKey::Length);
    }

    #[test]
    fn test_importance_requires_two_examples() {
        let classifier = KnnClassifier::default();
        assert!(matches!(
            classifier.feature_importance(),
            Err(SpamError::EmptyTrainingSet { .. })
        ));

        let mut classifier = KnnClassifier::default();
        classifier.train(&[sample("only one", 0)]);
        assert!(matches!(
            classifier.feature_importance(),
            Err(SpamError::InsufficientTrainingData {
                required: 2,
                actual: 1,
                ..
            })
        ));
    }
}
