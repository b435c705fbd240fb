use spamknn::classifier::{ClassifierConfig, KnnClassifier, Label, LabeledText};
use spamknn::distance::euclidean_distance;
use spamknn::error::{Result, SpamError};
use spamknn::features::{FEATURE_COUNT, FeatureExtractor, FeatureKey};

fn spam(text: &str) -> LabeledText {
    LabeledText::new(text, Label::Spam)
}

fn ham(text: &str) -> LabeledText {
    LabeledText::new(text, Label::Ham)
}

fn corpus() -> Vec<LabeledText> {
    vec![
        spam("WINNER!! Claim your FREE prize now at http://win.example.com"),
        ham("Are we still meeting for coffee at ten tomorrow?"),
        spam("URGENT: your account expires today, act now to keep $500"),
        ham("I attached the notes from yesterday's planning session."),
        spam("Congratulations, you won a FREE cruise! Call 555-123-4567"),
        ham("Can you pick up some bread on your way home tonight?"),
        spam("Limited time offer!!! Win cash prizes, reply YES now"),
        ham("The quarterly report draft is ready for your review."),
    ]
}

#[test]
fn train_then_retrain_accumulates_examples() -> Result<()> {
    let mut classifier = KnnClassifier::with_k(3)?;
    let examples = corpus();

    classifier.train(&examples[..5]);
    assert_eq!(classifier.len(), 5);

    classifier.train(&examples[5..]);
    assert_eq!(classifier.len(), examples.len());
    Ok(())
}

#[test]
fn one_nearest_neighbor_recalls_training_labels() -> Result<()> {
    let mut classifier = KnnClassifier::with_k(1)?;
    let examples = corpus();
    classifier.train(&examples);

    let report = classifier.evaluate(&examples)?;
    assert_eq!(report.correct, report.total);
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.to_string(), "Accuracy: 100.00% (8/8)");
    Ok(())
}

#[test]
fn neighbors_are_sorted_and_bounded_by_k() -> Result<()> {
    let mut classifier = KnnClassifier::new(ClassifierConfig::with_k(4))?;
    classifier.train(&corpus());

    let query = FeatureExtractor::new().extract("FREE prize waiting, call now!!");
    let neighbors = classifier.nearest_neighbors(&query)?;

    assert_eq!(neighbors.len(), 4);
    assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
    for neighbor in &neighbors {
        assert!(neighbor.distance >= 0.0);
        assert!(neighbor.index < classifier.len());
    }
    Ok(())
}

#[test]
fn feature_vectors_are_complete_and_finite() {
    let extractor = FeatureExtractor::new();
    let texts = [
        "",
        "\n\n",
        "plain words only",
        "ALL CAPS SHOUTING HERE!!!",
        "mixed 123 numbers 4567 and symbols #@%&*",
        "emoji 🎉 and accents café",
        "price: €20, £15, ¥3000 or 20 USD",
    ];

    for text in texts {
        let features = extractor.extract(text);
        assert_eq!(features.iter().count(), FEATURE_COUNT);
        assert_eq!(features.to_map().len(), FEATURE_COUNT);
        for (key, value) in features.iter() {
            assert!(value.is_finite(), "{key} is not finite for {text:?}");
        }
        let unique = features.get(FeatureKey::UniqueWordRatio);
        let capital = features.get(FeatureKey::CapitalRatio);
        assert!((0.0..=1.0).contains(&unique));
        assert!((0.0..=1.0).contains(&capital));
    }
}

#[test]
fn distance_is_a_symmetric_metric_on_extracted_vectors() {
    let extractor = FeatureExtractor::new();
    let vectors: Vec<_> = corpus().iter().map(|e| extractor.extract(&e.text)).collect();

    for a in &vectors {
        assert_eq!(euclidean_distance(a, a), 0.0);
        for b in &vectors {
            assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
        }
    }
}

#[test]
fn importance_ranks_length_first_on_varied_messages() -> Result<()> {
    let mut classifier = KnnClassifier::default();
    classifier.train(&corpus());

    let importance = classifier.feature_importance()?;
    for (_, variance) in importance.iter() {
        assert!(variance >= 0.0);
    }
    assert_eq!(importance.top(1)[0].0, FeatureKey::Length);
    Ok(())
}

#[test]
fn untrained_classifier_signals_errors() {
    let classifier = KnnClassifier::default();
    let features = FeatureExtractor::new().extract("hello");

    assert!(matches!(
        classifier.predict(&features),
        Err(SpamError::EmptyTrainingSet { .. })
    ));
    assert!(matches!(
        classifier.feature_importance(),
        Err(SpamError::EmptyTrainingSet { .. })
    ));
}
