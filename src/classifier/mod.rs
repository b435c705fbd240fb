//! k-nearest-neighbors spam classification.
//!
//! # Architecture
//!
//! - `KnnClassifier`: stores training vectors and votes among the k nearest
//! - `ClassifierConfig`: neighbor count and parallelism threshold
//! - `EvaluationReport` / `FeatureImportance`: results handed back to callers
//! - `Label`, `LabeledText`, `Neighbor`: data exchanged with the classifier
//!
//! # Example
//!
//! ```
//! use spamknn::classifier::{KnnClassifier, Label, LabeledText};
//!
//! # fn main() -> spamknn::error::Result<()> {
//! let mut classifier = KnnClassifier::with_k(1)?;
//! classifier.train(&[
//!     LabeledText::new("WIN A FREE PRIZE NOW!!!", Label::Spam),
//!     LabeledText::new("see you at the meeting tomorrow", Label::Ham),
//! ]);
//!
//! assert_eq!(classifier.classify("WIN A FREE CRUISE NOW!!!")?, Label::Spam);
//! # Ok(())
//! # }
//! ```

mod config;
mod knn;
mod report;
mod types;

pub use config::{ClassifierConfig, DEFAULT_K};
pub use knn::KnnClassifier;
pub use report::{EvaluationReport, FeatureImportance};
pub use types::{Label, LabeledText, Neighbor};
