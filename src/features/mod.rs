//! Feature extraction for spam classification.
//!
//! Raw text is summarized by a closed set of handcrafted numeric features
//! (see [`FeatureKey`]). The extractor is a pure function of its input; the
//! resulting [`FeatureVector`] always carries the complete key set.
//!
//! # Example
//!
//! ```
//! use spamknn::features::{FeatureExtractor, FeatureKey};
//!
//! let features = FeatureExtractor::new().extract("WIN a FREE prize now!!!");
//! assert_eq!(features.get(FeatureKey::WordCount), 5.0);
//! assert_eq!(features.get(FeatureKey::SpamKeywordCount), 3.0);
//! ```

pub mod extractor;
pub mod patterns;
pub mod text;
pub mod vector;

pub use extractor::{FeatureExtractor, SPAM_KEYWORDS, URGENCY_PHRASES};
pub use vector::{FEATURE_COUNT, FeatureKey, FeatureVector};
