//! Fixed-schema feature vectors.
//!
//! Every vector holds exactly one value per [`FeatureKey`], stored in a
//! fixed-size array indexed by the key's schema position. Two vectors always
//! share the same key set, so key-wise comparison never needs a fallback.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of features in the schema.
pub const FEATURE_COUNT: usize = 25;

/// The closed set of feature keys, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    Length,
    WordCount,
    AvgWordLength,
    UrlCount,
    NumberCount,
    UniqueWordRatio,
    HasHtml,
    ExclamationRatio,
    CapitalRatio,
    SpamKeywordCount,
    SpamKeywordRatio,
    HasMoneySymbols,
    ConsecutiveCapitalWords,
    EmailAddressCount,
    PhoneNumberCount,
    HasWeirdFormatting,
    RepeatedCharCount,
    SpacingIrregularity,
    SuspiciousPatternScore,
    CurrencyMentionCount,
    UrgencyScore,
    GrammarErrorScore,
    LinkDensity,
    SpecialCharRatio,
    SentenceLengthVariance,
}

impl FeatureKey {
    /// All keys in schema order.
    pub const ALL: [FeatureKey; FEATURE_COUNT] = [
        FeatureKey::Length,
        FeatureKey::WordCount,
        FeatureKey::AvgWordLength,
        FeatureKey::UrlCount,
        FeatureKey::NumberCount,
        FeatureKey::UniqueWordRatio,
        FeatureKey::HasHtml,
        FeatureKey::ExclamationRatio,
        FeatureKey::CapitalRatio,
        FeatureKey::SpamKeywordCount,
        FeatureKey::SpamKeywordRatio,
        FeatureKey::HasMoneySymbols,
        FeatureKey::ConsecutiveCapitalWords,
        FeatureKey::EmailAddressCount,
        FeatureKey::PhoneNumberCount,
        FeatureKey::HasWeirdFormatting,
        FeatureKey::RepeatedCharCount,
        FeatureKey::SpacingIrregularity,
        FeatureKey::SuspiciousPatternScore,
        FeatureKey::CurrencyMentionCount,
        FeatureKey::UrgencyScore,
        FeatureKey::GrammarErrorScore,
        FeatureKey::LinkDensity,
        FeatureKey::SpecialCharRatio,
        FeatureKey::SentenceLengthVariance,
    ];

    /// Position of this key inside a [`FeatureVector`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The external name of this key, as used in importance reports.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKey::Length => "length",
            FeatureKey::WordCount => "wordCount",
            FeatureKey::AvgWordLength => "avgWordLength",
            FeatureKey::UrlCount => "urlCount",
            FeatureKey::NumberCount => "numberCount",
            FeatureKey::UniqueWordRatio => "uniqueWordRatio",
            FeatureKey::HasHtml => "hasHtml",
            FeatureKey::ExclamationRatio => "exclamationRatio",
            FeatureKey::CapitalRatio => "capitalRatio",
            FeatureKey::SpamKeywordCount => "spamKeywordCount",
            FeatureKey::SpamKeywordRatio => "spamKeywordRatio",
            FeatureKey::HasMoneySymbols => "hasMoneySymbols",
            FeatureKey::ConsecutiveCapitalWords => "consecutiveCapitalWords",
            FeatureKey::EmailAddressCount => "emailAddressCount",
            FeatureKey::PhoneNumberCount => "phoneNumberCount",
            FeatureKey::HasWeirdFormatting => "hasWeirdFormatting",
            FeatureKey::RepeatedCharCount => "repeatedCharCount",
            FeatureKey::SpacingIrregularity => "spacingIrregularity",
            FeatureKey::SuspiciousPatternScore => "suspiciousPatternScore",
            FeatureKey::CurrencyMentionCount => "currencyMentionCount",
            FeatureKey::UrgencyScore => "urgencyScore",
            FeatureKey::GrammarErrorScore => "grammarErrorScore",
            FeatureKey::LinkDensity => "linkDensity",
            FeatureKey::SpecialCharRatio => "specialCharRatio",
            FeatureKey::SentenceLengthVariance => "sentenceLengthVariance",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FeatureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A numeric summary of one text, one value per [`FeatureKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl FeatureVector {
    /// A vector with every feature set to zero.
    pub fn zeros() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Build a vector from raw values in schema order.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values[key.index()]
    }

    pub fn set(&mut self, key: FeatureKey, value: f64) {
        self.values[key.index()] = value;
    }

    /// Raw values in schema order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Iterate over `(key, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        FeatureKey::ALL
            .into_iter()
            .map(move |key| (key, self.values[key.index()]))
    }

    /// Name to value view of this vector.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(key, value)| (key.name().to_string(), value))
            .collect()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_key_indices_follow_schema_order() {
        for (position, key) in FeatureKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), position);
        }
    }

    #[test]
    fn test_key_names_are_distinct() {
        let names: BTreeSet<&str> = FeatureKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), FEATURE_COUNT);
        assert_eq!(FeatureKey::SpamKeywordRatio.to_string(), "spamKeywordRatio");
    }

    #[test]
    fn test_serialized_names_match_display_names() {
        assert_eq!(
            serde_json::to_string(&FeatureKey::SentenceLengthVariance).unwrap(),
            "\"sentenceLengthVariance\""
        );
    }

    #[test]
    fn test_vector_get_set_and_map_view() {
        let mut vector = FeatureVector::zeros();
        vector.set(FeatureKey::UrlCount, 2.0);

        assert_eq!(vector.get(FeatureKey::UrlCount), 2.0);
        assert_eq!(vector.get(FeatureKey::Length), 0.0);

        let map = vector.to_map();
        assert_eq!(map.len(), FEATURE_COUNT);
        assert_eq!(map["urlCount"], 2.0);
    }
}
