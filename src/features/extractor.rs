//! Handcrafted feature extraction for short messages.
//!
//! [`FeatureExtractor::extract`] turns any string into a [`FeatureVector`].
//! Extraction is pure and total: it never fails, never divides by zero and
//! always fills every key of the schema.
//!
//! Whitespace and digit classes are ASCII-only. Whole-text flags such as
//! `hasHtml` or the grammar checks hold only when the triggering occurrence is
//! not accompanied by a line terminator elsewhere in the text, so a multi-line
//! message sets fewer flags than the same content on one line.

use ahash::AHashSet;

use super::patterns::*;
use super::text::{
    char_len, count_triple_runs, has_repeated_word, is_whitespace_char, ratio, sentences, tokens,
    trim_controls,
};
use super::vector::{FeatureKey, FeatureVector};

/// Substrings whose presence in a token marks it as spam-indicative.
pub const SPAM_KEYWORDS: [&str; 7] = ["free", "winner", "win", "won", "prize", "urgent", "offer"];

/// Phrases contributing to the urgency score.
pub const URGENCY_PHRASES: [&str; 9] = [
    "urgent",
    "immediately",
    "now",
    "hurry",
    "limited time",
    "act now",
    "don't wait",
    "expires",
    "deadline",
];

const URGENCY_STEP: f64 = 0.2;
const URGENCY_CAP: f64 = 1.0;

/// Stateless extractor producing fixed-schema feature vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature vector of `text`.
    pub fn extract(&self, text: &str) -> FeatureVector {
        let lowered = text.to_lowercase();
        let words = tokens(text);
        let length = char_len(text) as f64;
        let word_count = words.len() as f64;
        let url_count = URL.find_iter(text).count() as f64;
        let keyword_count = count_spam_keywords(&lowered) as f64;

        let mut features = FeatureVector::zeros();
        features.set(FeatureKey::Length, length);
        features.set(FeatureKey::WordCount, word_count);
        features.set(FeatureKey::AvgWordLength, average_word_length(&words));
        features.set(FeatureKey::UrlCount, url_count);
        features.set(
            FeatureKey::NumberCount,
            text.chars().filter(char::is_ascii_digit).count() as f64,
        );
        features.set(FeatureKey::UniqueWordRatio, unique_word_ratio(&lowered));
        features.set(FeatureKey::HasHtml, flag(HTML_TAG.is_match(&lowered)));
        features.set(
            FeatureKey::ExclamationRatio,
            ratio(text.matches('!').count() as f64, length),
        );
        features.set(
            FeatureKey::CapitalRatio,
            ratio(
                text.chars().filter(char::is_ascii_uppercase).count() as f64,
                length,
            ),
        );
        features.set(FeatureKey::SpamKeywordCount, keyword_count);
        features.set(FeatureKey::SpamKeywordRatio, ratio(keyword_count, word_count));
        features.set(FeatureKey::HasMoneySymbols, flag(has_money_symbols(text, &lowered)));
        features.set(
            FeatureKey::ConsecutiveCapitalWords,
            longest_capital_word_run(&words) as f64,
        );
        features.set(
            FeatureKey::EmailAddressCount,
            EMAIL_ADDRESS.find_iter(text).count() as f64,
        );
        features.set(
            FeatureKey::PhoneNumberCount,
            PHONE_NUMBER.find_iter(text).count() as f64,
        );
        features.set(FeatureKey::HasWeirdFormatting, flag(has_weird_formatting(text)));
        features.set(FeatureKey::RepeatedCharCount, count_triple_runs(text) as f64);
        features.set(FeatureKey::SpacingIrregularity, spacing_irregularity(&words));
        features.set(FeatureKey::SuspiciousPatternScore, suspicious_pattern_score(&lowered));
        features.set(
            FeatureKey::CurrencyMentionCount,
            CURRENCY_AMOUNT.find_iter(text).count() as f64,
        );
        features.set(FeatureKey::UrgencyScore, urgency_score(&lowered));
        features.set(FeatureKey::GrammarErrorScore, grammar_error_score(text));
        features.set(FeatureKey::LinkDensity, ratio(url_count, word_count));
        features.set(FeatureKey::SpecialCharRatio, special_char_ratio(text, length));
        features.set(FeatureKey::SentenceLengthVariance, sentence_length_deviation(text));
        features
    }
}

fn flag(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

fn average_word_length(words: &[&str]) -> f64 {
    let total: usize = words.iter().map(|word| char_len(word)).sum();
    ratio(total as f64, words.len() as f64)
}

fn unique_word_ratio(lowered: &str) -> f64 {
    let words = tokens(lowered);
    let distinct: AHashSet<&str> = words.iter().copied().collect();
    ratio(distinct.len() as f64, words.len() as f64)
}

fn count_spam_keywords(lowered: &str) -> usize {
    let words = tokens(lowered);
    SPAM_KEYWORDS
        .iter()
        .map(|keyword| words.iter().filter(|word| word.contains(keyword)).count())
        .sum()
}

fn has_money_symbols(text: &str, lowered: &str) -> bool {
    MONEY_SYMBOL.is_match(text) || CURRENCY_CODE.is_match(lowered)
}

fn longest_capital_word_run(words: &[&str]) -> usize {
    let mut current = 0;
    let mut longest = 0;
    for word in words {
        if CAPITAL_WORD.is_match(word) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn has_weird_formatting(text: &str) -> bool {
    ALTERNATING_CASE.is_match(text)
        || REPEATED_PUNCTUATION.is_match(text)
        || DOUBLE_SPACE.is_match(text)
}

fn spacing_irregularity(words: &[&str]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }
    let irregular = words
        .windows(2)
        .filter(|pair| pair[0].is_empty() || pair[1].is_empty())
        .count();
    irregular as f64 / (words.len() - 1) as f64
}

// Callers pass the lower-cased text, so the uppercase-run flag stays silent.
fn suspicious_pattern_score(text: &str) -> f64 {
    let mut score = 0.0;
    if REPEATED_PUNCTUATION.is_match(text) {
        score += 0.3;
    }
    if UPPERCASE_RUN.is_match(text) {
        score += 0.3;
    }
    if DIGIT_GROUPS_IN_WORD.is_match(text) {
        score += 0.2;
    }
    if TRIPLE_SPACE.is_match(text) {
        score += 0.2;
    }
    score
}

fn urgency_score(lowered: &str) -> f64 {
    let mut score = 0.0;
    for phrase in URGENCY_PHRASES {
        if lowered.contains(phrase) {
            score += URGENCY_STEP;
        }
    }
    f64::min(score, URGENCY_CAP)
}

fn grammar_error_score(text: &str) -> f64 {
    let mut score = 0.0;
    if REPEATED_TERMINAL.is_match(text) {
        score += 0.2;
    }
    if SPACE_BEFORE_PUNCTUATION.is_match(text) {
        score += 0.2;
    }
    if has_repeated_word(text) {
        score += 0.3;
    }
    if MISSING_SPACE_AFTER_PUNCTUATION.is_match(text) {
        score += 0.3;
    }
    score
}

fn special_char_ratio(text: &str, length: f64) -> f64 {
    let special = text
        .chars()
        .filter(|&c| !c.is_alphanumeric() && !is_whitespace_char(c))
        .count();
    ratio(special as f64, length)
}

/// Population standard deviation of per-sentence token counts.
fn sentence_length_deviation(text: &str) -> f64 {
    let lengths: Vec<f64> = sentences(text)
        .into_iter()
        .map(|sentence| tokens(trim_controls(sentence)).len() as f64)
        .collect();
    if lengths.len() <= 1 {
        return 0.0;
    }

    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
