//! Compiled regular expressions used by feature extraction.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in feature pattern should be valid")
}

/// Any run of characters that are not line terminators.
const LINE_BODY: &str = r"[^\n\r\u{85}\u{2028}\u{2029}]*";

/// Compile a flag pattern that holds when `pattern` occurs in the text and no
/// line terminator appears outside that occurrence.
fn compile_flag(pattern: &str) -> Regex {
    compile(&format!(r"\A{LINE_BODY}(?:{pattern}){LINE_BODY}\z"))
}

// Character classes are ASCII-only: `(?-u:\s)` is `[ \t\n\x0B\x0C\r]` and
// digits are `[0-9]`. Word boundaries stay Unicode-aware.

pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?-u:\s)+"));
pub static SENTENCE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| compile(r"[.!?]+"));
pub static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?-u:\w)+\b"));

pub static URL: LazyLock<Regex> = LazyLock::new(|| compile(r"https?://(?-u:[\w./])+"));
pub static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}"));
pub static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b|\([0-9]{3}\)(?-u:\s)?[0-9]{3}[-.]?[0-9]{4}")
});
pub static CURRENCY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"\$[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?",
        "|",
        r"[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?(?-u:\s)?(?:USD|EUR|GBP)",
    ))
});
pub static CAPITAL_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2,}$"));

pub static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"<[^>]+>"));
pub static MONEY_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"[$€£¥]"));
pub static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| compile_flag(r"\b(?:usd|eur|gbp)\b"));

pub static ALTERNATING_CASE: LazyLock<Regex> =
    LazyLock::new(|| compile_flag(r"[A-Z][a-z][A-Z][a-z]"));
pub static REPEATED_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"[!?]{2,}"));
pub static DOUBLE_SPACE: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"(?-u:\s){2,}"));
pub static TRIPLE_SPACE: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"(?-u:\s){3,}"));
pub static UPPERCASE_RUN: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"[A-Z]{4,}"));
pub static DIGIT_GROUPS_IN_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile_flag(r"(?-u:\w)*[0-9]+(?-u:\w)*[0-9]+(?-u:\w)*"));

pub static REPEATED_TERMINAL: LazyLock<Regex> = LazyLock::new(|| compile_flag(r"[.!?]{2,}"));
pub static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile_flag(r"(?-u:\s)+[.,!?]"));
pub static MISSING_SPACE_AFTER_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile_flag(r"[.!?][a-zA-Z]"));
