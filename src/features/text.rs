//! Tokenization helpers shared by the feature extractor.

use regex::Regex;

use super::patterns::{SENTENCE_DELIMITERS, WHITESPACE_RUN, WORD};

/// Split `text` around every match of `separator`.
///
/// A leading empty piece is kept when the text starts with a separator,
/// trailing empty pieces are dropped, and a text without any separator is
/// returned whole as the only piece. As a consequence `""` yields one empty
/// piece and a text made only of separators yields none.
pub fn split_keeping_leading<'a>(separator: &Regex, text: &'a str) -> Vec<&'a str> {
    if !separator.is_match(text) {
        return vec![text];
    }

    let mut pieces: Vec<&str> = separator.split(text).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Whitespace-delimited tokens of `text`.
pub fn tokens(text: &str) -> Vec<&str> {
    split_keeping_leading(&WHITESPACE_RUN, text)
}

/// Sentences of `text`, split on runs of `.`, `!` and `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    split_keeping_leading(&SENTENCE_DELIMITERS, text)
}

/// Number of characters (Unicode scalar values) in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Whether `c` belongs to the ASCII whitespace class `[ \t\n\x0B\x0C\r]`.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Whether `c` ends a line.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Whether `c` counts as whitespace when classifying characters: Unicode
/// space, line and paragraph separators other than the no-break spaces, plus
/// the ASCII tab, line and file/group/record/unit separator controls.
pub fn is_whitespace_char(c: char) -> bool {
    match c {
        '\t'..='\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Strip leading and trailing spaces and ASCII control characters.
pub fn trim_controls(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Whether two identical words follow each other separated only by whitespace,
/// with no line terminator anywhere before or after the pair.
pub fn has_repeated_word(text: &str) -> bool {
    let words: Vec<_> = WORD.find_iter(text).collect();
    words.windows(2).any(|pair| {
        let gap = &text[pair[0].end()..pair[1].start()];
        !gap.is_empty()
            && gap.chars().all(is_space)
            && pair[0].as_str() == pair[1].as_str()
            && !text[..pair[0].start()].contains(is_line_terminator)
            && !text[pair[1].end()..].contains(is_line_terminator)
    })
}

/// Count non-overlapping runs of three identical consecutive characters.
pub fn count_triple_runs(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut count = 0;
    let mut i = 0;
    while i + 2 < chars.len() {
        if chars[i] == chars[i + 1] && chars[i] == chars[i + 2] {
            count += 1;
            i += 3;
        } else {
            i += 1;
        }
    }
    count
}
