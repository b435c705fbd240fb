//! Loading labeled messages from comma-delimited text files.
//!
//! The first line is a header and is skipped. Each following line holds a
//! label and a message text; commas inside double quotes do not separate
//! fields. Records that cannot be used are skipped and reported through the
//! log, so one bad line never aborts a load. Bytes that are not valid UTF-8
//! are replaced with U+FFFD.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::classifier::{Label, LabeledText};
use crate::error::{Result, SpamError};
use crate::features::text::trim_controls;

/// Column order of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RecordLayout {
    /// `label,text`
    #[default]
    LabelFirst,
    /// `text,label`
    TextFirst,
}

/// Split a line on commas lying outside double quotes.
///
/// A comma separates fields when an even number of `"` follows it on the
/// line. Trailing empty fields are dropped.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut quotes_after = line.bytes().filter(|&b| b == b'"').count();
    let mut fields = Vec::new();
    let mut start = 0;

    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => quotes_after -= 1,
            b',' if quotes_after % 2 == 0 => {
                fields.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    while fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.len() == 1 && fields[0].is_empty() && !line.is_empty() {
        fields.clear();
    }
    fields
}

/// Remove one leading and one trailing double quote, if present.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Parse one data line into a labeled text.
pub fn parse_record(line: &str, line_number: usize, layout: RecordLayout) -> Result<LabeledText> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(SpamError::invalid_record(
            line_number,
            format!("expected at least 2 fields, found {}", fields.len()),
        ));
    }

    let (label_field, text_field) = match layout {
        RecordLayout::LabelFirst => (fields[0], fields[1]),
        RecordLayout::TextFirst => (fields[1], fields[0]),
    };

    let label_field = trim_controls(label_field);
    let raw_label: i64 = label_field.parse().map_err(|_| {
        SpamError::invalid_record(line_number, format!("invalid label {label_field:?}"))
    })?;
    let label = Label::try_from(raw_label)
        .map_err(|e| SpamError::invalid_record(line_number, e.to_string()))?;

    Ok(LabeledText::new(strip_quotes(trim_controls(text_field)), label))
}

/// Read labeled texts from any buffered reader, skipping the header line.
pub fn read_records<R: BufRead>(mut reader: R, layout: RecordLayout) -> Result<Vec<LabeledText>> {
    let mut records = Vec::new();
    let mut skipped = 0;
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        if line_number == 1 {
            continue;
        }

        let line = decode_line(&buf);
        if matches!(line, Cow::Owned(_)) {
            log::warn!("Line {line_number} is not valid UTF-8; undecodable bytes were replaced");
        }
        match parse_record(&line, line_number, layout) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("Skipping record: {e}");
                skipped += 1;
            }
        }
    }

    log::info!("Loaded {} records ({} skipped)", records.len(), skipped);
    Ok(records)
}

/// Decode one raw line without its terminator, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Read labeled texts from a dataset file.
pub fn load_records<P: AsRef<Path>>(path: P, layout: RecordLayout) -> Result<Vec<LabeledText>> {
    let path = path.as_ref();
    log::debug!("Loading dataset from {}", path.display());
    let file = File::open(path)?;
    read_records(BufReader::new(file), layout)
}
