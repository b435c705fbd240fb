//! Common types for spam classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpamError;

/// Class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Label {
    /// Not spam (0).
    Ham,
    /// Spam (1).
    Spam,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_u8()
    }
}

impl TryFrom<i64> for Label {
    type Error = SpamError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Ham),
            1 => Ok(Label::Spam),
            other => Err(SpamError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => f.write_str("ham"),
            Label::Spam => f.write_str("spam"),
        }
    }
}

/// A message together with its known class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    /// Message text.
    pub text: String,
    /// Known label.
    pub label: Label,
}

impl LabeledText {
    pub fn new<S: Into<String>>(text: S, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// One of the k training examples selected for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Insertion index of the training example.
    pub index: usize,
    /// Distance from the query.
    pub distance: f64,
    /// Label of the training example.
    pub label: Label,
}
