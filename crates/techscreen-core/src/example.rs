//! Labelled examples consumed by the evaluation harness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job description paired with the technologies a human tagged it with.
///
/// Labels keep their original casing; comparison normalises them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledExample {
    pub id: String,
    pub input_text: String,
    pub expected_labels: Vec<String>,
}

impl LabeledExample {
    pub fn new(
        id: impl Into<String>,
        input_text: impl Into<String>,
        expected_labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            input_text: input_text.into(),
            expected_labels: expected_labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// An entry that could not be turned into a [`LabeledExample`].
///
/// Keeps its slot in the listing so slicing by index stays reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed example {id}: {reason}")]
pub struct MalformedExample {
    pub id: String,
    pub reason: String,
}

impl MalformedExample {
    pub fn new(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// One position in an example listing.
pub type LoadedExample = Result<LabeledExample, MalformedExample>;
