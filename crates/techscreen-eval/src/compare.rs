//! Expected-vs-predicted label set comparison.
//!
//! Both sides are normalised (trimmed, lower-cased) and de-duplicated before
//! comparison, and every label in the result is reported in normalised form.
//! `matches` and `extra` follow the predicted order, `missing` the expected order.

use std::collections::HashSet;

use serde::Serialize;
use techscreen_core::{DEFAULT_MAX_EXTRA_LABELS, normalized_set};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Labels both expected and predicted.
    pub matches: Vec<String>,
    /// Predicted but not expected (false positives).
    pub extra: Vec<String>,
    /// Expected but not predicted (false negatives).
    pub missing: Vec<String>,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Nothing missing and fewer extras than the threshold.
    pub passed: bool,
}

/// Compare with the default pass threshold ([`DEFAULT_MAX_EXTRA_LABELS`]).
pub fn compare<E: AsRef<str>, A: AsRef<str>>(expected: &[E], actual: &[A]) -> Comparison {
    compare_with_threshold(expected, actual, DEFAULT_MAX_EXTRA_LABELS)
}

/// Compare label sets. Passing requires `missing` to be empty and
/// `extra.len() < max_extra`.
pub fn compare_with_threshold<E: AsRef<str>, A: AsRef<str>>(
    expected: &[E],
    actual: &[A],
    max_extra: usize,
) -> Comparison {
    let expected = normalized_set(expected);
    let actual = normalized_set(actual);

    let expected_lookup: HashSet<&str> = expected.iter().map(String::as_str).collect();
    let actual_lookup: HashSet<&str> = actual.iter().map(String::as_str).collect();

    let (matches, extra): (Vec<String>, Vec<String>) = actual
        .iter()
        .cloned()
        .partition(|l| expected_lookup.contains(l.as_str()));
    let missing: Vec<String> = expected
        .iter()
        .filter(|l| !actual_lookup.contains(l.as_str()))
        .cloned()
        .collect();

    let precision = ratio(matches.len(), actual.len());
    let recall = ratio(matches.len(), expected.len());
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    let passed = missing.is_empty() && extra.len() < max_extra;

    Comparison {
        matches,
        extra,
        missing,
        precision,
        recall,
        f1,
        passed,
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
