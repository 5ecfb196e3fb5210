//! Batch runner: classify a slice of labelled examples and score each one.
//!
//! Per-example problems (malformed entry, tagger failure, timeout) become
//! errored results in place; `run` itself never fails. Results always come
//! back in selection order, whatever the configured concurrency.

use chrono::{DateTime, Utc};
use futures::{StreamExt, stream};
use serde::Serialize;
use techscreen_ai::TagClassifier;
use techscreen_core::{ConfigError, EvalConfig, LoadedExample};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::compare::{Comparison, compare_with_threshold};

/// Select the contiguous slice a run covers.
///
/// Skips `start_index` items, then keeps at most `run_count` of the rest;
/// `run_count == 0` keeps everything. A start past the end selects nothing.
pub fn select<T>(items: &[T], start_index: usize, run_count: usize) -> &[T] {
    let rest = items.get(start_index..).unwrap_or_default();
    if run_count > 0 {
        &rest[..run_count.min(rest.len())]
    } else {
        rest
    }
}

/// An example the tagger ran on, with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredExample {
    /// Expected labels as stored (original casing).
    pub expected: Vec<String>,
    /// Labels the tagger returned, as returned.
    pub actual: Vec<String>,
    #[serde(flatten)]
    pub comparison: Comparison,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The entry lacked required fields or could not be parsed.
    Malformed,
    /// The tagger returned an error.
    Classification,
    /// The tagger did not answer within the configured timeout.
    Timeout,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Classification => "classification",
            Self::Timeout => "timeout",
        }
    }
}

/// An example that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Time spent in the tagger before the failure; `None` if it never ran.
    pub elapsed_ms: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExampleOutcome {
    Scored(ScoredExample),
    Errored(ExampleFailure),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleResult {
    pub id: String,
    #[serde(flatten)]
    pub outcome: ExampleOutcome,
}

impl ExampleResult {
    fn errored(
        id: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
        elapsed_ms: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            outcome: ExampleOutcome::Errored(ExampleFailure {
                kind,
                message: message.into(),
                elapsed_ms,
            }),
        }
    }

    pub fn scored(&self) -> Option<&ScoredExample> {
        match &self.outcome {
            ExampleOutcome::Scored(s) => Some(s),
            ExampleOutcome::Errored(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ExampleFailure> {
        match &self.outcome {
            ExampleOutcome::Scored(_) => None,
            ExampleOutcome::Errored(f) => Some(f),
        }
    }

    pub fn is_errored(&self) -> bool {
        self.failure().is_some()
    }

    pub fn passed(&self) -> bool {
        self.scored().is_some_and(|s| s.comparison.passed)
    }
}

/// Aggregate statistics for a batch.
///
/// Means are taken over scored examples only and are `0.0` when none were scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    /// Scored but did not pass.
    pub failed: usize,
    pub errored: usize,
    pub avg_precision: f64,
    pub avg_recall: f64,
    pub avg_f1: f64,
    pub avg_elapsed_ms: f64,
    /// Every selected example passed (vacuously true for an empty batch).
    pub all_passed: bool,
}

impl BatchSummary {
    pub fn from_results(results: &[ExampleResult]) -> Self {
        let scored: Vec<&ScoredExample> = results.iter().filter_map(|r| r.scored()).collect();
        let passed = scored.iter().filter(|s| s.comparison.passed).count();

        let mean = |f: fn(&ScoredExample) -> f64| -> f64 {
            if scored.is_empty() {
                0.0
            } else {
                scored.iter().map(|s| f(s)).sum::<f64>() / scored.len() as f64
            }
        };

        Self {
            total: results.len(),
            passed,
            failed: scored.len() - passed,
            errored: results.len() - scored.len(),
            avg_precision: mean(|s| s.comparison.precision),
            avg_recall: mean(|s| s.comparison.recall),
            avg_f1: mean(|s| s.comparison.f1),
            avg_elapsed_ms: mean(|s| s.elapsed_ms),
            all_passed: passed == results.len(),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub started_at: DateTime<Utc>,
    pub classifier: String,
    /// Examples available before slicing.
    pub available: usize,
    pub start_index: usize,
    pub run_count: usize,
    /// Per-example results, in selection order.
    pub results: Vec<ExampleResult>,
    pub summary: BatchSummary,
}

/// Runs a tagger over labelled examples and scores its output.
pub struct BatchRunner<C> {
    classifier: C,
    config: EvalConfig,
}

impl<C: TagClassifier> BatchRunner<C> {
    pub fn new(classifier: C, config: EvalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `examples[start_index..]`, limited to `run_count` entries
    /// when `run_count > 0`. See [`select`].
    pub async fn run(
        &self,
        examples: &[LoadedExample],
        start_index: usize,
        run_count: usize,
    ) -> BatchResult {
        let started_at = Utc::now();
        let selected = select(examples, start_index, run_count);
        info!(
            classifier = self.classifier.name(),
            available = examples.len(),
            selected = selected.len(),
            start_index,
            run_count,
            concurrency = self.config.concurrency,
            "starting batch"
        );

        let results: Vec<ExampleResult> = stream::iter(selected)
            .map(|entry| self.evaluate(entry))
            .buffered(self.config.concurrency)
            .collect()
            .await;

        let summary = BatchSummary::from_results(&results);
        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            errored = summary.errored,
            avg_f1 = summary.avg_f1,
            "batch complete"
        );

        BatchResult {
            started_at,
            classifier: self.classifier.name().to_string(),
            available: examples.len(),
            start_index,
            run_count,
            results,
            summary,
        }
    }

    async fn evaluate(&self, entry: &LoadedExample) -> ExampleResult {
        let example = match entry {
            Ok(example) => example,
            Err(malformed) => {
                warn!(id = %malformed.id, reason = %malformed.reason, "malformed example");
                return ExampleResult::errored(
                    &malformed.id,
                    FailureKind::Malformed,
                    &malformed.reason,
                    None,
                );
            }
        };

        let start = Instant::now();
        let call = self.classifier.classify(&example.input_text);
        let outcome = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await,
            None => Ok(call.await),
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        match outcome {
            Ok(Ok(actual)) => {
                let comparison = compare_with_threshold(
                    &example.expected_labels,
                    &actual,
                    self.config.max_extra_labels,
                );
                debug!(
                    id = %example.id,
                    passed = comparison.passed,
                    f1 = comparison.f1,
                    elapsed_ms,
                    "example scored"
                );
                ExampleResult {
                    id: example.id.clone(),
                    outcome: ExampleOutcome::Scored(ScoredExample {
                        expected: example.expected_labels.clone(),
                        actual,
                        comparison,
                        elapsed_ms,
                    }),
                }
            }
            Ok(Err(e)) => {
                warn!(id = %example.id, error = %e, "tagger failed");
                ExampleResult::errored(
                    &example.id,
                    FailureKind::Classification,
                    e.to_string(),
                    Some(elapsed_ms),
                )
            }
            Err(_) => {
                let limit = self.config.timeout.unwrap_or_default();
                warn!(id = %example.id, elapsed_ms, "tagger timed out");
                ExampleResult::errored(
                    &example.id,
                    FailureKind::Timeout,
                    format!("no answer within {}ms", limit.as_millis()),
                    Some(elapsed_ms),
                )
            }
        }
    }
}
