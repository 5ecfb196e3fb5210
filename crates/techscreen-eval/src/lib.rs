//! Tagging evaluation: label-set comparison, batch runs, and reporting.
//!
//! Metrics are retrieval-style, per example:
//!
//! - **Precision**: fraction of predicted labels that were expected
//! - **Recall**: fraction of expected labels that were predicted
//! - **F1**: harmonic mean of precision and recall
//!
//! A batch averages them over the examples that could be scored; examples
//! that errored are counted but never folded into the averages.

pub mod compare;
pub mod report;
pub mod runner;

pub use compare::{Comparison, compare, compare_with_threshold};
pub use runner::{
    BatchResult, BatchRunner, BatchSummary, ExampleFailure, ExampleOutcome, ExampleResult,
    FailureKind, ScoredExample, select,
};
