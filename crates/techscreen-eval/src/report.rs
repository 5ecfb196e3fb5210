//! Human-readable rendering of batch results.
//!
//! Errored examples are rendered as errors, never as zero scores, and the
//! summary lists them apart from the scored counts.

use std::fmt;

use crate::runner::{BatchResult, BatchSummary, ExampleOutcome, ExampleResult};

const LABEL_WIDTH: usize = 12;

/// One example block.
pub struct ExampleReport<'a>(pub &'a ExampleResult);

/// Aggregate block for a whole batch.
pub struct SummaryReport<'a>(pub &'a BatchResult);

/// Header, every example block, then the summary.
pub struct BatchReport<'a>(pub &'a BatchResult);

impl fmt::Display for ExampleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        match &result.outcome {
            ExampleOutcome::Scored(s) => {
                let c = &s.comparison;
                let verdict = if c.passed { "PASSED" } else { "FAILED" };
                writeln!(f, "{}: {verdict}", result.id)?;
                row(f, "Missing", c.missing.join(", "))?;
                row(f, "Extra", c.extra.join(", "))?;
                row(f, "Expected", s.expected.join(", "))?;
                row(f, "Actual", s.actual.join(", "))?;
                row(f, "Matches", c.matches.len())?;
                row(f, "Precision", format!("{:.4}", c.precision))?;
                row(f, "Recall", format!("{:.4}", c.recall))?;
                row(f, "F1", format!("{:.4}", c.f1))?;
                row(f, "Time", format!("{:.2}ms", s.elapsed_ms))
            }
            ExampleOutcome::Errored(e) => {
                writeln!(f, "{}: ERROR ({})", result.id, e.kind.as_str())?;
                row(f, "Reason", &e.message)?;
                if let Some(ms) = e.elapsed_ms {
                    row(f, "Time", format!("{ms:.2}ms"))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let batch = self.0;
        let BatchSummary {
            total,
            passed,
            failed,
            errored,
            avg_precision,
            avg_recall,
            avg_f1,
            avg_elapsed_ms,
            all_passed,
        } = &batch.summary;

        writeln!(f, "=== BATCH SUMMARY ===")?;
        row(f, "Result", if *all_passed { "PASSED" } else { "FAILED" })?;
        row(f, "Classifier", &batch.classifier)?;
        row(f, "Processed", format!("{total} of {}", batch.available))?;
        row(f, "Passed", passed)?;
        row(f, "Failed", failed)?;
        row(f, "Errored", errored)?;

        let scored = total - errored;
        writeln!(f, "Averages over {scored} scored example(s):")?;
        row(f, "Precision", format!("{avg_precision:.4}"))?;
        row(f, "Recall", format!("{avg_recall:.4}"))?;
        row(f, "F1", format!("{avg_f1:.4}"))?;
        row(f, "Time", format!("{avg_elapsed_ms:.2}ms"))?;

        if *errored > 0 {
            writeln!(f, "Errored examples:")?;
            for r in &batch.results {
                if let Some(e) = r.failure() {
                    writeln!(f, "  {} ({}): {}", r.id, e.kind.as_str(), e.message)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for BatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let batch = self.0;
        write!(
            f,
            "Found {} example(s). Processing {} starting at index {}",
            batch.available,
            batch.results.len(),
            batch.start_index
        )?;
        if batch.run_count > 0 {
            write!(f, ", running at most {}", batch.run_count)?;
        }
        writeln!(f, ".")?;

        for result in &batch.results {
            writeln!(f)?;
            write!(f, "{}", ExampleReport(result))?;
        }
        writeln!(f)?;
        write!(f, "{}", SummaryReport(batch))
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<width$} {value}", format!("{label}:"), width = LABEL_WIDTH)
}
