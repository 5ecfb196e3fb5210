//! Baseline tagger that never suggests anything.

use std::time::Duration;

use async_trait::async_trait;

use crate::{ClassifyError, TagClassifier};

/// Returns no labels, optionally after a fixed delay.
///
/// Scoring this tagger gives the floor for every metric, and the delay lets
/// the harness's timing and timeout paths be exercised without a backend.
#[derive(Debug, Clone, Default)]
pub struct EmptyClassifier {
    delay: Duration,
}

impl EmptyClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TagClassifier for EmptyClassifier {
    fn name(&self) -> &str {
        "empty"
    }

    async fn classify(&self, _input: &str) -> Result<Vec<String>, ClassifyError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_no_labels() {
        let clf = EmptyClassifier::new();
        assert!(clf.classify("Senior Rust engineer").await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn honours_delay() {
        let clf = EmptyClassifier::with_delay(Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        clf.classify("anything").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
