//! Evaluation settings passed to the batch runner at construction time.

use std::time::Duration;

use thiserror::Error;

/// An example passes only while it has fewer extra labels than this.
pub const DEFAULT_MAX_EXTRA_LABELS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("max_extra_labels must be at least 1 (no example could ever pass)")]
    ZeroExtraThreshold,

    #[error("timeout must be non-zero")]
    ZeroTimeout,
}

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Pass threshold: an example passes when nothing is missing and
    /// `extra.len() < max_extra_labels`.
    pub max_extra_labels: usize,
    /// Maximum classifier calls in flight. `1` processes examples one at a time.
    pub concurrency: usize,
    /// Per-call classifier timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_extra_labels: DEFAULT_MAX_EXTRA_LABELS,
            concurrency: 1,
            timeout: None,
        }
    }
}

impl EvalConfig {
    pub fn with_max_extra_labels(mut self, max_extra_labels: usize) -> Self {
        self.max_extra_labels = max_extra_labels;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.max_extra_labels == 0 {
            return Err(ConfigError::ZeroExtraThreshold);
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential_with_threshold_five() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.max_extra_labels, 5);
        assert_eq!(cfg.concurrency, 1);
        assert!(cfg.timeout.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_concurrency() {
        let cfg = EvalConfig::default().with_concurrency(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroConcurrency));
    }

    #[test]
    fn rejects_zero_threshold() {
        let cfg = EvalConfig::default().with_max_extra_labels(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroExtraThreshold));
    }

    #[test]
    fn rejects_zero_timeout() {
        let cfg = EvalConfig::default().with_timeout(Some(Duration::ZERO));
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn builder_overrides() {
        let cfg = EvalConfig::default()
            .with_max_extra_labels(3)
            .with_concurrency(4)
            .with_timeout(Some(Duration::from_secs(30)));
        assert_eq!(cfg.max_extra_labels, 3);
        assert_eq!(cfg.concurrency, 4);
        assert_eq!(cfg.timeout, Some(Duration::from_secs(30)));
        assert!(cfg.validate().is_ok());
    }
}
