use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("tagging backend failed: {0}")]
    Backend(String),

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// Suggests technology labels for a job description.
///
/// Implementations may be slow and may fail; callers treat every call as
/// fallible and independent of the others.
#[async_trait]
pub trait TagClassifier: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    async fn classify(&self, input: &str) -> Result<Vec<String>, ClassifyError>;
}

#[async_trait]
impl<T: TagClassifier + ?Sized> TagClassifier for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn classify(&self, input: &str) -> Result<Vec<String>, ClassifyError> {
        (**self).classify(input).await
    }
}
