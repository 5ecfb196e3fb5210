//! Technology tagging: maps a free-text job description to technology labels.

mod classifier;
pub use classifier::{ClassifyError, TagClassifier};

pub mod empty;
pub mod keyword;
pub use empty::EmptyClassifier;
pub use keyword::KeywordClassifier;

#[cfg(feature = "http")]
pub mod remote;
#[cfg(feature = "http")]
pub use remote::RemoteClassifier;
