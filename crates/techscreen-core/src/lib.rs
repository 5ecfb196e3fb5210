pub mod config;
pub mod example;
pub mod labels;

pub use config::{ConfigError, DEFAULT_MAX_EXTRA_LABELS, EvalConfig};
pub use example::{LabeledExample, LoadedExample, MalformedExample};
pub use labels::{Blacklist, normalize_label, normalized_set};
