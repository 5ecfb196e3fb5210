//! Storage layer: training-screen examples and the question repository, both JSON on disk.

mod error;
pub use error::StoreError;

pub mod loader;
pub mod questions;

pub use loader::{DirectoryLoader, ExampleLoader};
pub use questions::QuestionRepo;
