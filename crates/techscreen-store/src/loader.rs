//! Example loading for the evaluation harness.
//!
//! A training screen is a tech-screen record that a human has already tagged.
//! Each one lives in its own `<name>.json` file:
//!
//! ```json
//! { "id": "screen-001", "jobDescription": "...", "technologies": ["Rust", "Docker"] }
//! ```
//!
//! Other fields (candidate, client, questions, ...) are ignored.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use techscreen_core::{LabeledExample, LoadedExample, MalformedExample};
use tracing::{info, warn};

use crate::StoreError;

/// Source of labelled examples.
///
/// Listings are ordered deterministically so that slicing by index selects
/// the same examples on every run. A single bad entry is reported in place
/// as `Err(MalformedExample)`; only failure to enumerate the store is fatal.
#[async_trait]
pub trait ExampleLoader: Send + Sync {
    async fn list_examples(&self) -> Result<Vec<LoadedExample>, StoreError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrainingScreen {
    id: Option<String>,
    job_description: Option<String>,
    technologies: Option<Vec<String>>,
}

/// Loads every `*.json` file in a directory, sorted by file name.
pub struct DirectoryLoader {
    dir: PathBuf,
}

impl DirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of all JSON files in the directory, sorted by file name.
    async fn json_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| StoreError::unavailable(&self.dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::unavailable(&self.dir, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

#[async_trait]
impl ExampleLoader for DirectoryLoader {
    async fn list_examples(&self) -> Result<Vec<LoadedExample>, StoreError> {
        let files = self.json_files().await?;

        let mut examples = Vec::with_capacity(files.len());
        for path in &files {
            let loaded = load_file(path).await;
            if let Err(e) = &loaded {
                warn!(path = %path.display(), reason = %e.reason, "skipping malformed example");
            }
            examples.push(loaded);
        }

        let malformed = examples.iter().filter(|e| e.is_err()).count();
        info!(
            dir = %self.dir.display(),
            count = examples.len(),
            malformed,
            "listed training screens"
        );
        Ok(examples)
    }
}

async fn load_file(path: &Path) -> LoadedExample {
    let stem = file_stem(path);
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MalformedExample::new(&stem, format!("unreadable: {e}")))?;
    parse_training_screen(&stem, &content)
}

/// Parse one training screen. `fallback_id` names the example when the
/// document has no usable `id`.
pub fn parse_training_screen(fallback_id: &str, content: &str) -> LoadedExample {
    let screen: TrainingScreen = serde_json::from_str(content)
        .map_err(|e| MalformedExample::new(fallback_id, format!("invalid JSON: {e}")))?;

    let id = screen
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| fallback_id.to_string());

    let input_text = match screen.job_description {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(MalformedExample::new(id, "missing jobDescription")),
    };

    let expected_labels = screen
        .technologies
        .ok_or_else(|| MalformedExample::new(&id, "missing technologies"))?;

    Ok(LabeledExample {
        id,
        input_text,
        expected_labels,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn screen(id: &str, jd: &str, techs: &[&str]) -> String {
        serde_json::json!({
            "id": id,
            "candidateName": "Jane Doe",
            "jobDescription": jd,
            "technologies": techs,
        })
        .to_string()
    }

    #[test]
    fn parses_training_screen() {
        let json = screen("s1", "Build Go services", &["Go"]);
        let ex = parse_training_screen("file", &json).unwrap();
        assert_eq!(ex.id, "s1");
        assert_eq!(ex.input_text, "Build Go services");
        assert_eq!(ex.expected_labels, vec!["Go"]);
    }

    #[test]
    fn missing_id_falls_back_to_file_stem() {
        let json = r#"{"jobDescription": "Python work", "technologies": ["Python"]}"#;
        let ex = parse_training_screen("screen-042", json).unwrap();
        assert_eq!(ex.id, "screen-042");
    }

    #[test]
    fn missing_job_description_is_malformed() {
        let json = r#"{"id": "s9", "technologies": ["Python"]}"#;
        let err = parse_training_screen("file", json).unwrap_err();
        assert_eq!(err.id, "s9");
        assert!(err.reason.contains("jobDescription"));
    }

    #[test]
    fn blank_job_description_is_malformed() {
        let json = r#"{"id": "s9", "jobDescription": "   ", "technologies": []}"#;
        assert!(parse_training_screen("file", json).is_err());
    }

    #[test]
    fn missing_technologies_is_malformed() {
        let json = r#"{"id": "s3", "jobDescription": "Rust"}"#;
        let err = parse_training_screen("file", json).unwrap_err();
        assert!(err.reason.contains("technologies"));
    }

    #[test]
    fn invalid_json_uses_fallback_id() {
        let err = parse_training_screen("broken", "{ not json").unwrap_err();
        assert_eq!(err.id, "broken");
        assert!(err.reason.starts_with("invalid JSON"));
    }

    #[tokio::test]
    async fn lists_sorted_by_file_name() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "c.json", &screen("c", "jd c", &["Go"]));
        write(tmp.path(), "a.json", &screen("a", "jd a", &["Rust"]));
        write(tmp.path(), "b.json", &screen("b", "jd b", &["Java"]));

        let loader = DirectoryLoader::new(tmp.path());
        let examples = loader.list_examples().await.unwrap();
        let ids: Vec<_> = examples.iter().map(|e| e.as_ref().unwrap().id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn ignores_non_json_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.json", &screen("a", "jd", &["Go"]));
        write(tmp.path(), "notes.txt", "not an example");
        std::fs::create_dir(tmp.path().join("nested.json")).unwrap();

        let loader = DirectoryLoader::new(tmp.path());
        let examples = loader.list_examples().await.unwrap();
        assert_eq!(examples.len(), 1);
    }

    #[tokio::test]
    async fn malformed_file_keeps_its_slot() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "01.json", &screen("one", "jd", &["Go"]));
        write(tmp.path(), "02.json", "{ truncated");
        write(tmp.path(), "03.json", &screen("three", "jd", &["Rust"]));

        let loader = DirectoryLoader::new(tmp.path());
        let examples = loader.list_examples().await.unwrap();
        assert_eq!(examples.len(), 3);
        assert!(examples[0].is_ok());
        assert_eq!(examples[1].as_ref().unwrap_err().id, "02");
        assert_eq!(examples[2].as_ref().unwrap().id, "three");
    }

    #[tokio::test]
    async fn missing_directory_is_storage_unavailable() {
        let tmp = TempDir::new().unwrap();
        let loader = DirectoryLoader::new(tmp.path().join("does-not-exist"));
        let err = loader.list_examples().await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable { .. }));
    }

    #[tokio::test]
    async fn empty_directory_yields_no_examples() {
        let tmp = TempDir::new().unwrap();
        let loader = DirectoryLoader::new(tmp.path());
        assert!(loader.list_examples().await.unwrap().is_empty());
    }
}
