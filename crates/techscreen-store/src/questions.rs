//! Read access to the per-technology question repository.
//!
//! `question-repo.json` maps each technology to its interview questions:
//!
//! ```json
//! { "technologies": { "Rust": [ ... ], "Docker": [ ... ] }, "updatedAt": "2025-01-01T00:00:00Z" }
//! ```
//!
//! Question bodies are opaque here; the repository's technology names are the
//! vocabulary the keyword tagger matches against.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::StoreError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRepo {
    #[serde(default)]
    technologies: BTreeMap<String, Vec<Value>>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl QuestionRepo {
    /// Load the repository file.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::unavailable(path, e))?;
        let repo = Self::from_json(path, &content)?;
        info!(
            path = %path.display(),
            technologies = repo.technologies.len(),
            "loaded question repository"
        );
        Ok(repo)
    }

    fn from_json(path: &Path, content: &str) -> Result<Self, StoreError> {
        serde_json::from_str(content).map_err(|source| StoreError::InvalidRepository {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Technology names, sorted.
    pub fn technologies(&self) -> Vec<String> {
        self.technologies.keys().cloned().collect()
    }

    /// Questions stored for a technology (exact name match); empty when unknown.
    pub fn questions(&self, technology: &str) -> &[Value] {
        self.technologies
            .get(technology)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }
}
