//! Builds the tagger selected on the command line.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use techscreen_ai::{EmptyClassifier, KeywordClassifier, RemoteClassifier, TagClassifier};
use techscreen_core::Blacklist;
use techscreen_store::QuestionRepo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaggerKind {
    /// Match question-repository technology names in the text.
    Keyword,
    /// Suggest nothing; the baseline.
    Empty,
    /// Ask an HTTP tagging service.
    Remote,
}

pub struct TaggerSettings {
    pub kind: TaggerKind,
    pub question_repo: PathBuf,
    pub endpoint: Option<String>,
    pub stub_delay: Duration,
    pub blacklist: Blacklist,
}

pub async fn build_tagger(settings: TaggerSettings) -> anyhow::Result<Box<dyn TagClassifier>> {
    let tagger: Box<dyn TagClassifier> = match settings.kind {
        TaggerKind::Keyword => {
            let repo = QuestionRepo::load(&settings.question_repo)
                .await
                .context("loading keyword vocabulary")?;
            if repo.is_empty() {
                tracing::warn!(
                    path = %settings.question_repo.display(),
                    "question repository has no technologies; keyword tagger will match nothing"
                );
            }
            Box::new(KeywordClassifier::new(repo.technologies(), settings.blacklist))
        }
        TaggerKind::Empty => Box::new(EmptyClassifier::with_delay(settings.stub_delay)),
        TaggerKind::Remote => {
            let endpoint = settings
                .endpoint
                .context("--endpoint is required for the remote tagger")?;
            Box::new(RemoteClassifier::new(endpoint, settings.blacklist))
        }
    };
    tracing::info!(tagger = tagger.name(), "tagger ready");
    Ok(tagger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(kind: TaggerKind, question_repo: PathBuf) -> TaggerSettings {
        TaggerSettings {
            kind,
            question_repo,
            endpoint: None,
            stub_delay: Duration::ZERO,
            blacklist: Blacklist::default(),
        }
    }

    #[tokio::test]
    async fn keyword_tagger_uses_repo_vocabulary() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("question-repo.json");
        std::fs::write(
            &path,
            r#"{"technologies": {"Rust": [], "Docker": [], "Git": []}}"#,
        )
        .unwrap();

        let tagger = build_tagger(settings(TaggerKind::Keyword, path)).await.unwrap();
        assert_eq!(tagger.name(), "keyword");
        let tags = tagger.classify("Rust services shipped with Docker and Git").await.unwrap();
        assert_eq!(tags, vec!["Docker", "Rust"]);
    }

    #[tokio::test]
    async fn keyword_tagger_needs_the_repo() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.json");
        let result = build_tagger(settings(TaggerKind::Keyword, missing)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn remote_tagger_needs_an_endpoint() {
        let result = build_tagger(settings(TaggerKind::Remote, PathBuf::new())).await;
        let err = result.err().unwrap();
        assert!(err.to_string().contains("--endpoint"));
    }

    #[tokio::test]
    async fn empty_tagger_builds_without_files() {
        let tagger = build_tagger(settings(TaggerKind::Empty, PathBuf::new())).await.unwrap();
        assert_eq!(tagger.name(), "empty");
    }
}
