//! HTTP client for an external tagging service.
//!
//! Wire format: `POST <endpoint>` with `{"jobDescription": "..."}`, answered by
//! `{"technologies": ["...", ...]}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use techscreen_core::Blacklist;
use tracing::info;

use crate::{ClassifyError, TagClassifier};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TagRequest<'a> {
    job_description: &'a str,
}

#[derive(Deserialize)]
struct TagResponse {
    #[serde(default)]
    technologies: Vec<String>,
}

pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
    blacklist: Blacklist,
}

impl RemoteClassifier {
    /// `endpoint` is the full URL of the tagging route, e.g.
    /// `http://localhost:8080/api/tags`. A trailing slash is dropped.
    pub fn new(endpoint: String, blacklist: Blacklist) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            blacklist,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TagClassifier for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, input: &str) -> Result<Vec<String>, ClassifyError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&TagRequest {
                job_description: input,
            })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifyError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TagResponse = resp.json().await?;
        info!(endpoint = %self.endpoint, count = parsed.technologies.len(), "remote tags received");
        Ok(self.blacklist.filter(parsed.technologies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case() {
        let json = serde_json::to_string(&TagRequest {
            job_description: "Rust services",
        })
        .unwrap();
        assert_eq!(json, r#"{"jobDescription":"Rust services"}"#);
    }

    #[test]
    fn response_without_technologies_is_empty() {
        let parsed: TagResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.technologies.is_empty());
    }

    #[test]
    fn trims_trailing_slash() {
        let clf =
            RemoteClassifier::new("http://localhost:8080/api/tags/".into(), Blacklist::empty());
        assert_eq!(clf.endpoint(), "http://localhost:8080/api/tags");
    }
}
