//! Rule-based tagger: finds known technology names in the job description.
//!
//! A vocabulary term matches when it appears in the text (case-insensitive)
//! with no letter or digit directly before or after it. Punctuation inside a
//! term is literal, so `C#`, `CI/CD`, and `.NET Core` match as written.

use std::collections::HashSet;

use async_trait::async_trait;
use techscreen_core::{Blacklist, normalize_label};
use tracing::debug;

use crate::{ClassifyError, TagClassifier};

struct Term {
    label: String,
    needle: String,
}

pub struct KeywordClassifier {
    terms: Vec<Term>,
    blacklist: Blacklist,
}

impl KeywordClassifier {
    /// Build from a vocabulary of technology names. Blank and duplicate
    /// (case-insensitive) entries are dropped; the first spelling wins.
    pub fn new(
        vocabulary: impl IntoIterator<Item = impl Into<String>>,
        blacklist: Blacklist,
    ) -> Self {
        let mut seen = HashSet::new();
        let terms = vocabulary
            .into_iter()
            .map(Into::into)
            .filter_map(|label: String| {
                let needle = normalize_label(&label);
                if needle.is_empty() || !seen.insert(needle.clone()) {
                    return None;
                }
                Some(Term {
                    label: label.trim().to_string(),
                    needle,
                })
            })
            .collect();
        Self { terms, blacklist }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    /// Labels found in `text`, in vocabulary order, blacklist applied.
    pub fn tag(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        let found: Vec<String> = self
            .terms
            .iter()
            .filter(|t| contains_term(&haystack, &t.needle))
            .map(|t| t.label.clone())
            .collect();
        self.blacklist.filter(found)
    }
}

#[async_trait]
impl TagClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, input: &str) -> Result<Vec<String>, ClassifyError> {
        let labels = self.tag(input);
        debug!(count = labels.len(), "keyword tagger matched");
        Ok(labels)
    }
}

fn contains_term(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
