//! Label normalisation and the technology blacklist.
//!
//! Labels are compared case-insensitively. A label's normalised form is its
//! trimmed, lower-cased text; two labels are the same label when their
//! normalised forms are equal.

use std::collections::HashSet;

/// Generic labels that say nothing about a particular role.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "Github",
    "Web APIs",
    "Web API",
    "Cloud Services",
    "AI",
    "HTML",
    "Git",
    "Agile",
    "CI/CD",
    "CICD",
    "APIs",
    "SDLC",
    "Web Development",
    "full stack development",
    "Jira",
    "RDBMS",
    ".NET Core",
];

/// Normalise a label for comparison.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Normalise and de-duplicate labels, keeping first-occurrence order.
pub fn normalized_set<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(labels.len());
    let mut out = Vec::with_capacity(labels.len());
    for label in labels {
        let norm = normalize_label(label.as_ref());
        if seen.insert(norm.clone()) {
            out.push(norm);
        }
    }
    out
}

/// Case-insensitive set of labels that must never be suggested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().copied())
    }
}

impl Blacklist {
    pub fn new(entries: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| normalize_label(e.as_ref()))
                .collect(),
        }
    }

    /// A blacklist that lets everything through.
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains(&normalize_label(label))
    }

    /// Drop blacklisted labels, preserving order and original casing.
    pub fn filter(&self, labels: Vec<String>) -> Vec<String> {
        if self.entries.is_empty() {
            return labels;
        }
        labels.into_iter().filter(|l| !self.contains(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_label("  Kubernetes "), "kubernetes");
        assert_eq!(normalize_label("C#"), "c#");
    }

    #[test]
    fn normalized_set_dedupes_in_order() {
        let set = normalized_set(&["Go", "python", "GO", "Python", "Rust"]);
        assert_eq!(set, vec!["go", "python", "rust"]);
    }

    #[test]
    fn normalized_set_empty() {
        let empty: [&str; 0] = [];
        assert!(normalized_set(&empty).is_empty());
    }

    #[test]
    fn default_blacklist_is_case_insensitive() {
        let bl = Blacklist::default();
        assert_eq!(bl.len(), DEFAULT_BLACKLIST.len());
        assert!(bl.contains("git"));
        assert!(bl.contains("GITHUB"));
        assert!(bl.contains(".net core"));
        assert!(!bl.contains("Rust"));
    }

    #[test]
    fn filter_keeps_order_and_casing() {
        let bl = Blacklist::default();
        let out = bl.filter(vec![
            "Python".into(),
            "Agile".into(),
            "Docker".into(),
            "ci/cd".into(),
        ]);
        assert_eq!(out, vec!["Python", "Docker"]);
    }

    #[test]
    fn empty_blacklist_passes_everything() {
        let bl = Blacklist::empty();
        assert!(bl.is_empty());
        let input = vec!["Git".to_string(), "Agile".to_string()];
        assert_eq!(bl.filter(input.clone()), input);
    }
}
