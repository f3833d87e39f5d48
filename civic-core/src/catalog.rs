//! Category catalog: the fixed, ordered list of report categories.
//!
//! Labels are what the user sees ("Abuse of Power"); slugs are what the
//! draft stores ("abuse of power").

use serde::{Deserialize, Serialize};

/// Labels offered when no config overrides them.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Bribery",
    "Embezzlement",
    "Nepotism",
    "Abuse of Power",
    "Contract Manipulation",
    "Misuse of Funds",
    "Other",
];

/// Ordered, read-only category enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    labels: Vec<String>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl CategoryCatalog {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Slug stored in the draft for a label.
    pub fn slug(label: &str) -> String {
        label.to_lowercase()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, slug)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.labels.iter().map(|l| (l.as_str(), Self::slug(l)))
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.labels.iter().position(|l| Self::slug(l) == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.position(slug).is_some()
    }

    /// Display label for a stored slug.
    pub fn label_for(&self, slug: &str) -> Option<&str> {
        self.position(slug).map(|i| self.labels[i].as_str())
    }

    /// Resolve free user input (label or slug, any case) to a slug.
    pub fn resolve(&self, input: &str) -> Option<String> {
        let wanted = Self::slug(input.trim());
        self.labels
            .iter()
            .map(|l| Self::slug(l))
            .find(|s| *s == wanted)
    }

    /// Slug after `current`, wrapping. An unknown or empty slug starts at the first entry.
    pub fn next(&self, current: &str) -> Option<String> {
        if self.labels.is_empty() {
            return None;
        }
        let idx = match self.position(current) {
            Some(i) => (i + 1) % self.labels.len(),
            None => 0,
        };
        Some(Self::slug(&self.labels[idx]))
    }

    /// Slug before `current`, wrapping. An unknown or empty slug starts at the last entry.
    pub fn prev(&self, current: &str) -> Option<String> {
        let len = self.labels.len();
        if len == 0 {
            return None;
        }
        let idx = match self.position(current) {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        Some(Self::slug(&self.labels[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_seven_entries() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.labels()[0], "Bribery");
        assert_eq!(catalog.labels()[6], "Other");
    }

    #[test]
    fn slugs_are_lowercased_labels() {
        let catalog = CategoryCatalog::default();
        assert!(catalog.contains("abuse of power"));
        assert!(!catalog.contains("Abuse of Power"));
        assert_eq!(catalog.label_for("misuse of funds"), Some("Misuse of Funds"));
        assert_eq!(catalog.label_for("arson"), None);
    }

    #[test]
    fn resolve_accepts_any_case() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.resolve(" NEPOTISM "), Some("nepotism".to_string()));
        assert_eq!(catalog.resolve("tax fraud"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.next("").as_deref(), Some("bribery"));
        assert_eq!(catalog.next("bribery").as_deref(), Some("embezzlement"));
        assert_eq!(catalog.next("other").as_deref(), Some("bribery"));
        assert_eq!(catalog.prev("").as_deref(), Some("other"));
        assert_eq!(catalog.prev("bribery").as_deref(), Some("other"));
    }

    #[test]
    fn empty_catalog_cycles_to_nothing() {
        let catalog = CategoryCatalog::new(Vec::<String>::new());
        assert!(catalog.next("").is_none());
        assert!(catalog.prev("").is_none());
    }
}
