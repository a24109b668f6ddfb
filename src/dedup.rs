use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern compiles"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Record of entry fingerprints scoped to one processing run. Construct one
/// per run and thread it through the aggregation; keys never leave the set.
#[derive(Debug, Default)]
pub struct SeenEntries {
    keys: HashSet<String>,
}

impl SeenEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, returning true when it has not been seen in this
    /// run. First occurrence wins; later variants differing only in links,
    /// whitespace, or case are rejected.
    pub fn insert(&mut self, entry: &str) -> bool {
        self.keys.insert(normalized_key(entry))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Deduplication fingerprint: NFC fold, lower-case, drop URL substrings,
/// collapse whitespace runs, trim.
pub fn normalized_key(entry: &str) -> String {
    let lower = entry.nfc().collect::<String>().to_lowercase();
    let no_links = URL.replace_all(&lower, "");
    WHITESPACE.replace_all(&no_links, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_links_case_and_whitespace() {
        let a = "- Improved build   time by 20% https://github.com/org/repo/pull/5";
        let b = "- improved build time by 20%";
        assert_eq!(normalized_key(a), normalized_key(b));
    }

    #[test]
    fn key_differs_on_content() {
        assert_ne!(
            normalized_key("- Improved build time by 20%"),
            normalized_key("- Improved build time by 25%")
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let mut seen = SeenEntries::new();
        assert!(seen.insert("- Led the migration https://github.com/a/b/pull/1"));
        assert!(!seen.insert("- Led the  migration https://github.com/a/b/pull/2"));
        assert!(!seen.insert("- LED THE MIGRATION"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn fresh_set_is_empty() {
        assert!(SeenEntries::new().is_empty());
    }
}
