// src/domain/reference.rs
use serde::{Deserialize, Serialize};

/// A user-typed card request, e.g. `Lightning Bolt` or `Lightning Bolt/LEA`.
///
/// The raw text is kept verbatim for downstream formatting; `name` and
/// `edition_hint` are the split halves around the first `/`. All matching
/// against the catalog is case-insensitive, so consumers uppercase copies at
/// the point of comparison rather than mutating these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    raw: String,
    name: String,
    edition_hint: Option<String>,
}

impl Reference {
    /// Split a raw reference on the first `/`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('/') {
            Some((name, hint)) => Self {
                raw: raw.to_string(),
                name: name.to_string(),
                edition_hint: Some(hint.to_string()),
            },
            None => Self {
                raw: raw.to_string(),
                name: raw.to_string(),
                edition_hint: None,
            },
        }
    }

    /// The original-case text as typed by the user.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Everything before the optional `/`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything after the `/`, when present.
    pub fn edition_hint(&self) -> Option<&str> {
        self.edition_hint.as_deref()
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_hint() {
        let reference = Reference::parse("Lightning Bolt");
        assert_eq!(reference.raw(), "Lightning Bolt");
        assert_eq!(reference.name(), "Lightning Bolt");
        assert_eq!(reference.edition_hint(), None);
    }

    #[test]
    fn test_parse_with_hint() {
        let reference = Reference::parse("Lightning Bolt/LEA");
        assert_eq!(reference.raw(), "Lightning Bolt/LEA");
        assert_eq!(reference.name(), "Lightning Bolt");
        assert_eq!(reference.edition_hint(), Some("LEA"));
    }

    #[test]
    fn test_parse_splits_on_first_slash_only() {
        let reference = Reference::parse("Commit/Memory/AKH");
        assert_eq!(reference.name(), "Commit");
        assert_eq!(reference.edition_hint(), Some("Memory/AKH"));
    }

    #[test]
    fn test_original_case_is_preserved() {
        let reference = Reference::parse("lightning BOLT/lea");
        assert_eq!(reference.raw(), "lightning BOLT/lea");
        assert_eq!(reference.name(), "lightning BOLT");
        assert_eq!(reference.edition_hint(), Some("lea"));
    }
}
