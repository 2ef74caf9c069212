//! Answer normalization and matching.
//!
//! The gate on a challenge step is a pure comparison: normalize the
//! submitted text, compare it to the authored key. Normalization is
//! deliberately minimal - trim surrounding whitespace and upper-case.
//! Interior whitespace and punctuation survive untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a submitted answer for comparison.
///
/// # Example
///
/// ```rust
/// use passage::core::normalize;
///
/// assert_eq!(normalize(" mutsumi "), "MUTSUMI");
/// assert_eq!(normalize("Mutsumi!"), "MUTSUMI!");
/// assert_eq!(normalize("small lake"), "SMALL LAKE");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// The authored pass for a challenge step.
///
/// Keys are authored upper-case with no whitespace; the content audit
/// reports any key that breaks that discipline, since such a key could
/// never be matched by normalized input.
///
/// # Example
///
/// ```rust
/// use passage::core::AnswerKey;
///
/// let key = AnswerKey::new("MUTSUMI");
///
/// assert!(key.matches("MUTSUMI"));
/// assert!(key.matches(" mutsumi "));
/// assert!(!key.matches("Mutsumi!"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(String);

impl AnswerKey {
    /// Create a key from authored text, stored verbatim.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The authored text of the key.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Pure predicate: does a raw submission match this key?
    pub fn matches(&self, raw: &str) -> bool {
        normalize(raw) == self.0
    }

    /// Check the authoring discipline: non-empty, upper-case, no whitespace.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && !self.0.chars().any(char::is_whitespace)
            && self.0 == self.0.to_uppercase()
    }
}

impl From<&str> for AnswerKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AnswerKey {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  mutsumi\t"), "MUTSUMI");
        assert_eq!(normalize("MUTSUMI"), "MUTSUMI");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_keeps_interior_whitespace_and_punctuation() {
        assert_eq!(normalize(" small lake "), "SMALL LAKE");
        assert_eq!(normalize("Mutsumi!"), "MUTSUMI!");
    }

    #[test]
    fn matching_is_case_and_padding_insensitive() {
        let key = AnswerKey::new("MUTSUMI");
        assert!(key.matches("mutsumi"));
        assert!(key.matches(" MuTsUmI "));
        assert!(!key.matches("MUTSUM"));
        assert!(!key.matches("MUTSUMI!"));
    }

    #[test]
    fn matching_is_deterministic() {
        let key = AnswerKey::new("SMALLLAKE");
        let first = key.matches(" smalllake ");
        let second = key.matches(" smalllake ");
        assert_eq!(first, second);
    }

    #[test]
    fn well_formed_requires_upper_case_without_whitespace() {
        assert!(AnswerKey::new("MUTSUMI").is_well_formed());
        assert!(AnswerKey::new("SMALL-LAKE").is_well_formed());
        assert!(!AnswerKey::new("").is_well_formed());
        assert!(!AnswerKey::new("mutsumi").is_well_formed());
        assert!(!AnswerKey::new("SMALL LAKE").is_well_formed());
    }

    #[test]
    fn key_serializes_transparently() {
        let key = AnswerKey::new("MUTSUMI");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"MUTSUMI\"");

        let deserialized: AnswerKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
