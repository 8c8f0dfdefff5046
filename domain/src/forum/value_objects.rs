//! Forum value objects.

use serde::{Deserialize, Serialize};

/// URL-safe token derived from free text (Value Object).
///
/// A slug is the secondary lookup key for a question. It is derived from the
/// title once at creation time and is not recomputed when the title changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Wraps an already-normalized slug token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derives a slug from free text.
    ///
    /// Lowercases, trims, collapses runs of whitespace and punctuation into a
    /// single hyphen and drops every character outside `[a-z0-9-]`. The
    /// derivation is deterministic and idempotent: feeding a slug back in
    /// returns it unchanged.
    pub fn from_text(text: &str) -> Self {
        let mut normalized = String::with_capacity(text.len());
        let mut pending_separator = false;

        for c in text.trim().chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() {
                if pending_separator && !normalized.is_empty() {
                    normalized.push('-');
                }
                pending_separator = false;
                normalized.push(c);
            } else {
                pending_separator = true;
            }
        }

        Self(normalized)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_normalizes() {
        let slug = Slug::from_text("An example question");
        assert_eq!(slug.as_str(), "an-example-question");
    }

    #[test]
    fn test_from_text_collapses_punctuation_runs() {
        assert_eq!(
            Slug::from_text("What is --- a slug?!").as_str(),
            "what-is-a-slug"
        );
    }

    #[test]
    fn test_from_text_trims_edges() {
        assert_eq!(Slug::from_text("  padded title  ").as_str(), "padded-title");
        assert_eq!(Slug::from_text("?leading and trailing!").as_str(), "leading-and-trailing");
    }

    #[test]
    fn test_from_text_is_case_insensitive() {
        assert_eq!(Slug::from_text("Mixed CASE Title"), Slug::from_text("mixed case title"));
    }

    #[test]
    fn test_from_text_is_idempotent() {
        let once = Slug::from_text("Idempotent: a Slug!");
        let twice = Slug::from_text(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equality_is_normalized_text_equality() {
        assert_eq!(Slug::from_text("Some Title"), Slug::new("some-title"));
    }
}
