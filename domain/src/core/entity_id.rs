//! Entity identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a domain entity.
///
/// Wraps an opaque token. Two identifiers are equal iff their tokens are
/// equal; generated identifiers are random UUIDs and are never reused after
/// the entity they named is destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an EntityId from an existing token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for EntityId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
