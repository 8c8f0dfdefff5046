//! Domain error types

use thiserror::Error;

/// Domain-rule violations surfaced by the use-case layer.
///
/// These are the only two failure kinds a caller is expected to handle;
/// storage-layer failures are a separate category and never map into them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The entity requested by id or slug does not exist.
    #[error("Resource not found")]
    ResourceNotFound,

    /// The acting author is not allowed to perform the requested mutation.
    #[error("Not allowed")]
    NotAllowed,
}

impl DomainError {
    /// Check if this error is a missing-resource failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::ResourceNotFound)
    }

    /// Check if this error is an authorization failure
    pub fn is_not_allowed(&self) -> bool {
        matches!(self, DomainError::NotAllowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::ResourceNotFound.to_string(), "Resource not found");
        assert_eq!(DomainError::NotAllowed.to_string(), "Not allowed");
    }

    #[test]
    fn test_kind_checks() {
        assert!(DomainError::ResourceNotFound.is_not_found());
        assert!(!DomainError::ResourceNotFound.is_not_allowed());
        assert!(DomainError::NotAllowed.is_not_allowed());
        assert!(!DomainError::NotAllowed.is_not_found());
    }
}
