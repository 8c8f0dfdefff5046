//! Shared types for use cases.
//!
//! Every service operation that can fail returns [`ServiceError`], so callers
//! handle domain-rule violations and storage failures through one uniform
//! result protocol instead of catching faults.

use crate::ports::repository::RepositoryError;
use forum_domain::DomainError;
use thiserror::Error;

/// Failure of a use-case operation.
///
/// `Domain` carries one of the two domain-rule kinds (`ResourceNotFound`,
/// `NotAllowed`); `Repository` passes a storage failure through untouched.
/// Existence is always checked before authorization, so a missing resource
/// never surfaces as `NotAllowed`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// The requested entity does not exist.
    pub fn not_found() -> Self {
        DomainError::ResourceNotFound.into()
    }

    /// The acting author may not perform this mutation.
    pub fn not_allowed() -> Self {
        DomainError::NotAllowed.into()
    }

    /// Check if this is a missing-resource failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_not_found())
    }

    /// Check if this is an authorization failure
    pub fn is_not_allowed(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_not_allowed())
    }
}
