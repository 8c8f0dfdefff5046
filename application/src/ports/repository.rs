//! Shared repository port types.

use thiserror::Error;

/// Errors that can occur at the storage boundary.
///
/// These are infrastructure failures, distinct from the domain's
/// `ResourceNotFound`/`NotAllowed` kinds. The use-case layer propagates them
/// unmodified; retry policy, if any, belongs to the repository implementation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Pagination window for listing queries.
///
/// Page numbering and page size are the repository's contract; the use-case
/// layer passes the page through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
}

impl PaginationParams {
    pub fn new(page: u32) -> Self {
        Self { page }
    }
}
