//! Question repository port
//!
//! Defines the persistence contract for [`Question`] aggregates.

use crate::ports::repository::{PaginationParams, RepositoryError};
use async_trait::async_trait;
use forum_domain::{EntityId, Question};

/// Persistence contract for questions.
///
/// Implementations (adapters) live outside this core. `save` receives the
/// aggregate together with its attachment list and is responsible for
/// applying the list's added/removed deltas to the attachment store as part
/// of the same logical update; `create` persists the full current attachment
/// set. Durability and concurrency control across the read-decide-write
/// sequence are likewise the implementor's responsibility.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Look up a question by identity.
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Question>, RepositoryError>;

    /// Look up a question by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Question>, RepositoryError>;

    /// List questions, most recent first, one page at a time.
    async fn find_many_recent(
        &self,
        params: &PaginationParams,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Persist a newly created question.
    async fn create(&self, question: &Question) -> Result<(), RepositoryError>;

    /// Persist changes to an existing question, including attachment deltas.
    async fn save(&self, question: &Question) -> Result<(), RepositoryError>;

    /// Remove a question and everything it owns.
    async fn delete(&self, question: &Question) -> Result<(), RepositoryError>;
}
