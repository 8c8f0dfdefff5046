//! Answer repository port

use crate::ports::repository::RepositoryError;
use async_trait::async_trait;
use forum_domain::{Answer, EntityId};

/// Persistence contract for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Look up an answer by identity.
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Answer>, RepositoryError>;

    /// Persist a newly created answer.
    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError>;

    /// Persist changes to an existing answer.
    async fn save(&self, answer: &Answer) -> Result<(), RepositoryError>;

    /// Remove an answer.
    async fn delete(&self, answer: &Answer) -> Result<(), RepositoryError>;
}
