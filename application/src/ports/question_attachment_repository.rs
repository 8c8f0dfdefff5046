//! Question attachment repository port

use crate::ports::repository::RepositoryError;
use async_trait::async_trait;
use forum_domain::{EntityId, QuestionAttachment};

/// Read access to the persisted attachments of a question.
///
/// The edit flow loads this snapshot to seed the watched list before
/// reconciling it against the caller's target set. Writes go through
/// [`QuestionRepository::save`](crate::ports::question_repository::QuestionRepository::save),
/// which applies the computed deltas.
#[async_trait]
pub trait QuestionAttachmentRepository: Send + Sync {
    /// All attachments currently bound to the given question.
    async fn find_many_by_question_id(
        &self,
        question_id: &EntityId,
    ) -> Result<Vec<QuestionAttachment>, RepositoryError>;
}
