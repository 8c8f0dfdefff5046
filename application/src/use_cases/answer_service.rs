//! Answer lifecycle use cases.

use crate::ports::answer_repository::AnswerRepository;
use crate::use_cases::shared::ServiceError;
use forum_domain::{Answer, EntityId};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for [`AnswerService::create_answer`].
#[derive(Debug, Clone)]
pub struct CreateAnswerInput {
    /// Author of the new answer.
    pub author_id: EntityId,
    /// Question being answered. Not checked for existence here; see the
    /// service method.
    pub question_id: EntityId,
    /// Answer body.
    pub content: String,
}

impl CreateAnswerInput {
    pub fn new(author_id: EntityId, question_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            author_id,
            question_id,
            content: content.into(),
        }
    }
}

/// Input for [`AnswerService::update_answer`].
#[derive(Debug, Clone)]
pub struct EditAnswerInput {
    /// Answer to edit.
    pub answer_id: EntityId,
    /// Acting author; must match the answer's author.
    pub author_id: EntityId,
    /// Replacement body.
    pub content: String,
}

impl EditAnswerInput {
    pub fn new(answer_id: EntityId, author_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            answer_id,
            author_id,
            content: content.into(),
        }
    }
}

/// Use cases for the answer lifecycle.
///
/// Side effects are confined to the repository; mutations are authorized
/// against the answer's author after existence is confirmed.
#[derive(Clone)]
pub struct AnswerService {
    answers: Arc<dyn AnswerRepository>,
}

impl AnswerService {
    pub fn new(answers: Arc<dyn AnswerRepository>) -> Self {
        Self { answers }
    }

    /// Creates an answer and persists it.
    ///
    /// `question_id` is taken on trust: the referenced question is not
    /// checked for existence. That validation belongs to the input-validation
    /// collaborator in front of this service.
    pub async fn create_answer(&self, input: CreateAnswerInput) -> Result<Answer, ServiceError> {
        let answer = Answer::new(input.author_id, input.question_id, input.content);
        self.answers.create(&answer).await?;

        info!("Created answer {} on question {}", answer.id(), answer.question_id());
        Ok(answer)
    }

    /// Looks up an answer by identity.
    pub async fn find_by_id(&self, answer_id: &EntityId) -> Result<Answer, ServiceError> {
        self.answers
            .find_by_id(answer_id)
            .await?
            .ok_or_else(ServiceError::not_found)
    }

    /// Replaces an answer's content on behalf of its author.
    pub async fn update_answer(&self, input: EditAnswerInput) -> Result<Answer, ServiceError> {
        let mut answer = self.find_by_id(&input.answer_id).await?;

        if answer.author_id() != &input.author_id {
            return Err(ServiceError::not_allowed());
        }

        answer.edit_content(input.content);
        self.answers.save(&answer).await?;

        debug!("Updated answer {}", answer.id());
        Ok(answer)
    }

    /// Deletes an answer on behalf of its author.
    pub async fn delete_answer(
        &self,
        answer_id: &EntityId,
        author_id: &EntityId,
    ) -> Result<(), ServiceError> {
        let answer = self.find_by_id(answer_id).await?;

        if answer.author_id() != author_id {
            return Err(ServiceError::not_allowed());
        }

        self.answers.delete(&answer).await?;

        info!("Deleted answer {}", answer.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::InMemoryAnswerRepository;

    fn service() -> (AnswerService, Arc<InMemoryAnswerRepository>) {
        let repo = Arc::new(InMemoryAnswerRepository::new());
        (AnswerService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_answer_echoes_inputs() {
        let (service, repo) = service();

        let answer = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("q1"),
                "an answer",
            ))
            .await
            .unwrap();

        assert_eq!(answer.author_id().as_str(), "u1");
        assert_eq!(answer.question_id().as_str(), "q1");
        assert_eq!(answer.content(), "an answer");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_answer_generates_unique_identities() {
        let (service, _repo) = service();
        let input = CreateAnswerInput::new(EntityId::new("u1"), EntityId::new("q1"), "same");

        let first = service.create_answer(input.clone()).await.unwrap();
        let second = service.create_answer(input).await.unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_create_answer_does_not_verify_question_exists() {
        // The question reference is not resolved on creation, so answering
        // a nonexistent question succeeds. Documented behavior.
        let (service, _repo) = service();

        let result = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("no-such-question"),
                "orphan",
            ))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let (service, _repo) = service();

        let err = service.find_by_id(&EntityId::new("missing")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_answer_by_author() {
        let (service, repo) = service();
        let created = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("q1"),
                "draft",
            ))
            .await
            .unwrap();

        let updated = service
            .update_answer(EditAnswerInput::new(
                created.id().clone(),
                EntityId::new("u1"),
                "X",
            ))
            .await
            .unwrap();

        assert_eq!(updated.content(), "X");
        assert_eq!(repo.get(created.id()).unwrap().content(), "X");
    }

    #[tokio::test]
    async fn test_update_answer_by_other_author_is_not_allowed() {
        let (service, repo) = service();
        let created = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("q1"),
                "draft",
            ))
            .await
            .unwrap();

        let err = service
            .update_answer(EditAnswerInput::new(
                created.id().clone(),
                EntityId::new("u2"),
                "hijack",
            ))
            .await
            .unwrap_err();

        assert!(err.is_not_allowed());
        assert_eq!(repo.get(created.id()).unwrap().content(), "draft");
    }

    #[tokio::test]
    async fn test_update_missing_answer_is_not_found_regardless_of_actor() {
        let (service, _repo) = service();

        let err = service
            .update_answer(EditAnswerInput::new(
                EntityId::new("missing"),
                EntityId::new("anyone"),
                "content",
            ))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_answer_by_author() {
        let (service, repo) = service();
        let created = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("q1"),
                "to remove",
            ))
            .await
            .unwrap();

        service
            .delete_answer(created.id(), &EntityId::new("u1"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_answer_by_other_author_is_not_allowed() {
        let (service, repo) = service();
        let created = service
            .create_answer(CreateAnswerInput::new(
                EntityId::new("u1"),
                EntityId::new("q1"),
                "kept",
            ))
            .await
            .unwrap();

        let err = service
            .delete_answer(created.id(), &EntityId::new("u2"))
            .await
            .unwrap_err();

        assert!(err.is_not_allowed());
        assert_eq!(repo.len(), 1);
    }
}
