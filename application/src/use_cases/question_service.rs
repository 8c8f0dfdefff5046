//! Question lifecycle use cases.
//!
//! Composes [`AnswerService`] (best-answer resolution) and the watched-list
//! reconciliation of question attachments.

use crate::ports::question_attachment_repository::QuestionAttachmentRepository;
use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::PaginationParams;
use crate::use_cases::answer_service::AnswerService;
use crate::use_cases::shared::ServiceError;
use forum_domain::{EntityId, Question, QuestionAttachment, QuestionAttachmentList};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for [`QuestionService::create_question`].
#[derive(Debug, Clone)]
pub struct CreateQuestionInput {
    /// Author of the new question.
    pub author_id: EntityId,
    /// Title; the slug is derived from it once, at creation.
    pub title: String,
    /// Question body.
    pub content: String,
    /// Files to attach, by stored-file id. May be empty.
    pub attachment_ids: Vec<EntityId>,
}

impl CreateQuestionInput {
    pub fn new(author_id: EntityId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            content: content.into(),
            attachment_ids: Vec::new(),
        }
    }

    pub fn with_attachments(mut self, attachment_ids: Vec<EntityId>) -> Self {
        self.attachment_ids = attachment_ids;
        self
    }
}

/// Input for [`QuestionService::update_question`].
///
/// `attachment_ids` is the complete target set: attachments missing from it
/// are detached, new ones are attached, the rest stay untouched.
#[derive(Debug, Clone)]
pub struct EditQuestionInput {
    /// Question to edit.
    pub question_id: EntityId,
    /// Acting author; must match the question's author.
    pub author_id: EntityId,
    /// Replacement title. The slug keeps its creation-time value.
    pub title: String,
    /// Replacement body.
    pub content: String,
    /// Target attachment set, by stored-file id.
    pub attachment_ids: Vec<EntityId>,
}

impl EditQuestionInput {
    pub fn new(
        question_id: EntityId,
        author_id: EntityId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            author_id,
            title: title.into(),
            content: content.into(),
            attachment_ids: Vec::new(),
        }
    }

    pub fn with_attachments(mut self, attachment_ids: Vec<EntityId>) -> Self {
        self.attachment_ids = attachment_ids;
        self
    }
}

/// Use cases for the question lifecycle.
///
/// Each operation loads the aggregate, checks existence before authorship,
/// mutates through the aggregate's own methods and issues at most one
/// repository write.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    answers: AnswerService,
    question_attachments: Arc<dyn QuestionAttachmentRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        answers: AnswerService,
        question_attachments: Arc<dyn QuestionAttachmentRepository>,
    ) -> Self {
        Self {
            questions,
            answers,
            question_attachments,
        }
    }

    /// Creates a question, attaching the given files to it.
    pub async fn create_question(
        &self,
        input: CreateQuestionInput,
    ) -> Result<Question, ServiceError> {
        let mut question = Question::new(input.author_id, input.title, input.content);

        if !input.attachment_ids.is_empty() {
            let attachments = input
                .attachment_ids
                .into_iter()
                .map(|attachment_id| {
                    QuestionAttachment::attached(attachment_id, question.id().clone())
                })
                .collect();
            question.set_attachments(QuestionAttachmentList::new(attachments));
        }

        self.questions.create(&question).await?;

        info!("Created question {} ({})", question.id(), question.slug());
        Ok(question)
    }

    /// Looks up a question by identity.
    pub async fn find_by_id(&self, question_id: &EntityId) -> Result<Question, ServiceError> {
        self.questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(ServiceError::not_found)
    }

    /// Looks up a question by its slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Question, ServiceError> {
        self.questions
            .find_by_slug(slug)
            .await?
            .ok_or_else(ServiceError::not_found)
    }

    /// Lists questions, most recent first. Page numbering and size are the
    /// repository's contract.
    pub async fn fetch_recent_questions(&self, page: u32) -> Result<Vec<Question>, ServiceError> {
        let questions = self
            .questions
            .find_many_recent(&PaginationParams::new(page))
            .await?;

        debug!("Fetched {} recent questions (page {})", questions.len(), page);
        Ok(questions)
    }

    /// Deletes a question on behalf of its author.
    pub async fn delete_question(
        &self,
        question_id: &EntityId,
        author_id: &EntityId,
    ) -> Result<(), ServiceError> {
        let question = self.find_by_id(question_id).await?;

        if question.author_id() != author_id {
            return Err(ServiceError::not_allowed());
        }

        self.questions.delete(&question).await?;

        info!("Deleted question {}", question.id());
        Ok(())
    }

    /// Edits a question's title, content and attachment set on behalf of its
    /// author.
    ///
    /// The persisted attachments seed a watched list which is then updated to
    /// the caller's target set; the repository receives the resulting deltas
    /// inside the single `save`.
    pub async fn update_question(&self, input: EditQuestionInput) -> Result<Question, ServiceError> {
        let mut question = self.find_by_id(&input.question_id).await?;

        if question.author_id() != &input.author_id {
            return Err(ServiceError::not_allowed());
        }

        let current = self
            .question_attachments
            .find_many_by_question_id(question.id())
            .await?;
        let mut attachments = QuestionAttachmentList::new(current);

        let target = input
            .attachment_ids
            .into_iter()
            .map(|attachment_id| QuestionAttachment::attached(attachment_id, question.id().clone()))
            .collect();
        attachments.update(target);

        question.rename(input.title);
        question.edit_content(input.content);
        question.set_attachments(attachments);

        self.questions.save(&question).await?;

        debug!("Updated question {}", question.id());
        Ok(question)
    }

    /// Marks an answer as the best answer of its question.
    ///
    /// The owning question is resolved from the answer's own reference, and
    /// the mutation is a question-owner privilege: the actor must be the
    /// question's author, not the answer's.
    pub async fn mark_best_answer(
        &self,
        answer_id: &EntityId,
        author_id: &EntityId,
    ) -> Result<Question, ServiceError> {
        let answer = self.answers.find_by_id(answer_id).await?;

        let mut question = self.find_by_id(answer.question_id()).await?;

        if question.author_id() != author_id {
            return Err(ServiceError::not_allowed());
        }

        question.set_best_answer(answer.id().clone());
        self.questions.save(&question).await?;

        info!(
            "Marked answer {} as best of question {}",
            answer.id(),
            question.id()
        );
        Ok(question)
    }
}
