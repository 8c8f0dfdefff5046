//! In-memory repository fakes shared by the use-case tests.
//!
//! Plain `Mutex`-guarded vectors, no framework. The question fake owns a
//! handle to the attachment fake so `create`/`save`/`delete` can honor the
//! persistence-boundary contract: `save` applies the aggregate's
//! attachment-list deltas to the attachment store and records each effective
//! application for assertions.

use crate::ports::answer_repository::AnswerRepository;
use crate::ports::question_attachment_repository::QuestionAttachmentRepository;
use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::{PaginationParams, RepositoryError};
use async_trait::async_trait;
use forum_domain::{Answer, EntityId, Question, QuestionAttachment};
use std::sync::{Arc, Mutex};

pub(crate) const QUESTIONS_PER_PAGE: usize = 20;

pub(crate) struct InMemoryAnswerRepository {
    answers: Mutex<Vec<Answer>>,
}

impl InMemoryAnswerRepository {
    pub(crate) fn new() -> Self {
        Self {
            answers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    pub(crate) fn get(&self, id: &EntityId) -> Option<Answer> {
        self.answers.lock().unwrap().iter().find(|a| a.id() == id).cloned()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Answer>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn create(&self, answer: &Answer) -> Result<(), RepositoryError> {
        self.answers.lock().unwrap().push(answer.clone());
        Ok(())
    }

    async fn save(&self, answer: &Answer) -> Result<(), RepositoryError> {
        let mut answers = self.answers.lock().unwrap();
        if let Some(stored) = answers.iter_mut().find(|a| a.id() == answer.id()) {
            *stored = answer.clone();
        }
        Ok(())
    }

    async fn delete(&self, answer: &Answer) -> Result<(), RepositoryError> {
        self.answers.lock().unwrap().retain(|a| a.id() != answer.id());
        Ok(())
    }
}

pub(crate) struct InMemoryQuestionAttachmentRepository {
    attachments: Mutex<Vec<QuestionAttachment>>,
}

impl InMemoryQuestionAttachmentRepository {
    pub(crate) fn new() -> Self {
        Self {
            attachments: Mutex::new(Vec::new()),
        }
    }

    /// Attachment-id tokens currently stored for a question, in store order.
    pub(crate) fn file_ids_for(&self, question_id: &EntityId) -> Vec<String> {
        self.attachments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.question_id() == Some(question_id))
            .map(|a| a.attachment_id().to_string())
            .collect()
    }
}

#[async_trait]
impl QuestionAttachmentRepository for InMemoryQuestionAttachmentRepository {
    async fn find_many_by_question_id(
        &self,
        question_id: &EntityId,
    ) -> Result<Vec<QuestionAttachment>, RepositoryError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.question_id() == Some(question_id))
            .cloned()
            .collect())
    }
}

/// One effective delta application observed during a `save`.
#[derive(Debug, Clone)]
pub(crate) struct AppliedDelta {
    pub(crate) added: Vec<EntityId>,
    pub(crate) removed: Vec<EntityId>,
}

pub(crate) struct InMemoryQuestionRepository {
    questions: Mutex<Vec<Question>>,
    attachments: Arc<InMemoryQuestionAttachmentRepository>,
    deltas: Mutex<Vec<AppliedDelta>>,
}

impl InMemoryQuestionRepository {
    pub(crate) fn new(attachments: Arc<InMemoryQuestionAttachmentRepository>) -> Self {
        Self {
            questions: Mutex::new(Vec::new()),
            attachments,
            deltas: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    pub(crate) fn get(&self, id: &EntityId) -> Option<Question> {
        self.questions.lock().unwrap().iter().find(|q| q.id() == id).cloned()
    }

    /// Every non-empty delta a `save` call applied, in order.
    pub(crate) fn applied_deltas(&self) -> Vec<AppliedDelta> {
        self.deltas.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Question>, RepositoryError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.slug().as_str() == slug)
            .cloned())
    }

    async fn find_many_recent(
        &self,
        params: &PaginationParams,
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let start = (params.page.max(1) as usize - 1) * QUESTIONS_PER_PAGE;
        Ok(questions.into_iter().skip(start).take(QUESTIONS_PER_PAGE).collect())
    }

    async fn create(&self, question: &Question) -> Result<(), RepositoryError> {
        self.questions.lock().unwrap().push(question.clone());
        // A new question persists its full current attachment set
        let mut store = self.attachments.attachments.lock().unwrap();
        store.extend(question.attachments().items().iter().cloned());
        Ok(())
    }

    async fn save(&self, question: &Question) -> Result<(), RepositoryError> {
        {
            let mut questions = self.questions.lock().unwrap();
            if let Some(stored) = questions.iter_mut().find(|q| q.id() == question.id()) {
                *stored = question.clone();
            }
        }

        // Apply only effective changes, so replaying a stale delta (a saved
        // aggregate still reports its last transition) cannot corrupt the
        // store or the recorded applications.
        let mut store = self.attachments.attachments.lock().unwrap();
        let bound = |store: &[QuestionAttachment], file: &EntityId| {
            store
                .iter()
                .any(|a| a.question_id() == Some(question.id()) && a.attachment_id() == file)
        };

        let removed: Vec<EntityId> = question
            .attachments()
            .removed_items()
            .iter()
            .filter(|gone| bound(&store, gone.attachment_id()))
            .map(|gone| gone.attachment_id().clone())
            .collect();
        store.retain(|a| {
            !(a.question_id() == Some(question.id()) && removed.contains(a.attachment_id()))
        });

        let mut added = Vec::new();
        for item in question.attachments().new_items() {
            if !bound(&store, item.attachment_id()) {
                added.push(item.attachment_id().clone());
                store.push(item);
            }
        }

        if !added.is_empty() || !removed.is_empty() {
            self.deltas.lock().unwrap().push(AppliedDelta { added, removed });
        }
        Ok(())
    }

    async fn delete(&self, question: &Question) -> Result<(), RepositoryError> {
        self.questions.lock().unwrap().retain(|q| q.id() != question.id());
        self.attachments
            .attachments
            .lock()
            .unwrap()
            .retain(|a| a.question_id() != Some(question.id()));
        Ok(())
    }
}
