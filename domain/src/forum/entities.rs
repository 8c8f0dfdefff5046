//! Forum aggregates.
//!
//! [`Question`] and [`Answer`] are the units of consistency and persistence.
//! Fields are mutated through explicit methods that refresh `updated_at`, so
//! invariants stay enforced at the aggregate boundary.

use crate::core::entity_id::EntityId;
use crate::core::string::truncate;
use crate::core::watched_list::{Identified, WatchedList};
use crate::forum::value_objects::Slug;
use chrono::{DateTime, Utc};

/// A question's file attachments, reconciled as a watched list.
pub type QuestionAttachmentList = WatchedList<QuestionAttachment>;

/// A forum question (Aggregate).
///
/// Owns its attachment list and an optional reference to the best answer.
/// The invariant that `best_answer_id` references an answer of *this*
/// question is enforced by the question service, not here.
#[derive(Debug, Clone)]
pub struct Question {
    id: EntityId,
    author_id: EntityId,
    title: String,
    content: String,
    slug: Slug,
    best_answer_id: Option<EntityId>,
    attachments: QuestionAttachmentList,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Creates a question with a fresh identity and a slug derived from the
    /// title.
    pub fn new(author_id: EntityId, title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        let slug = Slug::from_text(&title);
        Self {
            id: EntityId::generate(),
            author_id,
            title,
            content: content.into(),
            slug,
            best_answer_id: None,
            attachments: QuestionAttachmentList::default(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn author_id(&self) -> &EntityId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn best_answer_id(&self) -> Option<&EntityId> {
        self.best_answer_id.as_ref()
    }

    pub fn attachments(&self) -> &QuestionAttachmentList {
        &self.attachments
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the title. The slug keeps its creation-time value.
    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Replaces the body content.
    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    /// Replaces the attachment list wholesale.
    pub fn set_attachments(&mut self, attachments: QuestionAttachmentList) {
        self.attachments = attachments;
        self.touch();
    }

    /// Marks an answer as this question's best answer.
    pub fn set_best_answer(&mut self, answer_id: EntityId) {
        self.best_answer_id = Some(answer_id);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// An answer to a question (Aggregate).
///
/// Owned by its question in the domain sense but persisted independently;
/// `question_id` carries the one-to-many relationship.
#[derive(Debug, Clone)]
pub struct Answer {
    id: EntityId,
    author_id: EntityId,
    question_id: EntityId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Answer {
    /// Creates an answer with a fresh identity.
    pub fn new(author_id: EntityId, question_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            author_id,
            question_id,
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn author_id(&self) -> &EntityId {
        &self.author_id
    }

    pub fn question_id(&self) -> &EntityId {
        &self.question_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// A short, ellipsized preview of the content for listings.
    pub fn excerpt(&self) -> String {
        truncate(&self.content, 120)
    }

    /// Replaces the body content.
    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Link between a question and an externally stored file (Entity).
///
/// `attachment_id` references the stored file and never changes;
/// `question_id` is absent until the attachment is bound to a question.
#[derive(Debug, Clone)]
pub struct QuestionAttachment {
    id: EntityId,
    attachment_id: EntityId,
    question_id: Option<EntityId>,
}

impl QuestionAttachment {
    /// Creates an attachment not yet bound to a question.
    pub fn new(attachment_id: EntityId) -> Self {
        Self {
            id: EntityId::generate(),
            attachment_id,
            question_id: None,
        }
    }

    /// Creates an attachment bound to a question.
    pub fn attached(attachment_id: EntityId, question_id: EntityId) -> Self {
        Self {
            id: EntityId::generate(),
            attachment_id,
            question_id: Some(question_id),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn attachment_id(&self) -> &EntityId {
        &self.attachment_id
    }

    pub fn question_id(&self) -> Option<&EntityId> {
        self.question_id.as_ref()
    }

    /// Binds this attachment to a question.
    pub fn attach_to(&mut self, question_id: EntityId) {
        self.question_id = Some(question_id);
    }
}

impl Identified for QuestionAttachment {
    /// Attachments reconcile by the file they reference, so rebuilding the
    /// list from the same attachment ids produces no spurious deltas.
    fn identity(&self) -> &EntityId {
        &self.attachment_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_derives_slug_from_title() {
        let question = Question::new(EntityId::new("author-1"), "An Example Question", "body");
        assert_eq!(question.slug().as_str(), "an-example-question");
        assert_eq!(question.author_id().as_str(), "author-1");
        assert_eq!(question.title(), "An Example Question");
        assert_eq!(question.content(), "body");
        assert!(question.best_answer_id().is_none());
        assert!(question.attachments().is_empty());
        assert!(question.updated_at().is_none());
    }

    #[test]
    fn test_fresh_identities_are_unique() {
        let author = EntityId::new("author-1");
        let a = Question::new(author.clone(), "Same title", "same body");
        let b = Question::new(author, "Same title", "same body");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_rename_keeps_creation_slug() {
        let mut question = Question::new(EntityId::new("author-1"), "Original title", "body");
        question.rename("Completely different");
        assert_eq!(question.title(), "Completely different");
        assert_eq!(question.slug().as_str(), "original-title");
    }

    #[test]
    fn test_mutators_refresh_updated_at() {
        let mut question = Question::new(EntityId::new("author-1"), "Title", "body");
        assert!(question.updated_at().is_none());

        question.edit_content("new body");
        assert!(question.updated_at().is_some());

        let mut answer = Answer::new(EntityId::new("a"), question.id().clone(), "reply");
        assert!(answer.updated_at().is_none());
        answer.edit_content("edited reply");
        assert!(answer.updated_at().is_some());
    }

    #[test]
    fn test_set_best_answer() {
        let mut question = Question::new(EntityId::new("author-1"), "Title", "body");
        let answer = Answer::new(EntityId::new("author-2"), question.id().clone(), "reply");

        question.set_best_answer(answer.id().clone());
        assert_eq!(question.best_answer_id(), Some(answer.id()));
    }

    #[test]
    fn test_answer_excerpt_ellipsizes_long_content() {
        let long = "x".repeat(200);
        let answer = Answer::new(EntityId::new("a"), EntityId::new("q"), long);
        let excerpt = answer.excerpt();
        assert_eq!(excerpt.len(), 120);
        assert!(excerpt.ends_with("..."));

        let short = Answer::new(EntityId::new("a"), EntityId::new("q"), "short reply");
        assert_eq!(short.excerpt(), "short reply");
    }

    #[test]
    fn test_attachment_reconciles_by_referenced_file() {
        let first = QuestionAttachment::attached(EntityId::new("file-1"), EntityId::new("q-1"));
        let second = QuestionAttachment::attached(EntityId::new("file-1"), EntityId::new("q-1"));

        // Distinct rows, same reconciliation identity
        assert_ne!(first.id(), second.id());
        assert_eq!(first.identity(), second.identity());
    }

    #[test]
    fn test_attachment_binding() {
        let mut attachment = QuestionAttachment::new(EntityId::new("file-1"));
        assert!(attachment.question_id().is_none());

        attachment.attach_to(EntityId::new("q-1"));
        assert_eq!(attachment.question_id().map(EntityId::as_str), Some("q-1"));
    }
}
