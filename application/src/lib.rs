//! Application layer for forum-core
//!
//! This crate contains the forum's use-case services and the repository
//! ports they consume. It depends only on the domain layer.
//!
//! Control flow of every use case: load the aggregate through a repository
//! port, check existence before authorship, mutate through the aggregate's
//! own methods, persist with a single write, and return a `Result`. Storage
//! failures pass through as [`RepositoryError`]; domain-rule violations
//! surface as the two kinds wrapped by [`ServiceError`].

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_repository::AnswerRepository,
    question_attachment_repository::QuestionAttachmentRepository,
    question_repository::QuestionRepository,
    repository::{PaginationParams, RepositoryError},
};
pub use use_cases::answer_service::{AnswerService, CreateAnswerInput, EditAnswerInput};
pub use use_cases::question_service::{CreateQuestionInput, EditQuestionInput, QuestionService};
pub use use_cases::shared::ServiceError;
