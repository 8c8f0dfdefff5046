//! Domain layer for forum-core
//!
//! This crate contains the forum's entities, value objects and the
//! snapshot/diff list abstraction. It has no dependencies on persistence or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Aggregates
//!
//! [`Question`] and [`Answer`] are the units of consistency. They expose
//! explicit mutation methods (`rename`, `edit_content`, `set_best_answer`,
//! ...) that refresh `updated_at`, rather than raw field access.
//!
//! ## Watched list
//!
//! A question's attachments are wrapped in a [`WatchedList`]: the list
//! remembers the snapshot it was loaded from, and after an edit reports the
//! added/removed items so the persistence layer can apply the difference.
//!
//! ## Errors
//!
//! Domain-rule violations are one of two kinds, [`DomainError::ResourceNotFound`]
//! and [`DomainError::NotAllowed`]. Storage failures are a separate category
//! owned by the application layer's ports.

pub mod core;
pub mod forum;

// Re-export commonly used types
pub use crate::core::entity_id::EntityId;
pub use crate::core::error::DomainError;
pub use crate::core::watched_list::{Identified, WatchedList};
pub use crate::forum::entities::{Answer, Question, QuestionAttachment, QuestionAttachmentList};
pub use crate::forum::value_objects::Slug;
