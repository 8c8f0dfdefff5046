//! Port definitions (interfaces for external adapters)
//!
//! Ports define the persistence contracts that repository adapters must
//! implement. The use-case services consume these and nothing else.

pub mod answer_repository;
pub mod question_attachment_repository;
pub mod question_repository;
pub mod repository;
