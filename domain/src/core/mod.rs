//! Core domain concepts shared across all subdomains.
//!
//! - [`entity_id::EntityId`] — opaque unique entity identity
//! - [`error::DomainError`] — domain-rule failure kinds
//! - [`watched_list::WatchedList`] — snapshot/diff tracking for owned collections

pub mod entity_id;
pub mod error;
pub mod string;
pub mod watched_list;
