//! Forum subdomain: question/answer aggregates and their value objects.

pub mod entities;
pub mod value_objects;
