//! `PostgreSQL` adapters for todo lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoRepository, TodoPgPool};
