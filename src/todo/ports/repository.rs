//! Repository port for todo persistence, lookup, and soft-deletion.

use crate::todo::domain::{Todo, TodoDraft, TodoId, TodoPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Soft-deleted records are invisible to `list` and `get_or_fail` and are
/// never returned from any operation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Builds an in-memory entity from client-settable fields, assigning
    /// the identifier and timestamps. Nothing is written to storage.
    fn instantiate(&self, draft: TodoDraft) -> Todo;

    /// Returns an in-memory entity combining stored values with the
    /// overriding patch fields. Nothing is written to storage.
    fn merge(&self, existing: &Todo, patch: &TodoPatch) -> Todo;

    /// Returns all records that have not been soft-deleted, in unspecified
    /// order.
    async fn list(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no record has the
    /// identifier or the record has been soft-deleted.
    async fn get_or_fail(&self, id: TodoId) -> TodoRepositoryResult<Todo>;

    /// Writes the entity to storage and returns the stored form. Persisting
    /// an already-stored record bumps its `updated_at` timestamp.
    async fn persist(&self, todo: &Todo) -> TodoRepositoryResult<Todo>;

    /// Marks the record soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no active record has
    /// the identifier.
    async fn soft_delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The record was not found or has been soft-deleted.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
