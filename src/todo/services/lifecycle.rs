//! Service layer for todo creation, lookup, update, and soft-deletion.

use crate::todo::{
    domain::{DoneFlag, TaskDescription, Todo, TodoDomainError, TodoDraft, TodoId, TodoPatch},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    task: String,
    is_done: DoneFlag,
}

impl CreateTodoRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(task: impl Into<String>, is_done: DoneFlag) -> Self {
        Self {
            task: task.into(),
            is_done,
        }
    }
}

/// Request payload for partially updating a todo. Absent fields keep the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    task: Option<String>,
    is_done: Option<DoneFlag>,
}

impl UpdateTodoRequest {
    /// Creates an empty update request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            task: None,
            is_done: None,
        }
    }

    /// Sets the task description to overwrite.
    #[must_use]
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Sets the completion flag to overwrite.
    #[must_use]
    pub const fn with_done(mut self, is_done: DoneFlag) -> Self {
        self.is_done = Some(is_done);
        self
    }
}

/// Service-level errors for todo lifecycle operations.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// No active record exists with the given identifier.
    #[error("todo {0} not found")]
    NotFound(TodoId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo lifecycle service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// Todo lifecycle orchestration service.
///
/// Only the existence-check step of an operation is translated into
/// [`TodoLifecycleError::NotFound`]; failures from every other persistence
/// call surface unchanged.
#[derive(Clone)]
pub struct TodoLifecycleService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> TodoLifecycleService<R>
where
    R: TodoRepository,
{
    /// Creates a new todo lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Asserts that an active record exists. Every failure of this check,
    /// including persistence-layer outages, is reported as `NotFound`.
    async fn existence_check(&self, id: TodoId) -> TodoLifecycleResult<Todo> {
        self.repository
            .get_or_fail(id)
            .await
            .map_err(|_| TodoLifecycleError::NotFound(id))
    }

    /// Returns all active todos, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the listing fails.
    pub async fn find_all(&self) -> TodoLifecycleResult<Vec<Todo>> {
        Ok(self.repository.list().await?)
    }

    /// Creates and persists a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] when the task text is empty
    /// and [`TodoLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTodoRequest) -> TodoLifecycleResult<Todo> {
        let draft = TodoDraft::new(TaskDescription::new(request.task)?, request.is_done);
        let todo = self.repository.instantiate(draft);
        Ok(self.repository.persist(&todo).await?)
    }

    /// Retrieves an active todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when the existence check
    /// fails for any reason.
    pub async fn find_one_or_fail(&self, id: TodoId) -> TodoLifecycleResult<Todo> {
        self.existence_check(id).await
    }

    /// Merges the request fields into an existing todo and persists the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when the existence check
    /// fails, [`TodoLifecycleError::Domain`] when an overwriting task text
    /// is empty, and [`TodoLifecycleError::Repository`] when the subsequent
    /// persist fails.
    pub async fn update(
        &self,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoLifecycleResult<Todo> {
        let existing = self.existence_check(id).await?;

        let mut patch = TodoPatch::new();
        if let Some(task) = request.task {
            patch = patch.with_task(TaskDescription::new(task)?);
        }
        if let Some(is_done) = request.is_done {
            patch = patch.with_done(is_done);
        }

        let merged = self.repository.merge(&existing, &patch);
        Ok(self.repository.persist(&merged).await?)
    }

    /// Soft-deletes an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when the existence check
    /// fails and [`TodoLifecycleError::Repository`] when the subsequent
    /// soft-delete fails.
    pub async fn delete_by_id(&self, id: TodoId) -> TodoLifecycleResult<()> {
        self.existence_check(id).await?;
        Ok(self.repository.soft_delete(id).await?)
    }
}
