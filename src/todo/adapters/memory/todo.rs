//! In-memory repository for todo lifecycle storage and tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoDraft, TodoId, TodoPatch},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Soft-deleted records stay in the map with `deleted_at` set and are
/// filtered out of reads, matching the relational adapter's behaviour.
pub struct InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<HashMap<TodoId, Todo>>>,
    clock: Arc<C>,
}

impl<C> InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory repository using the given clock for
    /// timestamp management.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

#[async_trait]
impl<C> TodoRepository for InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    fn instantiate(&self, draft: TodoDraft) -> Todo {
        Todo::new(draft, &*self.clock)
    }

    fn merge(&self, existing: &Todo, patch: &TodoPatch) -> Todo {
        existing.merged(patch)
    }

    async fn list(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .filter(|todo| !todo.is_deleted())
            .cloned()
            .collect())
    }

    async fn get_or_fail(&self, id: TodoId) -> TodoRepositoryResult<Todo> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .get(&id)
            .filter(|todo| !todo.is_deleted())
            .cloned()
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    async fn persist(&self, todo: &Todo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut stored = todo.clone();
        if state.contains_key(&todo.id()) {
            stored.touch(&*self.clock);
        }
        state.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn soft_delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let todo = state
            .get_mut(&id)
            .filter(|todo| !todo.is_deleted())
            .ok_or(TodoRepositoryError::NotFound(id))?;
        todo.mark_deleted(&*self.clock);
        Ok(())
    }
}
