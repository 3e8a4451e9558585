//! `PostgreSQL` repository implementation for todo lifecycle storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{DoneFlag, PersistedTodoData, TaskDescription, Todo, TodoDraft, TodoId, TodoPatch},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::upsert::excluded;
use mockable::Clock;
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
///
/// Soft-deleted rows keep their data with `deleted_at` set; every read
/// filters them out.
pub struct PostgresTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    pool: TodoPgPool,
    clock: Arc<C>,
}

impl<C> PostgresTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new repository from a `PostgreSQL` connection pool and a
    /// clock for timestamp management.
    #[must_use]
    pub const fn new(pool: TodoPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl<C> TodoRepository for PostgresTodoRepository<C>
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
        self.run_blocking(|connection| {
            let rows = todos::table
                .filter(todos::deleted_at.is_null())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn get_or_fail(&self, id: TodoId) -> TodoRepositoryResult<Todo> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.into_inner()))
                .filter(todos::deleted_at.is_null())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.ok_or(TodoRepositoryError::NotFound(id))
                .and_then(row_to_todo)
        })
        .await
    }

    async fn persist(&self, todo: &Todo) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(todo);
        let now = self.clock.utc();

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .on_conflict(todos::id)
                .do_update()
                .set((
                    todos::task.eq(excluded(todos::task)),
                    todos::is_done.eq(excluded(todos::is_done)),
                    todos::updated_at.eq(now),
                ))
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_todo(row)
        })
        .await
    }

    async fn soft_delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let now = self.clock.utc();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                todos::table
                    .filter(todos::id.eq(id.into_inner()))
                    .filter(todos::deleted_at.is_null()),
            )
            .set((
                todos::deleted_at.eq(Some(now)),
                todos::updated_at.eq(now),
            ))
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(todo: &Todo) -> NewTodoRow {
    NewTodoRow {
        id: todo.id().into_inner(),
        task: todo.task().as_str().to_owned(),
        is_done: todo.is_done().as_i16(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
        deleted_at: todo.deleted_at(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let task = TaskDescription::new(row.task).map_err(TodoRepositoryError::persistence)?;
    let is_done = DoneFlag::try_from(row.is_done).map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::from_uuid(row.id),
        task,
        is_done,
        created_at: row.created_at,
        updated_at: row.updated_at,
        deleted_at: row.deleted_at,
    }))
}
