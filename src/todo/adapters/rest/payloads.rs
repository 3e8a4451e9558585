//! Wire payloads for the todo HTTP API.

use crate::todo::domain::{DoneFlag, Todo, TodoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON body accepted by the create endpoint. Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTodoBody {
    /// Task description text.
    pub task: String,
    /// Completion flag, 0 or 1.
    pub is_done: DoneFlag,
}

/// JSON body accepted by the update endpoint. Absent fields keep the
/// stored value; unknown fields are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTodoBody {
    /// Task description text to overwrite.
    pub task: Option<String>,
    /// Completion flag to overwrite.
    pub is_done: Option<DoneFlag>,
}

/// JSON representation of a todo returned by the API. The soft-deletion
/// timestamp is never serialised.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo identifier.
    pub id: TodoId,
    /// Task description text.
    pub task: String,
    /// Completion flag, 0 or 1.
    pub is_done: DoneFlag,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id(),
            task: todo.task().as_str().to_owned(),
            is_done: todo.is_done(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
        }
    }
}
