//! Todo aggregate root and related value objects.

use super::{DoneFlag, TaskDescription, TodoId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Client-settable fields for a todo that has not been instantiated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    task: TaskDescription,
    is_done: DoneFlag,
}

impl TodoDraft {
    /// Creates a draft from validated fields.
    #[must_use]
    pub const fn new(task: TaskDescription, is_done: DoneFlag) -> Self {
        Self { task, is_done }
    }

    /// Returns the task description.
    #[must_use]
    pub const fn task(&self) -> &TaskDescription {
        &self.task
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_done(&self) -> DoneFlag {
        self.is_done
    }
}

/// Partial overwrite of client-settable fields; absent fields keep the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    task: Option<TaskDescription>,
    is_done: Option<DoneFlag>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            task: None,
            is_done: None,
        }
    }

    /// Sets the task description to overwrite.
    #[must_use]
    pub fn with_task(mut self, task: TaskDescription) -> Self {
        self.task = Some(task);
        self
    }

    /// Sets the completion flag to overwrite.
    #[must_use]
    pub const fn with_done(mut self, is_done: DoneFlag) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// Returns the task description to overwrite, if any.
    #[must_use]
    pub const fn task(&self) -> Option<&TaskDescription> {
        self.task.as_ref()
    }

    /// Returns the completion flag to overwrite, if any.
    #[must_use]
    pub const fn is_done(&self) -> Option<DoneFlag> {
        self.is_done
    }
}

/// Todo aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    task: TaskDescription,
    is_done: DoneFlag,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted todo aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted task description.
    pub task: TaskDescription,
    /// Persisted completion flag.
    pub is_done: DoneFlag,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new active todo from a draft, assigning the identifier and
    /// timestamps. Called by repository implementations; the identifier is
    /// never reassigned afterwards.
    #[must_use]
    pub fn new(draft: TodoDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoId::new(),
            task: draft.task,
            is_done: draft.is_done,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            task: data.task,
            is_done: data.is_done,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn task(&self) -> &TaskDescription {
        &self.task
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_done(&self) -> DoneFlag {
        self.is_done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-deletion timestamp, if any.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the record has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns a copy with the patch fields applied. Identifier and
    /// timestamps are left untouched; persisting the result bumps
    /// `updated_at`.
    #[must_use]
    pub fn merged(&self, patch: &TodoPatch) -> Self {
        let mut merged = self.clone();
        if let Some(task) = patch.task() {
            merged.task = task.clone();
        }
        if let Some(is_done) = patch.is_done() {
            merged.is_done = is_done;
        }
        merged
    }

    /// Bumps `updated_at` to the current clock time. Reserved for
    /// repository implementations; the service never mutates timestamps.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    /// Marks the record soft-deleted at the current clock time. Reserved
    /// for repository implementations; the transition is one-way.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
    }
}
