//! Application services for todo lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTodoRequest, TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService,
    UpdateTodoRequest,
};
