//! HTTP adapters exposing the todo lifecycle service as a REST API.

mod error;
mod payloads;
mod router;

pub use error::{ApiError, ErrorBody};
pub use payloads::{CreateTodoBody, TodoResponse, UpdateTodoBody};
pub use router::router;
