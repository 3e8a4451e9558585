//! Route table and handlers for the todo HTTP API.
//!
//! Handlers stay thin: structural validation happens in the extractors,
//! everything else is delegated to [`TodoLifecycleService`].

use super::{
    error::ApiError,
    payloads::{CreateTodoBody, TodoResponse, UpdateTodoBody},
};
use crate::todo::{
    domain::TodoId,
    ports::TodoRepository,
    services::{CreateTodoRequest, TodoLifecycleService, UpdateTodoRequest},
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handler state.
type Service<R> = Arc<TodoLifecycleService<R>>;

/// Builds the `/api/v1/todos` route table over the given service.
#[must_use]
pub fn router<R>(service: Service<R>) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/api/v1/todos", get(index::<R>).post(create::<R>))
        .route(
            "/api/v1/todos/{id}",
            get(show::<R>).put(update::<R>).delete(destroy::<R>),
        )
        .with_state(service)
}

async fn index<R>(
    State(service): State<Service<R>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError>
where
    R: TodoRepository,
{
    let todos = service.find_all().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

async fn create<R>(
    State(service): State<Service<R>>,
    payload: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError>
where
    R: TodoRepository,
{
    let Json(body) = payload?;
    let todo = service
        .create(CreateTodoRequest::new(body.task, body.is_done))
        .await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn show<R>(
    State(service): State<Service<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoResponse>, ApiError>
where
    R: TodoRepository,
{
    let todo = service.find_one_or_fail(TodoId::from_uuid(id)).await?;
    Ok(Json(todo.into()))
}

async fn update<R>(
    State(service): State<Service<R>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError>
where
    R: TodoRepository,
{
    let Json(body) = payload?;
    let mut request = UpdateTodoRequest::new();
    if let Some(task) = body.task {
        request = request.with_task(task);
    }
    if let Some(is_done) = body.is_done {
        request = request.with_done(is_done);
    }

    let todo = service.update(TodoId::from_uuid(id), request).await?;
    Ok(Json(todo.into()))
}

async fn destroy<R>(
    State(service): State<Service<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    R: TodoRepository,
{
    service.delete_by_id(TodoId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
