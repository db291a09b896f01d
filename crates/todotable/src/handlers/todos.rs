//! Todo API handlers. Every call is scoped to the signed-in user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use todotable_auth::CurrentUser;
use todotable_core::auth::validate_todo_fields;
use todotable_core::serde::deserialize_flag;
use todotable_core::storage::RepositoryError;
use todotable_core::todo::{Todo, TodoId, TodoListItem};

use crate::handlers::AppError;
use crate::state::AppState;

/// Body of `POST /api/todos` and `PUT /api/todos/{id}`.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    #[serde(default, alias = "isComplete", deserialize_with = "deserialize_flag")]
    pub is_complete: bool,
}

/// Body of `PATCH /api/todos/{id}/completion`.
#[derive(Debug, Deserialize)]
pub struct CompletionRequest {
    #[serde(alias = "isComplete", deserialize_with = "deserialize_flag")]
    pub is_complete: bool,
}

/// GET /api/todos
pub async fn list_todos(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<TodoListItem>>, AppError> {
    let todos = state.todos.list_todos(&user.id).await?;
    Ok(Json(todos))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<TodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    validate_todo_fields(&req.title, &req.description)?;

    let todo = state
        .todos
        .create_todo(&user.id, &req.title, &req.description, req.is_complete)
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = TodoId::parse(id)?;

    let todo = state
        .todos
        .get_todo(&user.id, &id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Todo",
            id: id.to_string(),
        })?;

    Ok(Json(todo))
}

/// PUT /api/todos/{id}
///
/// Creates the todo under the given id if it does not exist yet.
pub async fn update_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<TodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let id = TodoId::parse(id)?;
    validate_todo_fields(&req.title, &req.description)?;

    let todo = state
        .todos
        .upsert_todo(id, &user.id, &req.title, &req.description, req.is_complete)
        .await?;

    Ok(Json(todo))
}

/// PATCH /api/todos/{id}/completion
pub async fn set_todo_completion(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<CompletionRequest>,
) -> Result<Json<Todo>, AppError> {
    let id = TodoId::parse(id)?;

    let todo = state
        .todos
        .set_todo_completion(&user.id, &id, req.is_complete)
        .await?;

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = TodoId::parse(id)?;
    state.todos.delete_todo(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
