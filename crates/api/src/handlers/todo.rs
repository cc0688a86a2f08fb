//! Handlers for the `/todos` resource.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::todo::{parse_id_param, ENTITY, INVALID_ID_PARAM, NO_ID_PROVIDED};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodoRequest, DeleteTodoRequest, Todo, UpdateTodoRequest};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{is_blank_body, parse_json, JsonBody};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters accepted by `DELETE /todos`.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// GET /todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool)
        .await
        .map_err(AppError::database("Failed to fetch todos"))?;
    Ok(Json(todos))
}

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let input = input.validate()?;
    let todo = TodoRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::database("Failed to create todo"))?;
    tracing::info!(todo_id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos
pub async fn update(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateTodoRequest>,
) -> AppResult<Json<Todo>> {
    let (id, input) = input.validate()?;
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::database("Failed to update todo"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(todo_id = id, completed = todo.completed, "Todo updated");
    Ok(Json(todo))
}

/// DELETE /todos?id={id}, or DELETE /todos with a `{"id": ...}` body.
///
/// The query parameter wins when present; the body is only read otherwise.
pub async fn delete(
    State(state): State<AppState>,
    params: Result<Query<DeleteParams>, QueryRejection>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let Query(params) =
        params.map_err(|_| AppError::Core(CoreError::Validation(INVALID_ID_PARAM.into())))?;

    let id = match parse_id_param(params.id.as_deref())? {
        Some(id) => id,
        None => id_from_body(&body)?,
    };

    let deleted = TodoRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::database("Failed to delete todo"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(todo_id = id, "Todo deleted");
    Ok(Json(MessageResponse {
        message: "Todo deleted successfully",
    }))
}

/// Resolve the target id from a delete request body.
fn id_from_body(body: &[u8]) -> AppResult<DbId> {
    if is_blank_body(body) {
        return Err(AppError::Core(CoreError::Validation(NO_ID_PROVIDED.into())));
    }
    let request: DeleteTodoRequest = parse_json(body)?;
    Ok(request.validate()?)
}
