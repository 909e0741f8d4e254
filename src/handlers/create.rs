use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoRequest};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /todos handler - Create a todo
///
/// Any `id` in the body is ignored; the stored todo gets a server-assigned id.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body = TodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Blank or missing text, or missing done", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;
    let todo = Todo::from(request.validate()?);

    let created = state.todo_service.create_todo(todo).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
