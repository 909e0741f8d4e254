use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /todos handler - List all todos
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All stored todos", body = Vec<Todo>),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Todo>>), ApiError> {
    let todos = state.todo_service.list_todos().await?;

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(todos)))
}
