use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /todos/{id} handler - Delete a todo
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id of the todo to delete")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "No todo with this id"),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.todo_service.delete_todo(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
