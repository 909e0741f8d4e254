use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// PUT /todos/{id} handler - Replace a todo's text and done flag
///
/// The body is validated before the id is looked up, so an invalid body
/// yields 422 even for an unknown id.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id of the todo to update")
    ),
    request_body = TodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 404, description = "No todo with this id"),
        (status = 422, description = "Blank or missing text, or missing done", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;
    let todo = Todo::from(request.validate()?);

    let updated = state.todo_service.update_todo(&id, todo).await?;

    Ok((StatusCode::OK, Json(updated)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_bytes, body_json, json_request, setup_test_app};
    use crate::repository::TodoRepository;
    use tower::ServiceExt;

    fn existing(id: &str) -> Todo {
        Todo {
            id: Some(id.to_string()),
            text: "Buy milk".to_string(),
            done: false,
        }
    }

    #[tokio::test]
    async fn test_update_endpoint_success() {
        let (app, repo) = setup_test_app();
        repo.save(existing("123")).await.unwrap();

        let response = app
            .oneshot(json_request("PUT", "/todos/123", r#"{"text":"Buy snacks","done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"id": "123", "text": "Buy snacks", "done": true})
        );
        assert_eq!(
            repo.find_by_id("123").await.unwrap().map(|t| t.text),
            Some("Buy snacks".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_keeps_path_id_over_body_id() {
        let (app, repo) = setup_test_app();
        repo.save(existing("123")).await.unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/todos/123",
                r#"{"id":"456","text":"Buy snacks","done":true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Todo = body_json(response).await;
        assert_eq!(updated.id.as_deref(), Some("123"));
        assert_eq!(repo.find_by_id("456").await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found() {
        let (app, repo) = setup_test_app();

        let response = app
            .oneshot(json_request("PUT", "/todos/999", r#"{"text":"Buy snacks","done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_text_without_touching_store() {
        let (app, repo) = setup_test_app();
        repo.save(existing("123")).await.unwrap();

        let response = app
            .oneshot(json_request("PUT", "/todos/123", r#"{"text":"  ","done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error, "text must not be blank");
        assert_eq!(repo.find_by_id("123").await.unwrap(), Some(existing("123")));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (app, _repo) = setup_test_app();

        let response = app
            .oneshot(json_request("PUT", "/todos/999", r#"{"text":"Buy snacks"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
