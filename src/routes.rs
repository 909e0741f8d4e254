use axum::{Router, routing::{get, put}};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{create_handler, delete_handler, list_handler, update_handler};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const TODOS: &str = "/todos";
pub const TODO_ITEM: &str = "/todos/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router with permissive CORS and request tracing.
///
/// Swagger UI and the OpenAPI document are mounted only when `serve_api_docs` is set.
pub fn app(state: AppState, serve_api_docs: bool) -> Router {
    let mut router = Router::new()
        .route(TODOS, get(list_handler).post(create_handler))
        .route(TODO_ITEM, put(update_handler).delete(delete_handler))
        .with_state(state);

    if serve_api_docs {
        router = router.merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::empty_request;
    use crate::repository::InMemoryTodoRepository;
    use crate::service::TodoService;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            todo_service: TodoService::new(Arc::new(InMemoryTodoRepository::new())),
        }
    }

    #[tokio::test]
    async fn test_api_docs_disabled_by_default() {
        let response = app(state(), false)
            .oneshot(empty_request("GET", OPENAPI_JSON))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_docs_served_when_enabled() {
        let response = app(state(), true)
            .oneshot(empty_request("GET", OPENAPI_JSON))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_patch_is_not_routed() {
        let response = app(state(), false)
            .oneshot(empty_request("PATCH", "/todos/123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
