use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{Todo, TodoRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-service API",
        version = "1.0.0",
        description = "A minimal CRUD service for todo items"
    ),
    paths(
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Todo,
            TodoRequest,
            ErrorResponse
        )
    ),
    tags(
        (name = "todos", description = "Todo operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_todo_routes() {
        let doc = ApiDoc::openapi();

        let todos = doc.paths.paths.get("/todos").expect("/todos documented");
        assert!(todos.get.is_some());
        assert!(todos.post.is_some());

        let item = doc.paths.paths.get("/todos/{id}").expect("/todos/{id} documented");
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(item.patch.is_none());
    }

    #[test]
    fn test_openapi_has_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components present").schemas;

        for name in ["Todo", "TodoRequest", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
