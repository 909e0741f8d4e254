use serde::{Deserialize, Serialize};

/// A stored todo item
///
/// `id` is `None` only for an entity that has not been saved yet; the
/// repository assigns it on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Option<String>,
    #[schema(example = "Buy milk")]
    pub text: String,
    pub done: bool,
}

/// Request body for create and update
///
/// Both fields are optional at the wire level so that validation can report
/// every missing field at once. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct TodoRequest {
    #[schema(example = "Buy milk")]
    pub text: Option<String>,
    pub done: Option<bool>,
}

/// A request body that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTodoRequest {
    pub text: String,
    pub done: bool,
}

impl From<ValidTodoRequest> for Todo {
    fn from(request: ValidTodoRequest) -> Self {
        Todo {
            id: None,
            text: request.text,
            done: request.done,
        }
    }
}
