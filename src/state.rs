use crate::service::TodoService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub todo_service: TodoService,
}
