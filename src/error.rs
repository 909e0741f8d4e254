use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::ValidationFailed;

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a service operation
#[derive(Debug)]
pub enum ServiceError {
    /// No todo with this id
    NotFound(String),
    /// Repository operation failed
    Store(anyhow::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(id) => write!(f, "Todo not found: {}", id),
            ServiceError::Store(err) => write!(f, "Storage error: {:#}", err),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Store(err)
    }
}

/// Error type for API endpoints
///
/// Maps every failure a handler can see to its HTTP status. Not-found
/// responses carry no body; everything else is rendered as an
/// [`ErrorResponse`].
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed field validation
    ValidationFailed(ValidationFailed),
    /// Request body could not be read as a JSON object of the right shape
    InvalidBody(JsonRejection),
    /// Referenced todo does not exist
    NotFound(String),
    /// Storage layer failure
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::ValidationFailed(failed) => {
                let message = failed.message();
                tracing::info!("Rejected invalid todo request: {}", message);
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            ApiError::InvalidBody(rejection) => {
                tracing::info!("Rejected unreadable request body: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            ApiError::NotFound(id) => {
                tracing::info!("Todo not found with id: {}", id);
                return StatusCode::NOT_FOUND.into_response();
            }
            ApiError::Store(err) => {
                tracing::error!("Storage error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {:#}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => ApiError::NotFound(id),
            ServiceError::Store(err) => ApiError::Store(err),
        }
    }
}

impl From<ValidationFailed> for ApiError {
    fn from(failed: ValidationFailed) -> Self {
        ApiError::ValidationFailed(failed)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}
