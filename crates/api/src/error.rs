//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::OrderError;
use till::TillError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Till operation error.
    Till(TillError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Till(err) => till_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn till_error_to_response(err: TillError) -> (StatusCode, String) {
    match &err {
        TillError::ItemNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        TillError::Order(OrderError::EmptyOrder) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        TillError::Receipt(_) => {
            tracing::error!(error = %err, "receipt renderer failed");
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}

impl From<TillError> for ApiError {
    fn from(err: TillError) -> Self {
        ApiError::Till(err)
    }
}
