//! Error types for the AgriSim API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! taxonomy is deliberately small: bad input from the client (400) and
//! unexpected internal failure (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use agrisim_environment::EnvironmentError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A missing or malformed query parameter or request body field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An unexpected internal error during computation or data generation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EnvironmentError> for ApiError {
    fn from(err: EnvironmentError) -> Self {
        // Every environment failure mode is a coordinate problem, which
        // is the caller's input.
        Self::InvalidInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
