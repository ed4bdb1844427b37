// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Covers the quiz core (scoring, validation, ledger) and the HTTP surface around it.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 400: a quiz with no questions cannot be scored
    InvalidQuiz(String),

    // 422: structurally invalid question from an untrusted source
    MalformedQuiz(String),

    // 503: the backing store rejected a read or write
    Persistence(String),

    // 502: content service answered with an error or an unreadable body
    Upstream(String),

    // 504: content service did not answer in time
    UpstreamTimeout(String),
}

impl AppError {
    /// Whether the client can retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Persistence(_) | AppError::Upstream(_) | AppError::UpstreamTimeout(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let retryable = self.is_retryable();
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidQuiz(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MalformedQuiz(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Persistence(msg) => {
                tracing::warn!("Persistence failure: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            AppError::Upstream(msg) => {
                tracing::warn!("Content service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::UpstreamTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
        };
        let body = Json(json!({
            "error": error_message,
            "retryable": retryable,
        }));

        (status, body).into_response()
    }
}

/// sqlx is only used by the key-value store, so its failures are persistence failures.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout("Content service timed out, please try again".to_string())
        } else {
            AppError::Upstream(err.to_string())
        }
    }
}
