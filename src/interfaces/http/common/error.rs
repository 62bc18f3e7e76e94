//! HTTP error responses
//!
//! Error bodies come in three shapes, matching what API clients expect:
//!
//! - `{"detail": "message"}` for single-message errors,
//! - `{"detail": ["message", ...]}` for message lists,
//! - `{"field": ["message", ...], ...}` for field-keyed validation errors
//!   (with `non_field_errors` for cross-field ones).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// A domain error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn forbidden() -> Self {
        Self(DomainError::Forbidden)
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self(DomainError::not_found(entity))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, json!({ "detail": "Not found." }))
            }
            DomainError::Fields(errors) => {
                (StatusCode::BAD_REQUEST, json!(errors.into_inner()))
            }
            DomainError::Detail(message) => {
                (StatusCode::BAD_REQUEST, json!({ "detail": message }))
            }
            DomainError::DetailList(messages) => {
                (StatusCode::BAD_REQUEST, json!({ "detail": messages }))
            }
            DomainError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": "Authentication credentials were not provided." }),
            ),
            DomainError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "detail": "You do not have permission to perform this action." }),
            ),
            DomainError::EmailServiceDisabled => (
                StatusCode::NOT_IMPLEMENTED,
                json!({ "detail": "Email service is disabled." }),
            ),
            DomainError::Gateway { status, body } => {
                tracing::warn!("Payment gateway answered {}: {}", status, body);
                let detail = serde_json::from_str::<serde_json::Value>(&body)
                    .unwrap_or_else(|_| serde_json::Value::String(body));
                (StatusCode::BAD_GATEWAY, json!({ "detail": detail }))
            }
            DomainError::Database(message) => {
                tracing::error!("Database failure surfaced to HTTP: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "A server error occurred." }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────
