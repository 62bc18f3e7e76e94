//! Authentication middleware for Axum
//!
//! Credentials are opaque temporary tokens sent as `Authorization:
//! Token <key>`. The middleware resolves the key to an active user and
//! stores the [`User`] as a request extension for the handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::identity::IdentityService;
use crate::domain::user::User;

const TOKEN_SCHEME: &str = "Token ";

/// Authentication state shared by all protected routes
#[derive(Clone)]
pub struct AuthState {
    pub identity: Arc<IdentityService>,
}

fn extract_key(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix(TOKEN_SCHEME).map(str::trim)
}

fn credentials_missing() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Authentication credentials were not provided." })),
    )
        .into_response()
}

fn invalid_token() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Invalid token." })),
    )
        .into_response()
}

/// Temporary-token authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return credentials_missing();
    };

    // A header with a foreign scheme counts as no credentials at all.
    let Some(key) = extract_key(&auth_header) else {
        return credentials_missing();
    };

    match auth_state.identity.authenticate(key).await {
        Ok(user) => {
            request.extensions_mut().insert::<User>(user);
            next.run(request).await
        }
        Err(_) => invalid_token(),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_extraction_requires_the_token_scheme() {
        assert_eq!(extract_key("Token abc123"), Some("abc123"));
        assert_eq!(extract_key("Bearer abc123"), None);
        assert_eq!(extract_key("abc123"), None);
    }
}
