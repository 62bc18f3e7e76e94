//! Login / logout handlers
//!
//! `POST /authentication` trades credentials for the caller's temporary
//! token; `DELETE /authentication/{key}` revokes the caller's own token.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{LoginRequest, TokenResponse};
use crate::application::identity::IdentityService;
use crate::domain::user::User;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    post,
    path = "/authentication",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = TokenResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state
        .identity
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(TokenResponse { token: token.key }))
}

#[utoipa::path(
    delete,
    path = "/authentication/{key}",
    tag = "Authentication",
    security(("token_auth" = [])),
    params(("key" = String, Path, description = "Temporary token key")),
    responses(
        (status = 204, description = "Token revoked"),
        (status = 404, description = "Not the caller's token")
    )
)]
pub async fn logout(
    State(state): State<AuthHandlerState>,
    Extension(actor): Extension<User>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    state.identity.logout(&actor, &key).await?;
    Ok(StatusCode::NO_CONTENT)
}
