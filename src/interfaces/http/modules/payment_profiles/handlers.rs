//! Payment profile handlers — owner-scoped, foreign profiles answer 404

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CardRequest, PaymentProfileDto, PaymentProfileRequest};
use crate::application::payments::PaymentService;
use crate::domain::user::User;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct PaymentProfileHandlerState {
    pub payments: Arc<PaymentService>,
}

#[utoipa::path(
    post,
    path = "/payment-profiles",
    tag = "PaymentProfiles",
    security(("token_auth" = [])),
    request_body = PaymentProfileRequest,
    responses(
        (status = 201, description = "Vault profile created", body = PaymentProfileDto),
        (status = 502, description = "Vault rejected the request")
    )
)]
pub async fn create_profile(
    State(state): State<PaymentProfileHandlerState>,
    Extension(actor): Extension<User>,
    ValidatedJson(request): ValidatedJson<PaymentProfileRequest>,
) -> ApiResult<(StatusCode, Json<PaymentProfileDto>)> {
    let view = state
        .payments
        .create_profile(&actor, &request.name, &request.single_use_token)
        .await?;
    Ok((StatusCode::CREATED, Json(PaymentProfileDto::from(view))))
}

#[utoipa::path(
    get,
    path = "/payment-profiles",
    tag = "PaymentProfiles",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "The caller's profiles (staff see all)",
         body = [PaymentProfileDto])
    )
)]
pub async fn list_profiles(
    State(state): State<PaymentProfileHandlerState>,
    Extension(actor): Extension<User>,
) -> ApiResult<Json<Vec<PaymentProfileDto>>> {
    let views = state.payments.profiles(&actor).await?;
    Ok(Json(views.into_iter().map(PaymentProfileDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/payment-profiles/{id}",
    tag = "PaymentProfiles",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Payment profile id")),
    responses(
        (status = 200, description = "One profile with live card data", body = PaymentProfileDto),
        (status = 404, description = "Not found or not the caller's")
    )
)]
pub async fn get_profile(
    State(state): State<PaymentProfileHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
) -> ApiResult<Json<PaymentProfileDto>> {
    let view = state.payments.profile(&actor, id).await?;
    Ok(Json(PaymentProfileDto::from(view)))
}

#[utoipa::path(
    post,
    path = "/payment-profiles/{id}/cards",
    tag = "PaymentProfiles",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Payment profile id")),
    request_body = CardRequest,
    responses(
        (status = 201, description = "Card attached; vault response body"),
        (status = 404, description = "Not found or not the caller's"),
        (status = 502, description = "Vault rejected the request")
    )
)]
pub async fn add_card(
    State(state): State<PaymentProfileHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    Json(request): Json<CardRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let body = state
        .payments
        .add_card(&actor, id, &request.single_use_token)
        .await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    put,
    path = "/payment-profiles/{id}/cards/{card_id}",
    tag = "PaymentProfiles",
    security(("token_auth" = [])),
    params(
        ("id" = i32, Path, description = "Payment profile id"),
        ("card_id" = String, Path, description = "Vault card id")
    ),
    request_body = CardRequest,
    responses(
        (status = 200, description = "Card replaced; vault response body"),
        (status = 404, description = "Not found or not the caller's"),
        (status = 502, description = "Vault rejected the request")
    )
)]
pub async fn update_card(
    State(state): State<PaymentProfileHandlerState>,
    Extension(actor): Extension<User>,
    Path((id, card_id)): Path<(i32, String)>,
    Json(request): Json<CardRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let body = state
        .payments
        .update_card(&actor, id, &card_id, &request.single_use_token)
        .await?;
    Ok(Json(body))
}
