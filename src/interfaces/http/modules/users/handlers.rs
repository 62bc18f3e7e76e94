//! User account handlers
//!
//! Non-staff callers only ever see their own account; requests for anyone
//! else's answer 403, missing ids included, so account ids are not
//! probeable. `me` is accepted as an alias for the caller's own id.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Extension, Json,
};
use serde_json::json;

use super::dto::{
    ActivateRequest, ActivationResponse, ChangePasswordRequest, RegisterRequest,
    ResetPasswordRequest, UpdateUserRequest, UserDto, UserResponse,
};
use crate::application::identity::{IdentityService, NewUser};
use crate::application::policy::{allows, base_role, Action, Resource};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::interfaces::http::common::{
    csv, ApiError, ApiResult, PaginatedResponse, PaginationParams, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub identity: Arc<IdentityService>,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Resolve a path id (or the `me` alias) to a user the caller may touch.
/// Non-staff callers get 403 for any id but their own, existing or not.
async fn resolve_target(
    state: &UserHandlerState,
    actor: &User,
    id: &str,
) -> ApiResult<User> {
    if id == "me" || id == actor.id {
        return Ok(actor.clone());
    }
    if !actor.is_staff {
        return Err(ApiError::forbidden());
    }
    state
        .repos
        .users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let outcome = state
        .identity
        .register(NewUser {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            other_phone: request.other_phone,
            birthdate: request.birthdate,
            gender: request.gender,
            university_id: request.university,
            academic_level_id: request.academic_level,
            academic_field_id: request.academic_field,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(outcome.user),
            detail: outcome.warning,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("token_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "User list", body = PaginatedResponse<UserDto>),
        (status = 403, description = "Staff only")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Extension(actor): Extension<User>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<UserDto>>> {
    if !allows(base_role(&actor), Action::List, Resource::Users) {
        return Err(ApiError::forbidden());
    }
    let (users, total) = state
        .repos
        .users()
        .list(params.page, params.page_size)
        .await?;
    let items: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
    Ok(Json(PaginatedResponse::new(
        items,
        total,
        params.page,
        params.page_size,
    )))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    security(("token_auth" = [])),
    params(("id" = String, Path, description = "User id, or `me`")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 403, description = "Not the caller's account"),
        (status = 404, description = "Not found (staff lookups only)")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let target = resolve_target(&state, &actor, &id).await?;
    Ok(Json(UserDto::from(target)))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    security(("token_auth" = [])),
    params(("id" = String, Path, description = "User id, or `me`")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 403, description = "Admin-only field, or not the caller's account"),
        (status = 404, description = "Not found (staff lookups only)")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let mut target = resolve_target(&state, &actor, &id).await?;

    if !actor.is_staff && (request.tickets.is_some() || request.membership_end.is_some()) {
        return Err(ApiError::forbidden());
    }

    // The email only switches once the confirmation token is consumed.
    let mut detail = None;
    if let Some(new_email) = &request.email {
        if *new_email != target.email {
            detail = state
                .identity
                .request_email_change(&target, new_email, request.university)
                .await?;
        }
    } else if let Some(university) = request.university {
        target.university_id = Some(university);
    }

    if let Some(v) = request.first_name {
        target.first_name = v;
    }
    if let Some(v) = request.last_name {
        target.last_name = v;
    }
    if let Some(v) = request.phone {
        target.phone = Some(v);
    }
    if let Some(v) = request.other_phone {
        target.other_phone = Some(v);
    }
    if let Some(v) = request.birthdate {
        target.birthdate = Some(v);
    }
    if let Some(v) = request.gender {
        target.gender = Some(v);
    }
    if let Some(v) = request.academic_level {
        target.academic_level_id = Some(v);
    }
    if let Some(v) = request.academic_field {
        target.academic_field_id = Some(v);
    }
    if let Some(v) = request.membership_end {
        target.membership_end = Some(v);
    }
    if let Some(v) = request.tickets {
        target.tickets = v;
    }

    let updated = state.repos.users().update(target).await?;
    Ok(Json(UserResponse {
        user: UserDto::from(updated),
        detail,
    }))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("token_auth" = [])),
    params(("id" = String, Path, description = "User id, or `me`")),
    responses(
        (status = 204, description = "Account deactivated (idempotent)"),
        (status = 403, description = "Not the caller's account")
    )
)]
pub async fn deactivate_user(
    State(state): State<UserHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    // A staff delete of an unknown id still answers 204.
    let target = if actor.is_staff && id != "me" && id != actor.id {
        state.repos.users().find_by_id(&id).await?
    } else {
        Some(resolve_target(&state, &actor, &id).await?)
    };
    if let Some(mut target) = target {
        target.deactivate();
        state.repos.users().update(target).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/users/export",
    tag = "Users",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "CSV attachment of every account"),
        (status = 403, description = "Staff only")
    )
)]
pub async fn export_users(
    State(state): State<UserHandlerState>,
    Extension(actor): Extension<User>,
) -> ApiResult<Response> {
    if !allows(base_role(&actor), Action::Export, Resource::Users) {
        return Err(ApiError::forbidden());
    }

    let users = state.repos.users().all_ordered().await?;
    let mut rows = vec![vec![
        "id".to_string(),
        "email".to_string(),
        "first_name".to_string(),
        "last_name".to_string(),
        "phone".to_string(),
        "birthdate".to_string(),
        "gender".to_string(),
        "membership_end".to_string(),
        "tickets".to_string(),
        "is_active".to_string(),
        "date_joined".to_string(),
    ]];
    for user in users {
        rows.push(vec![
            user.id,
            user.email,
            user.first_name,
            user.last_name,
            user.phone.unwrap_or_default(),
            user.birthdate.map(|d| d.to_string()).unwrap_or_default(),
            user.gender.unwrap_or_default(),
            user.membership_end
                .map(|d| d.to_string())
                .unwrap_or_default(),
            user.tickets.to_string(),
            user.is_active.to_string(),
            user.date_joined.to_rfc3339(),
        ]);
    }
    Ok(csv::attachment("User", &rows))
}

#[utoipa::path(
    post,
    path = "/users/activate",
    tag = "Users",
    request_body = ActivateRequest,
    responses(
        (status = 200, description = "Account activated", body = ActivationResponse),
        (status = 400, description = "Invalid token")
    )
)]
pub async fn activate(
    State(state): State<UserHandlerState>,
    Json(request): Json<ActivateRequest>,
) -> ApiResult<Json<ActivationResponse>> {
    let outcome = state.identity.activate(&request.activation_token).await?;
    Ok(Json(ActivationResponse {
        token: outcome.token.key,
        user: UserDto::from(outcome.user),
    }))
}

#[utoipa::path(
    post,
    path = "/reset-password",
    tag = "Users",
    request_body = ResetPasswordRequest,
    responses(
        (status = 201, description = "Reset token issued and emailed"),
        (status = 404, description = "Unknown email"),
        (status = 501, description = "Email service disabled")
    )
)]
pub async fn reset_password(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let body = match state.identity.request_password_reset(&request.email).await? {
        Some(warning) => json!({ "detail": warning }),
        None => json!({}),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    post,
    path = "/change-password",
    tag = "Users",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = UserDto),
        (status = 400, description = "Invalid token or weak password")
    )
)]
pub async fn change_password(
    State(state): State<UserHandlerState>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .identity
        .change_password(&request.token, &request.new_password)
        .await?;
    Ok(Json(UserDto::from(user)))
}
