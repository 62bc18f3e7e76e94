//! Workplace handlers — reads are public, writes staff-only

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{WorkplaceDto, WorkplaceRequest};
use crate::application::policy::{allows, base_role, Action, Resource};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::domain::workplace::Workplace;
use crate::interfaces::http::common::{ApiError, ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct WorkplaceHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

fn staff_only(actor: &User, action: Action) -> ApiResult<()> {
    if allows(base_role(actor), action, Resource::Workplaces) {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}

#[utoipa::path(
    get,
    path = "/workplaces",
    tag = "Workplaces",
    responses(
        (status = 200, description = "All workplaces", body = [WorkplaceDto])
    )
)]
pub async fn list_workplaces(
    State(state): State<WorkplaceHandlerState>,
) -> ApiResult<Json<Vec<WorkplaceDto>>> {
    let workplaces = state.repos.workplaces().list_workplaces().await?;
    Ok(Json(
        workplaces.into_iter().map(WorkplaceDto::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/workplaces/{id}",
    tag = "Workplaces",
    params(("id" = i32, Path, description = "Workplace id")),
    responses(
        (status = 200, description = "One workplace", body = WorkplaceDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_workplace(
    State(state): State<WorkplaceHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<WorkplaceDto>> {
    let workplace = state
        .repos
        .workplaces()
        .find_workplace(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workplace"))?;
    Ok(Json(WorkplaceDto::from(workplace)))
}

#[utoipa::path(
    post,
    path = "/workplaces",
    tag = "Workplaces",
    security(("token_auth" = [])),
    request_body = WorkplaceRequest,
    responses(
        (status = 201, description = "Workplace created", body = WorkplaceDto),
        (status = 403, description = "Staff only")
    )
)]
pub async fn create_workplace(
    State(state): State<WorkplaceHandlerState>,
    Extension(actor): Extension<User>,
    ValidatedJson(request): ValidatedJson<WorkplaceRequest>,
) -> ApiResult<(StatusCode, Json<WorkplaceDto>)> {
    staff_only(&actor, Action::Create)?;
    let workplace = state
        .repos
        .workplaces()
        .create_workplace(Workplace {
            id: 0,
            name: request.name,
            details: request.details,
            address_line: request.address_line,
            city: request.city,
            postal_code: request.postal_code,
            seats: request.seats,
        })
        .await?;
    state
        .repos
        .workplaces()
        .set_volunteers(workplace.id, request.volunteers)
        .await?;
    Ok((StatusCode::CREATED, Json(WorkplaceDto::from(workplace))))
}

#[utoipa::path(
    put,
    path = "/workplaces/{id}",
    tag = "Workplaces",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Workplace id")),
    request_body = WorkplaceRequest,
    responses(
        (status = 200, description = "Workplace updated", body = WorkplaceDto),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_workplace(
    State(state): State<WorkplaceHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<WorkplaceRequest>,
) -> ApiResult<Json<WorkplaceDto>> {
    staff_only(&actor, Action::Update)?;
    state
        .repos
        .workplaces()
        .find_workplace(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workplace"))?;

    let workplace = state
        .repos
        .workplaces()
        .update_workplace(Workplace {
            id,
            name: request.name,
            details: request.details,
            address_line: request.address_line,
            city: request.city,
            postal_code: request.postal_code,
            seats: request.seats,
        })
        .await?;
    state
        .repos
        .workplaces()
        .set_volunteers(id, request.volunteers)
        .await?;
    Ok(Json(WorkplaceDto::from(workplace)))
}
