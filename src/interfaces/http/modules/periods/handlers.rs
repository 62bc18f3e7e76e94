//! Period handlers — overlap checks run in the booking service

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{PeriodDto, PeriodRequest};
use crate::application::booking::BookingService;
use crate::application::policy::{allows, base_role, Action, Resource};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::interfaces::http::common::{ApiError, ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct PeriodHandlerState {
    pub booking: Arc<BookingService>,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn staff_only(actor: &User, action: Action) -> ApiResult<()> {
    if allows(base_role(actor), action, Resource::Periods) {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}

#[utoipa::path(
    get,
    path = "/periods",
    tag = "Periods",
    responses(
        (status = 200, description = "All periods", body = [PeriodDto])
    )
)]
pub async fn list_periods(
    State(state): State<PeriodHandlerState>,
) -> ApiResult<Json<Vec<PeriodDto>>> {
    let periods = state.repos.workplaces().list_periods().await?;
    Ok(Json(periods.into_iter().map(PeriodDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/periods/{id}",
    tag = "Periods",
    params(("id" = i32, Path, description = "Period id")),
    responses(
        (status = 200, description = "One period", body = PeriodDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_period(
    State(state): State<PeriodHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<PeriodDto>> {
    let period = state
        .repos
        .workplaces()
        .find_period(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Period"))?;
    Ok(Json(PeriodDto::from(period)))
}

#[utoipa::path(
    post,
    path = "/periods",
    tag = "Periods",
    security(("token_auth" = [])),
    request_body = PeriodRequest,
    responses(
        (status = 201, description = "Period created", body = PeriodDto),
        (status = 400, description = "Invalid window or overlap"),
        (status = 403, description = "Staff only")
    )
)]
pub async fn create_period(
    State(state): State<PeriodHandlerState>,
    Extension(actor): Extension<User>,
    ValidatedJson(request): ValidatedJson<PeriodRequest>,
) -> ApiResult<(StatusCode, Json<PeriodDto>)> {
    staff_only(&actor, Action::Create)?;
    let period = state.booking.create_period(request.into_period(0)).await?;
    Ok((StatusCode::CREATED, Json(PeriodDto::from(period))))
}

#[utoipa::path(
    put,
    path = "/periods/{id}",
    tag = "Periods",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Period id")),
    request_body = PeriodRequest,
    responses(
        (status = 200, description = "Period updated", body = PeriodDto),
        (status = 400, description = "Invalid window or overlap"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_period(
    State(state): State<PeriodHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PeriodRequest>,
) -> ApiResult<Json<PeriodDto>> {
    staff_only(&actor, Action::Update)?;
    state
        .repos
        .workplaces()
        .find_period(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Period"))?;
    let period = state.booking.update_period(request.into_period(id)).await?;
    Ok(Json(PeriodDto::from(period)))
}
