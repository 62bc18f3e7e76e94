//! Time slot handlers — every response carries `places_remaining`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{TimeSlotDto, TimeSlotRequest};
use crate::application::booking::BookingService;
use crate::application::policy::{allows, base_role, Action, Resource};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::interfaces::http::common::{ApiError, ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct TimeSlotHandlerState {
    pub booking: Arc<BookingService>,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn staff_only(actor: &User, action: Action) -> ApiResult<()> {
    if allows(base_role(actor), action, Resource::TimeSlots) {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}

#[utoipa::path(
    get,
    path = "/time_slots",
    tag = "TimeSlots",
    responses(
        (status = 200, description = "All time slots with capacity", body = [TimeSlotDto])
    )
)]
pub async fn list_time_slots(
    State(state): State<TimeSlotHandlerState>,
) -> ApiResult<Json<Vec<TimeSlotDto>>> {
    let slots = state.repos.workplaces().list_time_slots().await?;
    let mut dtos = Vec::with_capacity(slots.len());
    for slot in slots {
        let availability = state.booking.availability(slot.id).await?;
        dtos.push(TimeSlotDto::from(availability));
    }
    Ok(Json(dtos))
}

#[utoipa::path(
    get,
    path = "/time_slots/{id}",
    tag = "TimeSlots",
    params(("id" = i32, Path, description = "Time slot id")),
    responses(
        (status = 200, description = "One time slot with capacity", body = TimeSlotDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_time_slot(
    State(state): State<TimeSlotHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TimeSlotDto>> {
    let availability = state.booking.availability(id).await?;
    Ok(Json(TimeSlotDto::from(availability)))
}

#[utoipa::path(
    post,
    path = "/time_slots",
    tag = "TimeSlots",
    security(("token_auth" = [])),
    request_body = TimeSlotRequest,
    responses(
        (status = 201, description = "Time slot created", body = TimeSlotDto),
        (status = 400, description = "Invalid window"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Unknown period")
    )
)]
pub async fn create_time_slot(
    State(state): State<TimeSlotHandlerState>,
    Extension(actor): Extension<User>,
    ValidatedJson(request): ValidatedJson<TimeSlotRequest>,
) -> ApiResult<(StatusCode, Json<TimeSlotDto>)> {
    staff_only(&actor, Action::Create)?;
    let slot = state.booking.create_time_slot(request.into_slot(0)).await?;
    let availability = state.booking.availability(slot.id).await?;
    Ok((StatusCode::CREATED, Json(TimeSlotDto::from(availability))))
}

#[utoipa::path(
    put,
    path = "/time_slots/{id}",
    tag = "TimeSlots",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Time slot id")),
    request_body = TimeSlotRequest,
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlotDto),
        (status = 400, description = "Invalid window"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_time_slot(
    State(state): State<TimeSlotHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<TimeSlotRequest>,
) -> ApiResult<Json<TimeSlotDto>> {
    staff_only(&actor, Action::Update)?;
    state
        .repos
        .workplaces()
        .find_time_slot(id)
        .await?
        .ok_or_else(|| ApiError::not_found("TimeSlot"))?;
    let slot = state.booking.update_time_slot(request.into_slot(id)).await?;
    let availability = state.booking.availability(slot.id).await?;
    Ok(Json(TimeSlotDto::from(availability)))
}
