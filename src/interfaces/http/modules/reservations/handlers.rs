//! Reservation handlers
//!
//! Booking the same slot twice answers 200 with the existing reservation
//! instead of creating a second row. The PATCH body may only carry
//! `is_present`; DELETE soft-cancels and is idempotent.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{ReservationDto, ReservationRequest};
use crate::application::booking::BookingService;
use crate::domain::user::User;
use crate::interfaces::http::common::{
    ApiResult, PaginatedResponse, PaginationParams,
};

#[derive(Clone)]
pub struct ReservationHandlerState {
    pub booking: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservations",
    security(("token_auth" = [])),
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 200, description = "Slot already booked by the caller", body = ReservationDto),
        (status = 400, description = "Overlap or slot without workplace"),
        (status = 404, description = "Unknown time slot")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationHandlerState>,
    Extension(actor): Extension<User>,
    Json(request): Json<ReservationRequest>,
) -> ApiResult<(StatusCode, Json<ReservationDto>)> {
    let (reservation, created) = state
        .booking
        .create_reservation(&actor, request.timeslot)
        .await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ReservationDto::from(reservation))))
}

#[utoipa::path(
    get,
    path = "/reservations",
    tag = "Reservations",
    security(("token_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "The caller's reservations (staff see all)",
         body = PaginatedResponse<ReservationDto>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationHandlerState>,
    Extension(actor): Extension<User>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<ReservationDto>>> {
    let (reservations, total) = state
        .booking
        .reservations_for(&actor, params.page, params.page_size)
        .await?;
    let items: Vec<ReservationDto> =
        reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(PaginatedResponse::new(
        items,
        total,
        params.page,
        params.page_size,
    )))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "Reservations",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "One reservation", body = ReservationDto),
        (status = 404, description = "Not found or not the caller's")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ReservationDto>> {
    let reservation = state.booking.reservation_for(&actor, id).await?;
    Ok(Json(ReservationDto::from(reservation)))
}

#[utoipa::path(
    patch,
    path = "/reservations/{id}",
    tag = "Reservations",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Presence updated", body = ReservationDto),
        (status = 400, description = "Body carried more than is_present"),
        (status = 404, description = "Not found or not the caller's")
    )
)]
pub async fn update_presence(
    State(state): State<ReservationHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<ReservationDto>> {
    let is_present = BookingService::presence_from_patch(&body)?;
    let reservation = state.booking.set_presence(&actor, id, is_present).await?;
    Ok(Json(ReservationDto::from(reservation)))
}

#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "Reservations",
    security(("token_auth" = [])),
    params(("id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 204, description = "Reservation cancelled (idempotent)"),
        (status = 404, description = "Not found or not the caller's")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationHandlerState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.booking.cancel_reservation(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
