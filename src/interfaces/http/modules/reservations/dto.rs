//! Reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reservation::{CancelationReason, Reservation};

/// Reservation API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub user: String,
    pub timeslot: i32,
    pub is_active: bool,
    pub is_present: bool,
    pub cancelation_date: Option<DateTime<Utc>>,
    /// Single-letter reason code, `"U"` for user-initiated
    pub cancelation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        let is_active = r.is_active();
        Self {
            id: r.id,
            user: r.user_id,
            timeslot: r.time_slot_id,
            is_active,
            is_present: r.is_present,
            cancelation_date: r.cancelation_date,
            cancelation_reason: r
                .cancelation_reason
                .map(|reason: CancelationReason| reason.as_str().to_string()),
            created_at: r.created_at,
        }
    }
}

/// Booking request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReservationRequest {
    pub timeslot: i32,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_reservation_maps_state_and_reason() {
        let mut r = Reservation::new("u1", 4);
        r.id = 9;
        r.cancel(CancelationReason::User, Utc::now());

        let dto = ReservationDto::from(r);
        assert_eq!(dto.user, "u1");
        assert!(!dto.is_active);
        assert_eq!(dto.cancelation_reason.as_deref(), Some("U"));
        assert!(dto.cancelation_date.is_some());
    }

    #[test]
    fn active_reservation_has_no_cancellation_stamp() {
        let dto = ReservationDto::from(Reservation::new("u1", 4));
        assert!(dto.is_active);
        assert_eq!(dto.cancelation_reason, None);
        assert_eq!(dto.cancelation_date, None);
    }
}
