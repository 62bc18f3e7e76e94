//! Reservation domain entity

use chrono::{DateTime, Utc};

/// Reservation lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationState {
    /// Seat is held
    Active,
    /// Soft-cancelled; the row is kept with its cancellation stamp
    Cancelled,
}

impl ReservationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Active" => Self::Active,
            _ => Self::Cancelled,
        }
    }
}

/// Who cancelled a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelationReason {
    /// User-initiated
    User,
}

impl CancelationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "U",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "U" => Some(Self::User),
            _ => None,
        }
    }
}

/// A user's hold on a TimeSlot
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: String,
    pub time_slot_id: i32,
    pub state: ReservationState,
    pub is_present: bool,
    pub cancelation_date: Option<DateTime<Utc>>,
    pub cancelation_reason: Option<CancelationReason>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(user_id: impl Into<String>, time_slot_id: i32) -> Self {
        Self {
            id: 0,
            user_id: user_id.into(),
            time_slot_id,
            state: ReservationState::Active,
            is_present: false,
            cancelation_date: None,
            cancelation_reason: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ReservationState::Active
    }

    /// Soft-cancel. Idempotent: an already-cancelled reservation keeps its
    /// original cancellation stamp.
    pub fn cancel(&mut self, reason: CancelationReason, now: DateTime<Utc>) {
        if self.is_active() {
            self.state = ReservationState::Cancelled;
            self.cancelation_date = Some(now);
            self.cancelation_reason = Some(reason);
        }
    }
}

/// An active reservation's time window, joined from its TimeSlot.
/// Used for per-user overlap exclusion.
#[derive(Debug, Clone)]
pub struct ReservationWindow {
    pub reservation_id: i32,
    pub time_slot_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_reservation_is_active() {
        let r = Reservation::new("u1", 7);
        assert!(r.is_active());
        assert!(!r.is_present);
        assert_eq!(r.cancelation_date, None);
        assert_eq!(r.cancelation_reason, None);
    }

    #[test]
    fn cancel_stamps_date_and_reason() {
        let mut r = Reservation::new("u1", 7);
        let now = Utc::now();
        r.cancel(CancelationReason::User, now);
        assert!(!r.is_active());
        assert_eq!(r.cancelation_date, Some(now));
        assert_eq!(r.cancelation_reason, Some(CancelationReason::User));
    }

    #[test]
    fn double_cancel_keeps_first_stamp() {
        let mut r = Reservation::new("u1", 7);
        let first = Utc::now();
        r.cancel(CancelationReason::User, first);
        let later = first + Duration::hours(2);
        r.cancel(CancelationReason::User, later);
        assert_eq!(r.cancelation_date, Some(first));
    }

    #[test]
    fn state_roundtrip() {
        assert_eq!(
            ReservationState::from_str(ReservationState::Active.as_str()),
            ReservationState::Active
        );
        assert_eq!(
            ReservationState::from_str("anything-else"),
            ReservationState::Cancelled
        );
        assert_eq!(CancelationReason::from_str("U"), Some(CancelationReason::User));
        assert_eq!(CancelationReason::from_str("X"), None);
    }
}
