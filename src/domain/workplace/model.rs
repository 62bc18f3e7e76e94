//! Workplace, Period and TimeSlot domain entities
//!
//! Intervals are half-open `[start, end)`: two windows that merely touch at
//! an endpoint do not overlap. This applies to Period date ranges and to
//! TimeSlot time windows alike.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::error::{DomainError, FieldErrors};
use crate::domain::DomainResult;

/// Half-open interval overlap check: `[a_start, a_end)` vs `[b_start, b_end)`.
pub fn windows_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// A bookable location with a fixed seat capacity
#[derive(Debug, Clone, PartialEq)]
pub struct Workplace {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub seats: i32,
}

/// A named date range during which TimeSlots of a Workplace are offered.
///
/// Periods of the same Workplace must not overlap. A Period may exist
/// without a Workplace; its TimeSlots then accept no reservations.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub id: i32,
    pub workplace_id: Option<i32>,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: Decimal,
    pub is_active: bool,
}

impl Period {
    /// Validate `start_date < end_date`, reporting on both fields.
    pub fn validate_window(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DomainResult<()> {
        if start_date >= end_date {
            let mut errors = FieldErrors::new();
            errors.add("end_date", "End date must be later than start_date.");
            errors.add("start_date", "Start date must be earlier than end_date.");
            return Err(DomainError::Fields(errors));
        }
        Ok(())
    }

    pub fn overlaps(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> bool {
        windows_overlap(self.start_date, self.end_date, start_date, end_date)
    }
}

/// A concrete bookable time window within a Period
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: i32,
    pub period_id: i32,
    pub name: String,
    pub price: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_active: bool,
}

impl TimeSlot {
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        windows_overlap(
            self.start_time,
            self.end_time,
            other.start_time,
            other.end_time,
        )
    }
}

/// A TimeSlot resolved together with its Period and (optional) Workplace.
/// The reservation engine needs the whole chain to check capacity rules.
#[derive(Debug, Clone)]
pub struct SlotContext {
    pub slot: TimeSlot,
    pub period: Period,
    pub workplace: Option<Workplace>,
}

impl SlotContext {
    /// Seats minus active reservations; negative means overbooked.
    pub fn places_remaining(&self, active_reservations: i64) -> Option<i64> {
        self.workplace
            .as_ref()
            .map(|w| w.seats as i64 - active_reservations)
    }
}

// ── Tests ──────────────────────────────────────────────────────
