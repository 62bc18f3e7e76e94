//! Time slot DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::booking::SlotAvailability;
use crate::domain::workplace::TimeSlot;

/// Time slot representation with its live remaining capacity.
///
/// `places_remaining` is informational and may be negative; it is null for
/// slots whose period has no workplace.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotDto {
    pub id: i32,
    pub period: i32,
    pub name: String,
    pub price: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_active: bool,
    pub places_remaining: Option<i64>,
}

impl From<SlotAvailability> for TimeSlotDto {
    fn from(availability: SlotAvailability) -> Self {
        let slot = availability.context.slot;
        Self {
            id: slot.id,
            period: slot.period_id,
            name: slot.name,
            price: slot.price,
            start_time: slot.start_time,
            end_time: slot.end_time,
            is_active: slot.is_active,
            places_remaining: availability.places_remaining,
        }
    }
}

/// Create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TimeSlotRequest {
    pub period: i32,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub price: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TimeSlotRequest {
    pub fn into_slot(self, id: i32) -> TimeSlot {
        TimeSlot {
            id,
            period_id: self.period,
            name: self.name,
            price: self.price,
            start_time: self.start_time,
            end_time: self.end_time,
            is_active: self.is_active,
        }
    }
}
