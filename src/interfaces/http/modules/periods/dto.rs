//! Period DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::workplace::Period;

/// Period API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PeriodDto {
    pub id: i32,
    pub workplace: Option<i32>,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: Decimal,
    pub is_active: bool,
}

impl From<Period> for PeriodDto {
    fn from(p: Period) -> Self {
        Self {
            id: p.id,
            workplace: p.workplace_id,
            name: p.name,
            start_date: p.start_date,
            end_date: p.end_date,
            price: p.price,
            is_active: p.is_active,
        }
    }
}

/// Create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PeriodRequest {
    pub workplace: Option<i32>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl PeriodRequest {
    pub fn into_period(self, id: i32) -> Period {
        Period {
            id,
            workplace_id: self.workplace,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            is_active: self.is_active,
        }
    }
}
