//! Workplace DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::workplace::Workplace;

/// Workplace API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkplaceDto {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub seats: i32,
}

impl From<Workplace> for WorkplaceDto {
    fn from(w: Workplace) -> Self {
        Self {
            id: w.id,
            name: w.name,
            details: w.details,
            address_line: w.address_line,
            city: w.city,
            postal_code: w.postal_code,
            seats: w.seats,
        }
    }
}

/// Create/update request. `volunteers` replaces the whole volunteer set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkplaceRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    pub seats: i32,
    #[serde(default)]
    pub volunteers: Vec<String>,
}
