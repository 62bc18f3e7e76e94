//! Catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::catalog::CatalogEntry;

/// Catalog row representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntryDto {
    pub id: i32,
    pub name: String,
}

impl From<CatalogEntry> for CatalogEntryDto {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

/// Create/update request for a catalog row
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CatalogEntryRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
}
