//! Payment profile DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::payments::ProfileView;

/// A stored vault reference merged with the vault's live card list.
/// Card numbers never appear here; the vault only returns masked data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentProfileDto {
    pub id: i32,
    pub name: String,
    pub owner: String,
    pub external_api_id: String,
    pub external_api_url: String,
    /// Masked card list as returned by the vault
    #[schema(value_type = Object)]
    pub cards: serde_json::Value,
}

impl From<ProfileView> for PaymentProfileDto {
    fn from(view: ProfileView) -> Self {
        let cards = view
            .external_data
            .get("cards")
            .cloned()
            .unwrap_or_else(|| serde_json::json!([]));
        Self {
            id: view.profile.id,
            name: view.profile.name,
            owner: view.profile.owner_id,
            external_api_id: view.profile.external_api_id,
            external_api_url: view.profile.external_api_url,
            cards,
        }
    }
}

/// Create request: a display name plus the frontend's single-use card token
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PaymentProfileRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub name: String,
    pub single_use_token: String,
}

/// Card attach/replace request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CardRequest {
    pub single_use_token: String,
}
