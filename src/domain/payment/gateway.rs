//! External payment provider seam
//!
//! The application layer talks to the provider exclusively through this
//! trait, so the HTTP client lives in infrastructure and tests can swap in
//! a stub. Card data never transits through this system; only single-use
//! tokens minted by the provider's frontend SDK do.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Status and parsed JSON body of a provider call that returned 2xx.
/// Non-2xx responses surface as [`crate::domain::DomainError::Gateway`].
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a customer profile in the provider's vault. The payload
    /// carries the customer identity and the single-use card token.
    async fn create_profile(&self, payload: serde_json::Value) -> DomainResult<GatewayResponse>;

    /// Fetch a profile with its cards expanded.
    async fn get_profile(&self, profile_id: &str) -> DomainResult<GatewayResponse>;

    /// Replace a card on a profile with one minted from a single-use token.
    async fn update_card(
        &self,
        profile_id: &str,
        card_id: &str,
        single_use_token: &str,
    ) -> DomainResult<GatewayResponse>;

    /// Attach a new card to a profile.
    async fn create_card(
        &self,
        profile_id: &str,
        single_use_token: &str,
    ) -> DomainResult<GatewayResponse>;

    /// Authorize and settle a charge against a payment token.
    async fn charge(&self, amount: i64, payment_token: &str) -> DomainResult<GatewayResponse>;
}
