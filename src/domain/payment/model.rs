//! Payment profile domain entity

/// A link between a local user and a customer profile kept by the external
/// payment provider. Card data never touches this system; only the external
/// profile id and the vault URL it lives under are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentProfile {
    pub id: i32,
    pub name: String,
    pub owner_id: String,
    pub external_api_id: String,
    pub external_api_url: String,
}
