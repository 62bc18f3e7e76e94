//! Payment profile repository interface

use async_trait::async_trait;

use super::model::PaymentProfile;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentProfileRepository: Send + Sync {
    async fn create(&self, profile: PaymentProfile) -> DomainResult<PaymentProfile>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentProfile>>;

    /// Profiles owned by one user.
    async fn list_for_owner(&self, owner_id: &str) -> DomainResult<Vec<PaymentProfile>>;

    /// All profiles, staff view.
    async fn list_all(&self) -> DomainResult<Vec<PaymentProfile>>;
}
