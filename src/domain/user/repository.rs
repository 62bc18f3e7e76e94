//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user
    async fn update(&self, user: User) -> DomainResult<User>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Paginated list ordered by email. Returns (page items, total count).
    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<User>, u64)>;

    /// Every user ordered by id, for export.
    async fn all_ordered(&self) -> DomainResult<Vec<User>>;
}
