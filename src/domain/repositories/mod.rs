//! Repository traits for the domain layer
//!
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::catalog::CatalogRepository;
use super::payment::PaymentProfileRepository;
use super::reservation::ReservationRepository;
use super::token::TokenRepository;
use super::user::UserRepository;
use super::workplace::WorkplaceRepository;
use crate::domain::error::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_email("a@b.c").await?;
///     let slots = repos.reservations().active_windows_for_user(&user.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn tokens(&self) -> &dyn TokenRepository;
    fn catalogs(&self) -> &dyn CatalogRepository;
    fn workplaces(&self) -> &dyn WorkplaceRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn payment_profiles(&self) -> &dyn PaymentProfileRepository;
}
