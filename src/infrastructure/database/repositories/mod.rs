//! SeaORM repository implementations

pub mod catalog_repository;
pub mod payment_profile_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod token_repository;
pub mod user_repository;
pub mod workplace_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a SeaORM error into the domain error taxonomy.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
