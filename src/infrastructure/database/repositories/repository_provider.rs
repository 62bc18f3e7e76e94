//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::catalog::CatalogRepository;
use crate::domain::payment::PaymentProfileRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::token::TokenRepository;
use crate::domain::user::UserRepository;
use crate::domain::workplace::WorkplaceRepository;

use super::catalog_repository::SeaOrmCatalogRepository;
use super::payment_profile_repository::SeaOrmPaymentProfileRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::token_repository::SeaOrmTokenRepository;
use super::user_repository::SeaOrmUserRepository;
use super::workplace_repository::SeaOrmWorkplaceRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().find_by_email("member@example.com").await?;
/// let windows = repos.reservations().active_windows_for_user(&user.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    tokens: SeaOrmTokenRepository,
    catalogs: SeaOrmCatalogRepository,
    workplaces: SeaOrmWorkplaceRepository,
    reservations: SeaOrmReservationRepository,
    payment_profiles: SeaOrmPaymentProfileRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            tokens: SeaOrmTokenRepository::new(db.clone()),
            catalogs: SeaOrmCatalogRepository::new(db.clone()),
            workplaces: SeaOrmWorkplaceRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            payment_profiles: SeaOrmPaymentProfileRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn tokens(&self) -> &dyn TokenRepository {
        &self.tokens
    }

    fn catalogs(&self) -> &dyn CatalogRepository {
        &self.catalogs
    }

    fn workplaces(&self) -> &dyn WorkplaceRepository {
        &self.workplaces
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn payment_profiles(&self) -> &dyn PaymentProfileRepository {
        &self.payment_profiles
    }
}
