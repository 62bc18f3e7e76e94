//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::user::{User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        email: m.email,
        password_hash: m.password_hash,
        first_name: m.first_name,
        last_name: m.last_name,
        phone: m.phone,
        other_phone: m.other_phone,
        birthdate: m.birthdate,
        gender: m.gender,
        university_id: m.university_id,
        academic_level_id: m.academic_level_id,
        academic_field_id: m.academic_field_id,
        membership_end: m.membership_end,
        tickets: m.tickets,
        is_active: m.is_active,
        is_staff: m.is_staff,
        date_joined: m.date_joined,
        last_login: m.last_login,
    }
}

fn domain_to_active(u: User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id),
        email: Set(u.email),
        password_hash: Set(u.password_hash),
        first_name: Set(u.first_name),
        last_name: Set(u.last_name),
        phone: Set(u.phone),
        other_phone: Set(u.other_phone),
        birthdate: Set(u.birthdate),
        gender: Set(u.gender),
        university_id: Set(u.university_id),
        academic_level_id: Set(u.academic_level_id),
        academic_field_id: Set(u.academic_field_id),
        membership_end: Set(u.membership_end),
        tickets: Set(u.tickets),
        is_active: Set(u.is_active),
        is_staff: Set(u.is_staff),
        date_joined: Set(u.date_joined),
        last_login: Set(u.last_login),
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, u: User) -> DomainResult<User> {
        debug!("Creating user: {}", u.email);
        let model = domain_to_active(u).insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn update(&self, u: User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(&u.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("User"));
        }
        let model = domain_to_active(u).update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<User>, u64)> {
        let paginator = user::Entity::find()
            .order_by_asc(user::Column::Email)
            .paginate(&self.db, page_size.max(1));
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;
        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn all_ordered(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
