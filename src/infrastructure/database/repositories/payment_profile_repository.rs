//! SeaORM implementation of PaymentProfileRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::payment::{PaymentProfile, PaymentProfileRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::payment_profile;

pub struct SeaOrmPaymentProfileRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: payment_profile::Model) -> PaymentProfile {
    PaymentProfile {
        id: m.id,
        name: m.name,
        owner_id: m.owner_id,
        external_api_id: m.external_api_id,
        external_api_url: m.external_api_url,
    }
}

#[async_trait]
impl PaymentProfileRepository for SeaOrmPaymentProfileRepository {
    async fn create(&self, p: PaymentProfile) -> DomainResult<PaymentProfile> {
        debug!("Creating payment profile for user {}", p.owner_id);
        let model = payment_profile::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            owner_id: Set(p.owner_id),
            external_api_id: Set(p.external_api_id),
            external_api_url: Set(p.external_api_url),
        };
        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentProfile>> {
        let model = payment_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list_for_owner(&self, owner_id: &str) -> DomainResult<Vec<PaymentProfile>> {
        let models = payment_profile::Entity::find()
            .filter(payment_profile::Column::OwnerId.eq(owner_id))
            .order_by_asc(payment_profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<PaymentProfile>> {
        let models = payment_profile::Entity::find()
            .order_by_asc(payment_profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
