//! SeaORM implementation of CatalogRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::catalog::{CatalogEntry, CatalogKind, CatalogRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::catalog_entry;

pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        kind: CatalogKind,
        id: i32,
    ) -> DomainResult<Option<catalog_entry::Model>> {
        catalog_entry::Entity::find_by_id(id)
            .filter(catalog_entry::Column::Kind.eq(kind.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)
    }
}

fn model_to_domain(m: catalog_entry::Model) -> CatalogEntry {
    CatalogEntry {
        id: m.id,
        // The column is written from as_str only.
        kind: CatalogKind::from_str(&m.kind).unwrap_or(CatalogKind::Domain),
        name: m.name,
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntry>> {
        let models = catalog_entry::Entity::find()
            .filter(catalog_entry::Column::Kind.eq(kind.as_str()))
            .order_by_asc(catalog_entry::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, kind: CatalogKind, id: i32) -> DomainResult<Option<CatalogEntry>> {
        Ok(self.find_model(kind, id).await?.map(model_to_domain))
    }

    async fn create(&self, kind: CatalogKind, name: &str) -> DomainResult<CatalogEntry> {
        let model = catalog_entry::ActiveModel {
            id: NotSet,
            kind: Set(kind.as_str().to_string()),
            name: Set(name.to_string()),
        };
        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn update(&self, kind: CatalogKind, id: i32, name: &str) -> DomainResult<CatalogEntry> {
        let existing = self
            .find_model(kind, id)
            .await?
            .ok_or(DomainError::not_found(kind.export_name()))?;
        let mut active: catalog_entry::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        let model = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn delete(&self, kind: CatalogKind, id: i32) -> DomainResult<()> {
        let existing = self
            .find_model(kind, id)
            .await?
            .ok_or(DomainError::not_found(kind.export_name()))?;
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
