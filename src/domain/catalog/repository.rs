//! Catalog repository interface

use async_trait::async_trait;

use super::model::{CatalogEntry, CatalogKind};
use crate::domain::DomainResult;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All entries of a catalog, ordered by name.
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntry>>;

    async fn find_by_id(&self, kind: CatalogKind, id: i32) -> DomainResult<Option<CatalogEntry>>;

    async fn create(&self, kind: CatalogKind, name: &str) -> DomainResult<CatalogEntry>;

    async fn update(&self, kind: CatalogKind, id: i32, name: &str) -> DomainResult<CatalogEntry>;

    async fn delete(&self, kind: CatalogKind, id: i32) -> DomainResult<()>;
}
