//! Create catalog_entries table
//!
//! Shared table for the four flat name catalogs; `kind` discriminates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogEntries::Kind).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_catalog_entries_kind")
                    .table(CatalogEntries::Table)
                    .col(CatalogEntries::Kind)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CatalogEntries {
    Table,
    Id,
    Kind,
    Name,
}
