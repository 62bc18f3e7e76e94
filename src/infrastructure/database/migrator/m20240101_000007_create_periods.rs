//! Create periods table
//!
//! Date ranges offered by a workplace. Ranges are half-open; overlap is
//! enforced in the application layer before insert.

use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_workplaces::Workplaces;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Periods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Periods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Periods::WorkplaceId).integer())
                    .col(ColumnDef::new(Periods::Name).string().not_null())
                    .col(
                        ColumnDef::new(Periods::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Periods::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Periods::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Periods::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_periods_workplace")
                            .from(Periods::Table, Periods::WorkplaceId)
                            .to(Workplaces::Table, Workplaces::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_periods_workplace")
                    .table(Periods::Table)
                    .col(Periods::WorkplaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Periods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Periods {
    Table,
    Id,
    WorkplaceId,
    Name,
    StartDate,
    EndDate,
    Price,
    IsActive,
}
