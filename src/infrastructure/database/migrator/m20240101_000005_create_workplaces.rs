//! Create workplaces table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workplaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workplaces::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workplaces::Name).string().not_null())
                    .col(
                        ColumnDef::new(Workplaces::Details)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Workplaces::AddressLine)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Workplaces::City)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Workplaces::PostalCode)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Workplaces::Seats)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workplaces::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Workplaces {
    Table,
    Id,
    Name,
    Details,
    AddressLine,
    City,
    PostalCode,
    Seats,
}
