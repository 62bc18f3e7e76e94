//! Create workplace_volunteers join table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000005_create_workplaces::Workplaces;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkplaceVolunteers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkplaceVolunteers::WorkplaceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkplaceVolunteers::UserId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WorkplaceVolunteers::WorkplaceId)
                            .col(WorkplaceVolunteers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workplace_volunteers_workplace")
                            .from(WorkplaceVolunteers::Table, WorkplaceVolunteers::WorkplaceId)
                            .to(Workplaces::Table, Workplaces::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workplace_volunteers_user")
                            .from(WorkplaceVolunteers::Table, WorkplaceVolunteers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkplaceVolunteers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum WorkplaceVolunteers {
    Table,
    WorkplaceId,
    UserId,
}
