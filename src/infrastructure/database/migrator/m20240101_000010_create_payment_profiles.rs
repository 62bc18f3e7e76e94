//! Create payment_profiles table
//!
//! Links a local user to a customer profile in the external card vault.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaymentProfiles::Name).string().not_null())
                    .col(ColumnDef::new(PaymentProfiles::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(PaymentProfiles::ExternalApiId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentProfiles::ExternalApiUrl)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_profiles_owner")
                            .from(PaymentProfiles::Table, PaymentProfiles::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_profiles_owner")
                    .table(PaymentProfiles::Table)
                    .col(PaymentProfiles::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PaymentProfiles {
    Table,
    Id,
    Name,
    OwnerId,
    ExternalApiId,
    ExternalApiUrl,
}
