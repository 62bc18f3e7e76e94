//! Create action_tokens table
//!
//! Single-purpose workflow tokens (account activation, email change,
//! password change) looked up by opaque key.

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
                    .table(ActionTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActionTokens::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActionTokens::UserId).string().not_null())
                    .col(ColumnDef::new(ActionTokens::TokenType).string().not_null())
                    .col(ColumnDef::new(ActionTokens::Key).string().not_null())
                    .col(
                        ColumnDef::new(ActionTokens::Expired)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ActionTokens::Data).json())
                    .col(
                        ColumnDef::new(ActionTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_action_tokens_user")
                            .from(ActionTokens::Table, ActionTokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_action_tokens_key_type")
                    .table(ActionTokens::Table)
                    .col(ActionTokens::Key)
                    .col(ActionTokens::TokenType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_action_tokens_user")
                    .table(ActionTokens::Table)
                    .col(ActionTokens::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionTokens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ActionTokens {
    Table,
    Id,
    UserId,
    TokenType,
    Key,
    Expired,
    Data,
    CreatedAt,
}
