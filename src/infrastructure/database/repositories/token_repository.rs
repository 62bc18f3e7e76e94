//! SeaORM implementation of TokenRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::token::{ActionToken, ActionTokenType, TemporaryToken, TokenRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{action_token, temporary_token};

pub struct SeaOrmTokenRepository {
    db: DatabaseConnection,
}

impl SeaOrmTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn action_to_domain(m: action_token::Model) -> ActionToken {
    ActionToken {
        id: m.id,
        user_id: m.user_id,
        // Unknown rows cannot appear: the column is written from as_str only.
        token_type: ActionTokenType::from_str(&m.token_type)
            .unwrap_or(ActionTokenType::AccountActivation),
        key: m.key,
        expired: m.expired,
        data: m.data,
        created_at: m.created_at,
    }
}

fn temporary_to_domain(m: temporary_token::Model) -> TemporaryToken {
    TemporaryToken {
        key: m.key,
        user_id: m.user_id,
        expires: m.expires,
        created_at: m.created_at,
    }
}

// ── TokenRepository impl ────────────────────────────────────────

#[async_trait]
impl TokenRepository for SeaOrmTokenRepository {
    async fn create_action_token(&self, t: ActionToken) -> DomainResult<ActionToken> {
        debug!("Creating {} token for user {}", t.token_type, t.user_id);
        let model = action_token::ActiveModel {
            id: Set(t.id),
            user_id: Set(t.user_id),
            token_type: Set(t.token_type.as_str().to_string()),
            key: Set(t.key),
            expired: Set(t.expired),
            data: Set(t.data),
            created_at: Set(t.created_at),
        };
        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(action_to_domain(model))
    }

    async fn find_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        let models = action_token::Entity::find()
            .filter(action_token::Column::Key.eq(key))
            .filter(action_token::Column::TokenType.eq(token_type.as_str()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(action_to_domain).collect())
    }

    async fn find_valid_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        let models = action_token::Entity::find()
            .filter(action_token::Column::Key.eq(key))
            .filter(action_token::Column::TokenType.eq(token_type.as_str()))
            .filter(action_token::Column::Expired.eq(false))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(action_to_domain).collect())
    }

    async fn action_tokens_for_user(
        &self,
        user_id: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        let models = action_token::Entity::find()
            .filter(action_token::Column::UserId.eq(user_id))
            .filter(action_token::Column::TokenType.eq(token_type.as_str()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(action_to_domain).collect())
    }

    async fn delete_action_token(&self, id: &str) -> DomainResult<()> {
        action_token::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn expire_action_token(&self, id: &str) -> DomainResult<()> {
        if let Some(existing) = action_token::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        {
            let mut active: action_token::ActiveModel = existing.into();
            active.expired = Set(true);
            active.update(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn create_temporary_token(&self, t: TemporaryToken) -> DomainResult<TemporaryToken> {
        debug!("Creating temporary token for user {}", t.user_id);
        let model = temporary_token::ActiveModel {
            key: Set(t.key),
            user_id: Set(t.user_id),
            expires: Set(t.expires),
            created_at: Set(t.created_at),
        };
        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(temporary_to_domain(model))
    }

    async fn find_temporary_token_by_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Option<TemporaryToken>> {
        let model = temporary_token::Entity::find()
            .filter(temporary_token::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(temporary_to_domain))
    }

    async fn find_temporary_token_by_key(
        &self,
        key: &str,
    ) -> DomainResult<Option<TemporaryToken>> {
        let model = temporary_token::Entity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(temporary_to_domain))
    }

    async fn update_temporary_token(&self, t: TemporaryToken) -> DomainResult<()> {
        let model = temporary_token::ActiveModel {
            key: Set(t.key),
            user_id: Set(t.user_id),
            expires: Set(t.expires),
            created_at: Set(t.created_at),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete_temporary_token(&self, key: &str) -> DomainResult<()> {
        temporary_token::Entity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
