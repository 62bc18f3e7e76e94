//! Token repository interface

use async_trait::async_trait;

use super::model::{ActionToken, ActionTokenType, TemporaryToken};
use crate::domain::DomainResult;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    // ── Action tokens ──────────────────────────────────────────

    async fn create_action_token(&self, token: ActionToken) -> DomainResult<ActionToken>;

    /// All tokens matching (key, type), regardless of the expired flag.
    /// Callers treat anything but exactly one match as an invalid token.
    async fn find_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>>;

    /// Tokens matching (key, type) with `expired = false`.
    async fn find_valid_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>>;

    /// All of a user's tokens of a given type.
    async fn action_tokens_for_user(
        &self,
        user_id: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>>;

    /// Delete a consumed single-use token.
    async fn delete_action_token(&self, id: &str) -> DomainResult<()>;

    /// Flag a token expired, keeping the row.
    async fn expire_action_token(&self, id: &str) -> DomainResult<()>;

    // ── Temporary tokens ───────────────────────────────────────

    async fn create_temporary_token(&self, token: TemporaryToken)
        -> DomainResult<TemporaryToken>;

    async fn find_temporary_token_by_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Option<TemporaryToken>>;

    async fn find_temporary_token_by_key(
        &self,
        key: &str,
    ) -> DomainResult<Option<TemporaryToken>>;

    async fn update_temporary_token(&self, token: TemporaryToken) -> DomainResult<()>;

    async fn delete_temporary_token(&self, key: &str) -> DomainResult<()>;
}
