//! Account management service — application-layer orchestration
//!
//! All account business logic lives here. Token lookups deliberately return
//! a generic invalid-token error whether the key is unknown, consumed,
//! expired or ambiguous; callers must not be able to tell these apart.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use tracing::{info, warn};

use crate::config::SecurityConfig;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::token::{ActionToken, ActionTokenType, TemporaryToken};
use crate::domain::user::User;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::{generate_token_key, hash_password, verify_password};
use crate::infrastructure::email::EmailService;

/// Result of consuming an activation or email-change token.
#[derive(Debug, Clone)]
pub struct ActivationOutcome {
    pub user: User,
    pub token: TemporaryToken,
}

/// Result of a signup. `warning` is set when the account exists but the
/// notification email could not be delivered.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub user: User,
    pub warning: Option<String>,
}

/// Signup payload, already structurally validated by the DTO layer.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub other_phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub university_id: Option<i32>,
    pub academic_level_id: Option<i32>,
    pub academic_field_id: Option<i32>,
}

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    email: Arc<dyn EmailService>,
    security: SecurityConfig,
}

fn invalid_activation_token(key: &str) -> DomainError {
    DomainError::Detail(format!("\"{}\" is not a valid activation_token.", key))
}

fn invalid_password_token(key: &str) -> DomainError {
    DomainError::Detail(format!("{} is not a valid token.", key))
}

impl IdentityService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        email: Arc<dyn EmailService>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            repos,
            email,
            security,
        }
    }

    fn check_password_policy(&self, password: &str) -> DomainResult<()> {
        if password.len() < self.security.password_min_length {
            return Err(DomainError::field(
                "password",
                format!(
                    "This password is too short. It must contain at least {} characters.",
                    self.security.password_min_length
                ),
            ));
        }
        Ok(())
    }

    // ── Registration ────────────────────────────────────────────

    /// Create an account. The account always persists; a failed activation
    /// email only degrades the response to a warning.
    pub async fn register(&self, new_user: NewUser) -> DomainResult<RegistrationOutcome> {
        if self
            .repos
            .users()
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Err(DomainError::field("email", "This field must be unique."));
        }
        self.check_password_policy(&new_user.password)?;

        let hash = hash_password(&new_user.password)
            .map_err(|e| DomainError::Database(format!("Password hashing failed: {}", e)))?;

        let mut user = User::new(new_user.email, hash);
        user.first_name = new_user.first_name;
        user.last_name = new_user.last_name;
        user.phone = new_user.phone;
        user.other_phone = new_user.other_phone;
        user.birthdate = new_user.birthdate;
        user.gender = new_user.gender;
        user.university_id = new_user.university_id;
        user.academic_level_id = new_user.academic_level_id;
        user.academic_field_id = new_user.academic_field_id;

        if self.security.auto_activate_users {
            user.activate();
        }

        let user = self.repos.users().create(user).await?;
        info!("Registered user {}", user.email);

        let activation = ActionToken::new(
            user.id.clone(),
            ActionTokenType::AccountActivation,
            generate_token_key(),
            None,
        );
        let activation = self.repos.tokens().create_action_token(activation).await?;

        let mut warning = None;
        if self.email.enabled() {
            if let Err(e) = self.email.send_activation(&user, &activation.key).await {
                warn!("Activation email for {} failed: {}", user.email, e);
                warning = Some(
                    "The account was created but no email was sent. If your account is \
                     not activated, contact the administration."
                        .to_string(),
                );
            }
        }

        Ok(RegistrationOutcome { user, warning })
    }

    // ── Activation / email change ───────────────────────────────

    /// Consume an activation token, or failing that an email-change token.
    /// Success yields the updated user and a session token.
    pub async fn activate(&self, key: &str) -> DomainResult<ActivationOutcome> {
        let matches = self
            .repos
            .tokens()
            .find_action_tokens(key, ActionTokenType::AccountActivation)
            .await?;
        if let Ok([token]) = <[ActionToken; 1]>::try_from(matches) {
            let mut user = self
                .repos
                .users()
                .find_by_id(&token.user_id)
                .await?
                .ok_or_else(|| invalid_activation_token(key))?;

            user.activate();
            let user = self.repos.users().update(user).await?;
            self.repos.tokens().delete_action_token(&token.id).await?;

            let session = self.session_with_fresh_expiry(&user.id).await?;
            info!("Activated account {}", user.email);
            return Ok(ActivationOutcome {
                user,
                token: session,
            });
        }

        self.consume_email_change(key).await
    }

    async fn consume_email_change(&self, key: &str) -> DomainResult<ActivationOutcome> {
        let matches = self
            .repos
            .tokens()
            .find_action_tokens(key, ActionTokenType::EmailChange)
            .await?;
        let Ok([token]) = <[ActionToken; 1]>::try_from(matches) else {
            return Err(invalid_activation_token(key));
        };

        let new_email = token
            .pending_email()
            .map(str::to_owned)
            .ok_or_else(|| invalid_activation_token(key))?;

        let mut user = self
            .repos
            .users()
            .find_by_id(&token.user_id)
            .await?
            .ok_or_else(|| invalid_activation_token(key))?;

        user.email = new_email;
        // The university travels with the email domain; absent means cleared.
        user.university_id = token.pending_university_id();
        let user = self.repos.users().update(user).await?;
        self.repos.tokens().delete_action_token(&token.id).await?;

        let session = self.session_with_fresh_expiry(&user.id).await?;
        info!("Email change applied for user {}", user.id);
        Ok(ActivationOutcome {
            user,
            token: session,
        })
    }

    /// Stage an email change. The address only switches when the emailed
    /// confirmation token is consumed through [`Self::activate`].
    pub async fn request_email_change(
        &self,
        user: &User,
        new_email: &str,
        university_id: Option<i32>,
    ) -> DomainResult<Option<String>> {
        if self.repos.users().find_by_email(new_email).await?.is_some() {
            return Err(DomainError::field("email", "This field must be unique."));
        }

        let mut data = serde_json::json!({ "email": new_email });
        if let Some(id) = university_id {
            data["university_id"] = serde_json::json!(id);
        }
        let token = ActionToken::new(
            user.id.clone(),
            ActionTokenType::EmailChange,
            generate_token_key(),
            Some(data),
        );
        let token = self.repos.tokens().create_action_token(token).await?;

        let mut warning = None;
        if self.email.enabled() {
            // The confirmation link must reach the address being claimed.
            let mut recipient = user.clone();
            recipient.email = new_email.to_string();
            if let Err(e) = self.email.send_activation(&recipient, &token.key).await {
                warn!("Email-change mail for {} failed: {}", new_email, e);
                warning = Some(
                    "Your token has been created but no email has been sent. Please \
                     contact the administration."
                        .to_string(),
                );
            }
        }
        Ok(warning)
    }

    // ── Password reset / change ─────────────────────────────────

    /// Issue a password-change token and mail the reset link. Prior tokens
    /// are expired so only the newest is usable. Returns a warning when the
    /// token exists but the mail could not be sent.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<Option<String>> {
        if !self.email.enabled() {
            return Err(DomainError::EmailServiceDisabled);
        }

        let user = self
            .repos
            .users()
            .find_by_email(email)
            .await?
            .ok_or(DomainError::not_found("User"))?;

        let previous = self
            .repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::PasswordChange)
            .await?;
        for token in previous {
            self.repos.tokens().expire_action_token(&token.id).await?;
        }

        let token = ActionToken::new(
            user.id.clone(),
            ActionTokenType::PasswordChange,
            generate_token_key(),
            None,
        );
        let token = self.repos.tokens().create_action_token(token).await?;

        if let Err(e) = self.email.send_password_reset(&user, &token.key).await {
            warn!("Password-reset email for {} failed: {}", user.email, e);
            return Ok(Some(
                "Your token has been created but no email has been sent. Please \
                 contact the administration."
                    .to_string(),
            ));
        }
        Ok(None)
    }

    /// Consume a password-change token and set the new password. The token
    /// is flagged expired, not deleted, so the audit trail remains.
    pub async fn change_password(&self, key: &str, new_password: &str) -> DomainResult<User> {
        let matches = self
            .repos
            .tokens()
            .find_valid_action_tokens(key, ActionTokenType::PasswordChange)
            .await?;
        let Ok([token]) = <[ActionToken; 1]>::try_from(matches) else {
            return Err(invalid_password_token(key));
        };

        self.check_password_policy(new_password)?;

        let mut user = self
            .repos
            .users()
            .find_by_id(&token.user_id)
            .await?
            .ok_or_else(|| invalid_password_token(key))?;

        user.password_hash = hash_password(new_password)
            .map_err(|e| DomainError::Database(format!("Password hashing failed: {}", e)))?;
        let user = self.repos.users().update(user).await?;
        self.repos.tokens().expire_action_token(&token.id).await?;

        info!("Password changed for user {}", user.id);
        Ok(user)
    }

    // ── Sessions ────────────────────────────────────────────────

    /// Authenticate credentials and hand out the user's session token,
    /// replacing it when expired.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TemporaryToken> {
        let invalid =
            || DomainError::non_field("Unable to log in with provided credentials.");

        let Some(mut user) = self.repos.users().find_by_email(email).await? else {
            return Err(invalid());
        };
        if !user.is_active {
            return Err(invalid());
        }
        if !verify_password(password, &user.password_hash).unwrap_or(false) {
            return Err(invalid());
        }

        user.last_login = Some(Utc::now());
        let user = self.repos.users().update(user).await?;

        self.get_or_refresh_session(&user.id).await
    }

    /// Resolve the Authorization token key to a user. Expired keys never
    /// authenticate.
    pub async fn authenticate(&self, key: &str) -> DomainResult<User> {
        let token = self
            .repos
            .tokens()
            .find_temporary_token_by_key(key)
            .await?
            .ok_or(DomainError::Unauthorized)?;
        if token.is_expired() {
            return Err(DomainError::Unauthorized);
        }
        self.repos
            .users()
            .find_by_id(&token.user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(DomainError::Unauthorized)
    }

    /// Delete the caller's own session token. Someone else's key answers
    /// 404 so key existence is not disclosed.
    pub async fn logout(&self, actor: &User, key: &str) -> DomainResult<()> {
        let token = self
            .repos
            .tokens()
            .find_temporary_token_by_key(key)
            .await?
            .filter(|t| t.user_id == actor.id)
            .ok_or(DomainError::not_found("TemporaryToken"))?;
        self.repos.tokens().delete_temporary_token(&token.key).await
    }

    /// Get the user's session token, replacing an expired one with a fresh
    /// token expiring at now + configured minutes. Login keeps an unexpired
    /// token untouched.
    async fn get_or_refresh_session(&self, user_id: &str) -> DomainResult<TemporaryToken> {
        if let Some(existing) = self
            .repos
            .tokens()
            .find_temporary_token_by_user(user_id)
            .await?
        {
            if !existing.is_expired() {
                return Ok(existing);
            }
            self.repos
                .tokens()
                .delete_temporary_token(&existing.key)
                .await?;
        }

        let token = TemporaryToken::new(
            user_id,
            generate_token_key(),
            self.security.temporary_token_minutes,
        );
        self.repos.tokens().create_temporary_token(token).await
    }

    /// Get-or-create the user's session token and push its expiry to
    /// now + configured minutes. Activation always restarts the clock,
    /// even on a token that is still valid.
    async fn session_with_fresh_expiry(&self, user_id: &str) -> DomainResult<TemporaryToken> {
        if let Some(mut existing) = self
            .repos
            .tokens()
            .find_temporary_token_by_user(user_id)
            .await?
        {
            existing.expires =
                Utc::now() + Duration::minutes(self.security.temporary_token_minutes);
            self.repos
                .tokens()
                .update_temporary_token(existing.clone())
                .await?;
            return Ok(existing);
        }

        let token = TemporaryToken::new(
            user_id,
            generate_token_key(),
            self.security.temporary_token_minutes,
        );
        self.repos.tokens().create_temporary_token(token).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_service, FailingEmail, InMemoryRepos};
    use chrono::Duration;

    fn signup(email: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: "long-enough-password".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..NewUser::default()
        }
    }

    #[tokio::test]
    async fn register_creates_inactive_user_with_activation_token() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), false, false);

        let outcome = service.register(signup("ada@example.com")).await.unwrap();
        assert!(!outcome.user.is_active);
        assert!(outcome.warning.is_none());

        let tokens = repos
            .tokens()
            .action_tokens_for_user(&outcome.user.id, ActionTokenType::AccountActivation)
            .await
            .unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[tokio::test]
    async fn register_with_auto_activation() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, true, false);

        let outcome = service.register(signup("ada@example.com")).await.unwrap();
        assert!(outcome.user.is_active);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_field_error() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, false, false);

        service.register(signup("ada@example.com")).await.unwrap();
        let err = service.register(signup("ada@example.com")).await.unwrap_err();
        match err {
            DomainError::Fields(errors) => {
                assert_eq!(
                    errors.into_inner()["email"],
                    vec!["This field must be unique.".to_string()]
                );
            }
            other => panic!("expected field error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, false, false);

        let mut attempt = signup("ada@example.com");
        attempt.password = "short".into();
        assert!(service.register(attempt).await.is_err());
    }

    #[tokio::test]
    async fn failed_activation_email_degrades_to_warning() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = IdentityService::new(
            repos,
            Arc::new(FailingEmail),
            SecurityConfig::default(),
        );

        let outcome = service.register(signup("ada@example.com")).await.unwrap();
        assert!(outcome.warning.is_some());
    }

    #[tokio::test]
    async fn activation_consumes_the_token() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), false, false);

        let outcome = service.register(signup("ada@example.com")).await.unwrap();
        let key = repos
            .tokens()
            .action_tokens_for_user(&outcome.user.id, ActionTokenType::AccountActivation)
            .await
            .unwrap()
            .remove(0)
            .key;

        let activated = service.activate(&key).await.unwrap();
        assert!(activated.user.is_active);
        assert_eq!(activated.token.user_id, activated.user.id);

        // Second consumption: token is gone, generic error.
        let err = service.activate(&key).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("\"{}\" is not a valid activation_token.", key)
        );
    }

    #[tokio::test]
    async fn activation_restarts_an_existing_session_clock() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), false, false);
        let user = service.register(signup("ada@example.com")).await.unwrap().user;

        // Session token about to expire; activation must push it out to
        // now + configured minutes without replacing the key.
        let held = TemporaryToken::new(user.id.clone(), "held-key", 1);
        repos.tokens().create_temporary_token(held).await.unwrap();

        let key = repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::AccountActivation)
            .await
            .unwrap()
            .remove(0)
            .key;
        let outcome = service.activate(&key).await.unwrap();

        assert_eq!(outcome.token.key, "held-key");
        assert!(outcome.token.expires > Utc::now() + Duration::minutes(200));

        let stored = repos
            .tokens()
            .find_temporary_token_by_user(&user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.expires, outcome.token.expires);
    }

    #[tokio::test]
    async fn unknown_activation_token_message() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, false, false);
        let err = service.activate("bogus").await.unwrap_err();
        assert_eq!(err.to_string(), "\"bogus\" is not a valid activation_token.");
    }

    #[tokio::test]
    async fn email_change_token_updates_email_and_university() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, false);
        let user = service.register(signup("old@example.com")).await.unwrap().user;

        let token = ActionToken::new(
            user.id.clone(),
            ActionTokenType::EmailChange,
            "change-key",
            Some(serde_json::json!({"email": "new@example.com", "university_id": 7})),
        );
        repos.tokens().create_action_token(token).await.unwrap();

        let outcome = service.activate("change-key").await.unwrap();
        assert_eq!(outcome.user.email, "new@example.com");
        assert_eq!(outcome.user.university_id, Some(7));
    }

    #[tokio::test]
    async fn email_change_token_without_email_is_invalid() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, false);
        let user = service.register(signup("old@example.com")).await.unwrap().user;

        let token = ActionToken::new(
            user.id.clone(),
            ActionTokenType::EmailChange,
            "empty-key",
            Some(serde_json::json!({"email": ""})),
        );
        repos.tokens().create_action_token(token).await.unwrap();

        assert!(service.activate("empty-key").await.is_err());
    }

    #[tokio::test]
    async fn requested_email_change_only_applies_on_confirmation() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, false);
        let user = service.register(signup("old@example.com")).await.unwrap().user;

        service
            .request_email_change(&user, "new@example.com", Some(3))
            .await
            .unwrap();
        // Unchanged until the token is consumed.
        let stored = repos.users().find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "old@example.com");

        let key = repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::EmailChange)
            .await
            .unwrap()
            .remove(0)
            .key;
        let outcome = service.activate(&key).await.unwrap();
        assert_eq!(outcome.user.email, "new@example.com");
        assert_eq!(outcome.user.university_id, Some(3));
    }

    #[tokio::test]
    async fn email_change_to_taken_address_is_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, true, false);
        let user = service.register(signup("ada@example.com")).await.unwrap().user;
        service.register(signup("bob@example.com")).await.unwrap();

        let err = service
            .request_email_change(&user, "bob@example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Fields(_)));
    }

    #[tokio::test]
    async fn reset_requires_email_service() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, false, false);
        let err = service
            .request_password_reset("ada@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailServiceDisabled));
    }

    #[tokio::test]
    async fn reset_expires_previous_tokens() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, true);
        let user = service.register(signup("ada@example.com")).await.unwrap().user;

        service.request_password_reset("ada@example.com").await.unwrap();
        service.request_password_reset("ada@example.com").await.unwrap();

        let tokens = repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::PasswordChange)
            .await
            .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.iter().filter(|t| t.is_valid()).count(), 1);
    }

    #[tokio::test]
    async fn change_password_expires_token_but_keeps_it() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, true);
        let user = service.register(signup("ada@example.com")).await.unwrap().user;

        service.request_password_reset("ada@example.com").await.unwrap();
        let key = repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::PasswordChange)
            .await
            .unwrap()
            .remove(0)
            .key;

        service.change_password(&key, "brand-new-password").await.unwrap();
        let err = service
            .change_password(&key, "another-password")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("{} is not a valid token.", key));

        // Row still exists for audit.
        let tokens = repos
            .tokens()
            .action_tokens_for_user(&user.id, ActionTokenType::PasswordChange)
            .await
            .unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(!tokens[0].is_valid());
    }

    #[tokio::test]
    async fn login_reuses_valid_session_token() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, true, false);
        service.register(signup("ada@example.com")).await.unwrap();

        let first = service
            .login("ada@example.com", "long-enough-password")
            .await
            .unwrap();
        let second = service
            .login("ada@example.com", "long-enough-password")
            .await
            .unwrap();
        assert_eq!(first.key, second.key);
    }

    #[tokio::test]
    async fn expired_session_is_replaced_on_login() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos.clone(), true, false);
        let user = service.register(signup("ada@example.com")).await.unwrap().user;

        let stale = TemporaryToken {
            expires: Utc::now() - Duration::minutes(1),
            ..TemporaryToken::new(user.id.clone(), "stale-key", 10)
        };
        repos.tokens().create_temporary_token(stale).await.unwrap();

        // Expired key never authenticates.
        assert!(service.authenticate("stale-key").await.is_err());

        let fresh = service
            .login("ada@example.com", "long-enough-password")
            .await
            .unwrap();
        assert_ne!(fresh.key, "stale-key");
        assert!(fresh.expires > Utc::now());

        let authed = service.authenticate(&fresh.key).await.unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[tokio::test]
    async fn wrong_credentials_are_non_field_errors() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, true, false);
        service.register(signup("ada@example.com")).await.unwrap();

        let err = service
            .login("ada@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Fields(_)));
    }

    #[tokio::test]
    async fn inactive_account_cannot_log_in() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, false, false);
        service.register(signup("ada@example.com")).await.unwrap();

        assert!(service
            .login("ada@example.com", "long-enough-password")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn logout_only_deletes_own_token() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = test_service(repos, true, false);
        let ada = service.register(signup("ada@example.com")).await.unwrap().user;
        let bob = service.register(signup("bob@example.com")).await.unwrap().user;

        let ada_token = service
            .login("ada@example.com", "long-enough-password")
            .await
            .unwrap();

        let err = service.logout(&bob, &ada_token.key).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        service.logout(&ada, &ada_token.key).await.unwrap();
        assert!(service.authenticate(&ada_token.key).await.is_err());
    }
}
