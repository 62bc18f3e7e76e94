//! Token domain entities
//!
//! Two kinds of tokens drive the account workflows:
//!
//! - [`ActionToken`]: single-purpose, typed tokens (account activation,
//!   email change, password change). Activation and email-change tokens are
//!   deleted when consumed; password-change tokens are flagged `expired`
//!   instead so an audit trail remains.
//! - [`TemporaryToken`]: per-user session token with a rolling expiry. An
//!   expired token never authenticates; the next login replaces it.

use chrono::{DateTime, Duration, Utc};

/// Purpose of an [`ActionToken`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTokenType {
    AccountActivation,
    EmailChange,
    PasswordChange,
}

impl ActionTokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountActivation => "account_activation",
            Self::EmailChange => "email_change",
            Self::PasswordChange => "password_change",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "account_activation" => Some(Self::AccountActivation),
            "email_change" => Some(Self::EmailChange),
            "password_change" => Some(Self::PasswordChange),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionTokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single-purpose workflow token
#[derive(Debug, Clone, PartialEq)]
pub struct ActionToken {
    pub id: String,
    pub user_id: String,
    pub token_type: ActionTokenType,
    /// Opaque lookup key handed to the user (in an email link)
    pub key: String,
    pub expired: bool,
    /// Structured payload, e.g. the pending email for an email-change token
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl ActionToken {
    pub fn new(
        user_id: impl Into<String>,
        token_type: ActionTokenType,
        key: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            token_type,
            key: key.into(),
            expired: false,
            data,
            created_at: Utc::now(),
        }
    }

    /// Mark the token expired. The row is kept.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    pub fn is_valid(&self) -> bool {
        !self.expired
    }

    /// Pending email carried by an email-change token, if any.
    pub fn pending_email(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.get("email"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Pending university id carried by an email-change token, if any.
    pub fn pending_university_id(&self) -> Option<i32> {
        self.data
            .as_ref()
            .and_then(|d| d.get("university_id"))
            .and_then(|v| v.as_i64())
            .map(|v| v as i32)
    }
}

/// Session token with a rolling expiry. One per user.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporaryToken {
    pub key: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl TemporaryToken {
    pub fn new(user_id: impl Into<String>, key: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            user_id: user_id.into(),
            expires: now + Duration::minutes(ttl_minutes),
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires
    }
}

// ── Tests ──────────────────────────────────────────────────────
