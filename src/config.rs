//! Application configuration
//!
//! Loaded from a TOML file (default: `~/.config/atelier-api/config.toml`,
//! overridable through the `ATELIER_CONFIG` environment variable). Every
//! section has sensible defaults so the server can boot without a file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub email: EmailConfig,
    pub paysafe: PaysafeConfig,
    pub admin: AdminConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SeaORM connection URL
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./atelier.db?mode=rwc".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridable with RUST_LOG)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Account and token policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Activate new accounts immediately instead of requiring the
    /// activation-token flow.
    pub auto_activate_users: bool,
    /// Lifetime of a temporary authentication token, in minutes.
    pub temporary_token_minutes: i64,
    /// Minimum accepted password length.
    pub password_min_length: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            auto_activate_users: false,
            temporary_token_minutes: 300,
            password_min_length: 8,
        }
    }
}

/// Transactional email settings
///
/// Mail is delivered through an HTTP mail API. When `enabled` is false the
/// password-reset endpoint answers 501 and signup emails are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub enabled: bool,
    /// Base URL of the HTTP mail API
    pub api_url: String,
    pub api_key: String,
    pub sender: String,
    /// Frontend URL template for the activation button; `{{token}}` is
    /// replaced with the action-token key.
    pub activation_url: String,
    /// Frontend URL template for the forgot-password button.
    pub password_reset_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: "https://api.mail.example.com/v3/send".to_string(),
            api_key: String::new(),
            sender: "noreply@example.com".to_string(),
            activation_url: "https://example.com/activate/{{token}}".to_string(),
            password_reset_url: "https://example.com/reset-password/{{token}}".to_string(),
        }
    }
}

/// External payment vault (Paysafe) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaysafeConfig {
    pub base_url: String,
    /// Customer vault path, e.g. "customervault/v1/"
    pub vault_url: String,
    /// Card payments path, e.g. "cardpayments/v1/"
    pub card_url: String,
    pub account_number: String,
    pub user: String,
    pub password: String,
}

impl Default for PaysafeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.test.paysafe.com/".to_string(),
            vault_url: "customervault/v1/".to_string(),
            card_url: "cardpayments/v1/".to_string(),
            account_number: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

/// Bootstrap administrator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "change-me-immediately".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
        }
    }
}

/// Default configuration file location
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("atelier-api")
        .join("config.toml")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

// ── Tests ──────────────────────────────────────────────────────
