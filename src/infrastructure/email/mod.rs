//! Transactional email delivery
//!
//! Mail goes out through an HTTP mail API. Callers treat delivery failure
//! as a degraded success: the triggering operation still completes and the
//! response carries a warning `detail` instead.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EmailConfig;
use crate::domain::user::User;
use crate::domain::{DomainError, DomainResult};

/// Replace the `{{token}}` placeholder in a frontend URL template.
pub fn render_token_url(template: &str, token_key: &str) -> String {
    template.replace("{{token}}", token_key)
}

#[async_trait]
pub trait EmailService: Send + Sync {
    /// Whether the email subsystem is configured at all. When false, the
    /// forgot-password endpoint answers 501 and signup mail is skipped.
    fn enabled(&self) -> bool;

    /// Send the account-activation email carrying the activation link.
    async fn send_activation(&self, recipient: &User, token_key: &str) -> DomainResult<()>;

    /// Send the forgot-password email carrying the reset link.
    async fn send_password_reset(&self, recipient: &User, token_key: &str) -> DomainResult<()>;
}

/// HTTP mail API client.
pub struct HttpEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

#[derive(Serialize)]
struct MailPayload<'a> {
    sender: &'a str,
    to: &'a str,
    template: &'a str,
    variables: serde_json::Value,
}

impl HttpEmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn send(
        &self,
        recipient: &User,
        template: &str,
        variables: serde_json::Value,
    ) -> DomainResult<()> {
        if !self.config.enabled {
            return Err(DomainError::EmailServiceDisabled);
        }

        debug!("Sending {} email to {}", template, recipient.email);
        let payload = MailPayload {
            sender: &self.config.sender,
            to: &recipient.email,
            template,
            variables,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Mail API unreachable: {}", e);
                DomainError::Detail(format!("Mail delivery failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Mail API answered {} for {}", status, recipient.email);
            return Err(DomainError::Detail(format!(
                "Mail delivery failed with status {}",
                status
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    fn enabled(&self) -> bool {
        self.config.enabled
    }

    async fn send_activation(&self, recipient: &User, token_key: &str) -> DomainResult<()> {
        let activation_url = render_token_url(&self.config.activation_url, token_key);
        self.send(
            recipient,
            "CONFIRM_SIGN_UP",
            serde_json::json!({
                "activation_url": activation_url,
                "first_name": recipient.first_name,
                "last_name": recipient.last_name,
            }),
        )
        .await
    }

    async fn send_password_reset(&self, recipient: &User, token_key: &str) -> DomainResult<()> {
        let forgot_password_url = render_token_url(&self.config.password_reset_url, token_key);
        self.send(
            recipient,
            "FORGOT_PASSWORD",
            serde_json::json!({ "forgot_password_url": forgot_password_url }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_placeholder_is_replaced() {
        assert_eq!(
            render_token_url("https://example.com/activate/{{token}}", "abc123"),
            "https://example.com/activate/abc123"
        );
    }

    #[test]
    fn template_without_placeholder_is_untouched() {
        assert_eq!(
            render_token_url("https://example.com/activate", "abc123"),
            "https://example.com/activate"
        );
    }

    #[test]
    fn disabled_service_reports_disabled() {
        let service = HttpEmailService::new(EmailConfig::default());
        assert!(!service.enabled());
    }
}
