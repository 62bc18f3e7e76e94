//! Paysafe customer-vault and card-payments client
//!
//! Implements [`PaymentGateway`] against the Paysafe REST API. Vault calls
//! go under `customervault/v1/`, charges under
//! `cardpayments/v1/accounts/{account}/auths/` with `settleWithAuth` so the
//! authorization settles immediately.

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, Method, RequestBuilder};
use tracing::{debug, warn};

use crate::config::PaysafeConfig;
use crate::domain::payment::{GatewayResponse, PaymentGateway};
use crate::domain::{DomainError, DomainResult};

pub struct PaysafeGateway {
    client: Client,
    config: PaysafeConfig,
}

impl PaysafeGateway {
    pub fn new(config: PaysafeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Vault base, e.g. `https://api.test.paysafe.com/customervault/v1/`.
    pub fn vault_base(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.vault_url)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.config.user, Some(&self.config.password))
    }

    async fn execute(&self, builder: RequestBuilder) -> DomainResult<GatewayResponse> {
        let response = builder.send().await.map_err(|e| DomainError::Gateway {
            status: 0,
            body: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Paysafe call failed with {}: {}", status, text);
            return Err(DomainError::Gateway {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        Ok(GatewayResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PaymentGateway for PaysafeGateway {
    async fn create_profile(&self, payload: serde_json::Value) -> DomainResult<GatewayResponse> {
        let url = format!("{}profiles/", self.vault_base());
        debug!("Creating Paysafe profile");
        self.execute(self.request(Method::POST, url).json(&payload))
            .await
    }

    async fn get_profile(&self, profile_id: &str) -> DomainResult<GatewayResponse> {
        let url = format!("{}profiles/{}?fields=cards", self.vault_base(), profile_id);
        self.execute(self.request(Method::GET, url)).await
    }

    async fn update_card(
        &self,
        profile_id: &str,
        card_id: &str,
        single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        let url = format!(
            "{}profiles/{}/cards/{}",
            self.vault_base(),
            profile_id,
            card_id
        );
        let payload = serde_json::json!({ "singleUseToken": single_use_token });
        self.execute(self.request(Method::PUT, url).json(&payload))
            .await
    }

    async fn create_card(
        &self,
        profile_id: &str,
        single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        let url = format!("{}profiles/{}/cards/", self.vault_base(), profile_id);
        let payload = serde_json::json!({ "singleUseToken": single_use_token });
        self.execute(self.request(Method::POST, url).json(&payload))
            .await
    }

    async fn charge(&self, amount: i64, payment_token: &str) -> DomainResult<GatewayResponse> {
        let url = format!(
            "{}{}accounts/{}/auths/",
            self.config.base_url, self.config.card_url, self.config.account_number
        );
        let payload = serde_json::json!({
            "merchantRefNum": rand::thread_rng().gen_range(0..10000),
            "amount": amount,
            "settleWithAuth": true,
            "card": { "paymentToken": payment_token },
        });
        debug!("Charging {} through Paysafe", amount);
        self.execute(self.request(Method::POST, url).json(&payload))
            .await
    }
}
