//! Payment profile service — application-layer orchestration
//!
//! Card numbers never touch this system. Creation forwards the frontend's
//! single-use token to the vault and stores the returned profile id; reads
//! fetch the profile live and attach it as `external_data`.

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::domain::payment::{PaymentGateway, PaymentProfile};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::domain::{DomainError, DomainResult};

/// A stored profile merged with the vault's live view of it.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: PaymentProfile,
    pub external_data: serde_json::Value,
}

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    gateway: Arc<dyn PaymentGateway>,
    /// Vault base URL recorded on each stored profile.
    vault_url: String,
}

impl PaymentService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        gateway: Arc<dyn PaymentGateway>,
        vault_url: String,
    ) -> Self {
        Self {
            repos,
            gateway,
            vault_url,
        }
    }

    fn owned_or_not_found(actor: &User, profile: PaymentProfile) -> DomainResult<PaymentProfile> {
        if actor.is_staff || profile.owner_id == actor.id {
            Ok(profile)
        } else {
            Err(DomainError::not_found("PaymentProfile"))
        }
    }

    /// Create a vault profile from a single-use card token and persist the
    /// reference.
    pub async fn create_profile(
        &self,
        owner: &User,
        name: &str,
        single_use_token: &str,
    ) -> DomainResult<ProfileView> {
        let payload = serde_json::json!({
            "merchantCustomerId": rand::thread_rng().gen_range(0..10000),
            "locale": "en_US",
            "firstName": owner.first_name,
            "lastName": owner.last_name,
            "email": owner.email,
            "phone": owner.phone,
            "card": { "singleUseToken": single_use_token },
        });
        let response = self.gateway.create_profile(payload).await?;

        let external_api_id = response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| DomainError::Gateway {
                status: response.status,
                body: "Vault answer carried no profile id".to_string(),
            })?
            .to_string();

        let profile = self
            .repos
            .payment_profiles()
            .create(PaymentProfile {
                id: 0,
                name: name.to_string(),
                owner_id: owner.id.clone(),
                external_api_id,
                external_api_url: self.vault_url.clone(),
            })
            .await?;
        info!("Payment profile {} created for user {}", profile.id, owner.id);

        Ok(ProfileView {
            external_data: response.body,
            profile,
        })
    }

    /// Fetch one profile with its live card data.
    pub async fn profile(&self, actor: &User, id: i32) -> DomainResult<ProfileView> {
        let profile = self
            .repos
            .payment_profiles()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("PaymentProfile"))?;
        let profile = Self::owned_or_not_found(actor, profile)?;

        let response = self.gateway.get_profile(&profile.external_api_id).await?;
        Ok(ProfileView {
            profile,
            external_data: response.body,
        })
    }

    /// List the caller's profiles (staff see everyone's), each with live
    /// card data.
    pub async fn profiles(&self, actor: &User) -> DomainResult<Vec<ProfileView>> {
        let stored = if actor.is_staff {
            self.repos.payment_profiles().list_all().await?
        } else {
            self.repos.payment_profiles().list_for_owner(&actor.id).await?
        };

        let mut views = Vec::with_capacity(stored.len());
        for profile in stored {
            let response = self.gateway.get_profile(&profile.external_api_id).await?;
            views.push(ProfileView {
                profile,
                external_data: response.body,
            });
        }
        Ok(views)
    }

    /// Attach a new card to a profile. Local state is untouched.
    pub async fn add_card(
        &self,
        actor: &User,
        profile_id: i32,
        single_use_token: &str,
    ) -> DomainResult<serde_json::Value> {
        let profile = self
            .repos
            .payment_profiles()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::not_found("PaymentProfile"))?;
        let profile = Self::owned_or_not_found(actor, profile)?;

        let response = self
            .gateway
            .create_card(&profile.external_api_id, single_use_token)
            .await?;
        Ok(response.body)
    }

    /// Replace a card on a profile. Local state is untouched.
    pub async fn update_card(
        &self,
        actor: &User,
        profile_id: i32,
        card_id: &str,
        single_use_token: &str,
    ) -> DomainResult<serde_json::Value> {
        let profile = self
            .repos
            .payment_profiles()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::not_found("PaymentProfile"))?;
        let profile = Self::owned_or_not_found(actor, profile)?;

        let response = self
            .gateway
            .update_card(&profile.external_api_id, card_id, single_use_token)
            .await?;
        Ok(response.body)
    }

    /// Authorize and settle a charge against a payment token.
    pub async fn charge(&self, amount: i64, payment_token: &str) -> DomainResult<serde_json::Value> {
        let response = self.gateway.charge(amount, payment_token).await?;
        Ok(response.body)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{DecliningGateway, InMemoryRepos, StubGateway};

    fn member(id: &str) -> User {
        let mut u = User::new(format!("{}@example.com", id), "hash");
        u.id = id.to_string();
        u.activate();
        u
    }

    fn service(repos: Arc<InMemoryRepos>) -> PaymentService {
        PaymentService::new(
            repos,
            Arc::new(StubGateway {
                profile_id: "vault-profile-1".into(),
            }),
            "https://api.test.paysafe.com/customervault/v1/".into(),
        )
    }

    #[tokio::test]
    async fn create_stores_only_the_vault_reference() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = service(repos.clone());
        let owner = member("u1");

        let view = service
            .create_profile(&owner, "My card", "single-use-token")
            .await
            .unwrap();
        assert_eq!(view.profile.external_api_id, "vault-profile-1");
        assert_eq!(view.profile.owner_id, "u1");

        let stored = repos.payment_profiles().list_for_owner("u1").await.unwrap();
        assert_eq!(stored.len(), 1);
        // No card data in the stored record.
        assert_eq!(stored[0].external_api_id, "vault-profile-1");
    }

    #[tokio::test]
    async fn reads_merge_live_vault_data() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = service(repos);
        let owner = member("u1");

        let created = service
            .create_profile(&owner, "My card", "single-use-token")
            .await
            .unwrap();
        let view = service.profile(&owner, created.profile.id).await.unwrap();
        assert!(view.external_data.get("cards").is_some());
    }

    #[tokio::test]
    async fn foreign_profiles_are_hidden() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = service(repos);
        let owner = member("u1");
        let stranger = member("u2");

        let created = service
            .create_profile(&owner, "My card", "single-use-token")
            .await
            .unwrap();

        let err = service.profile(&stranger, created.profile.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(service.profiles(&stranger).await.unwrap().is_empty());

        let mut staff = member("boss");
        staff.is_staff = true;
        assert_eq!(service.profiles(&staff).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn card_operations_do_not_touch_local_state() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = service(repos.clone());
        let owner = member("u1");

        let created = service
            .create_profile(&owner, "My card", "single-use-token")
            .await
            .unwrap();
        service
            .add_card(&owner, created.profile.id, "another-token")
            .await
            .unwrap();
        service
            .update_card(&owner, created.profile.id, "card-1", "replacement-token")
            .await
            .unwrap();

        let stored = repos.payment_profiles().list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], created.profile);
    }

    #[tokio::test]
    async fn charge_settles_through_the_gateway() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = service(repos);

        let body = service.charge(25000, "payment-token").await.unwrap();
        assert_eq!(body["amount"], 25000);
        assert_eq!(body["settled"], true);
    }

    #[tokio::test]
    async fn declined_charge_surfaces_the_gateway_error() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = PaymentService::new(
            repos,
            Arc::new(DecliningGateway),
            "https://api.test.paysafe.com/customervault/v1/".into(),
        );

        let err = service.charge(25000, "payment-token").await.unwrap_err();
        match err {
            DomainError::Gateway { status, body } => {
                assert_eq!(status, 402);
                assert!(body.contains("declined"));
            }
            other => panic!("expected gateway error, got {:?}", other),
        }
    }
}
