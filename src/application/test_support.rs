//! In-memory repository and service stubs for application-layer tests.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::identity::IdentityService;
use crate::config::SecurityConfig;
use crate::domain::catalog::{CatalogEntry, CatalogKind, CatalogRepository};
use crate::domain::payment::{
    GatewayResponse, PaymentGateway, PaymentProfile, PaymentProfileRepository,
};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationWindow};
use crate::domain::token::{ActionToken, ActionTokenType, TemporaryToken, TokenRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::workplace::{Period, SlotContext, TimeSlot, Workplace, WorkplaceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::email::EmailService;

#[derive(Default)]
pub struct InMemoryRepos {
    users: Mutex<Vec<User>>,
    action_tokens: Mutex<Vec<ActionToken>>,
    temporary_tokens: Mutex<Vec<TemporaryToken>>,
    catalogs: Mutex<Vec<CatalogEntry>>,
    workplaces: Mutex<Vec<Workplace>>,
    volunteers: Mutex<Vec<(i32, String)>>,
    periods: Mutex<Vec<Period>>,
    time_slots: Mutex<Vec<TimeSlot>>,
    reservations: Mutex<Vec<Reservation>>,
    payment_profiles: Mutex<Vec<PaymentProfile>>,
    next_id: AtomicI32,
}

impl InMemoryRepos {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl RepositoryProvider for InMemoryRepos {
    fn users(&self) -> &dyn UserRepository {
        self
    }
    fn tokens(&self) -> &dyn TokenRepository {
        self
    }
    fn catalogs(&self) -> &dyn CatalogRepository {
        self
    }
    fn workplaces(&self) -> &dyn WorkplaceRepository {
        self
    }
    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }
    fn payment_profiles(&self) -> &dyn PaymentProfileRepository {
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryRepos {
    async fn create(&self, user: User) -> DomainResult<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(DomainError::not_found("User"))?;
        *slot = user.clone();
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<User>, u64)> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        let total = users.len() as u64;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        let items = users
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok((items, total))
    }

    async fn all_ordered(&self) -> DomainResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }
}

#[async_trait]
impl TokenRepository for InMemoryRepos {
    async fn create_action_token(&self, token: ActionToken) -> DomainResult<ActionToken> {
        self.action_tokens.lock().unwrap().push(token.clone());
        Ok(token)
    }

    async fn find_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        Ok(self
            .action_tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.key == key && t.token_type == token_type)
            .cloned()
            .collect())
    }

    async fn find_valid_action_tokens(
        &self,
        key: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        Ok(self
            .action_tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.key == key && t.token_type == token_type && !t.expired)
            .cloned()
            .collect())
    }

    async fn action_tokens_for_user(
        &self,
        user_id: &str,
        token_type: ActionTokenType,
    ) -> DomainResult<Vec<ActionToken>> {
        Ok(self
            .action_tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.token_type == token_type)
            .cloned()
            .collect())
    }

    async fn delete_action_token(&self, id: &str) -> DomainResult<()> {
        self.action_tokens.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn expire_action_token(&self, id: &str) -> DomainResult<()> {
        if let Some(token) = self
            .action_tokens
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.id == id)
        {
            token.expired = true;
        }
        Ok(())
    }

    async fn create_temporary_token(&self, token: TemporaryToken) -> DomainResult<TemporaryToken> {
        self.temporary_tokens.lock().unwrap().push(token.clone());
        Ok(token)
    }

    async fn find_temporary_token_by_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Option<TemporaryToken>> {
        Ok(self
            .temporary_tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn find_temporary_token_by_key(&self, key: &str) -> DomainResult<Option<TemporaryToken>> {
        Ok(self
            .temporary_tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.key == key)
            .cloned())
    }

    async fn update_temporary_token(&self, token: TemporaryToken) -> DomainResult<()> {
        let mut tokens = self.temporary_tokens.lock().unwrap();
        if let Some(slot) = tokens.iter_mut().find(|t| t.key == token.key) {
            *slot = token;
        }
        Ok(())
    }

    async fn delete_temporary_token(&self, key: &str) -> DomainResult<()> {
        self.temporary_tokens.lock().unwrap().retain(|t| t.key != key);
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepos {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntry>> {
        let mut entries: Vec<_> = self
            .catalogs
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn find_by_id(&self, kind: CatalogKind, id: i32) -> DomainResult<Option<CatalogEntry>> {
        Ok(self
            .catalogs
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.kind == kind && e.id == id)
            .cloned())
    }

    async fn create(&self, kind: CatalogKind, name: &str) -> DomainResult<CatalogEntry> {
        let entry = CatalogEntry {
            id: self.next_id(),
            kind,
            name: name.to_string(),
        };
        self.catalogs.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, kind: CatalogKind, id: i32, name: &str) -> DomainResult<CatalogEntry> {
        let mut catalogs = self.catalogs.lock().unwrap();
        let entry = catalogs
            .iter_mut()
            .find(|e| e.kind == kind && e.id == id)
            .ok_or(DomainError::not_found("CatalogEntry"))?;
        entry.name = name.to_string();
        Ok(entry.clone())
    }

    async fn delete(&self, kind: CatalogKind, id: i32) -> DomainResult<()> {
        self.catalogs
            .lock()
            .unwrap()
            .retain(|e| !(e.kind == kind && e.id == id));
        Ok(())
    }
}

#[async_trait]
impl WorkplaceRepository for InMemoryRepos {
    async fn create_workplace(&self, mut w: Workplace) -> DomainResult<Workplace> {
        w.id = self.next_id();
        self.workplaces.lock().unwrap().push(w.clone());
        Ok(w)
    }

    async fn update_workplace(&self, w: Workplace) -> DomainResult<Workplace> {
        let mut workplaces = self.workplaces.lock().unwrap();
        let slot = workplaces
            .iter_mut()
            .find(|x| x.id == w.id)
            .ok_or(DomainError::not_found("Workplace"))?;
        *slot = w.clone();
        Ok(w)
    }

    async fn find_workplace(&self, id: i32) -> DomainResult<Option<Workplace>> {
        Ok(self
            .workplaces
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list_workplaces(&self) -> DomainResult<Vec<Workplace>> {
        Ok(self.workplaces.lock().unwrap().clone())
    }

    async fn set_volunteers(&self, workplace_id: i32, user_ids: Vec<String>) -> DomainResult<()> {
        let mut volunteers = self.volunteers.lock().unwrap();
        volunteers.retain(|(w, _)| *w != workplace_id);
        volunteers.extend(user_ids.into_iter().map(|u| (workplace_id, u)));
        Ok(())
    }

    async fn is_volunteer(&self, workplace_id: i32, user_id: &str) -> DomainResult<bool> {
        Ok(self
            .volunteers
            .lock()
            .unwrap()
            .iter()
            .any(|(w, u)| *w == workplace_id && u == user_id))
    }

    async fn create_period(&self, mut p: Period) -> DomainResult<Period> {
        p.id = self.next_id();
        self.periods.lock().unwrap().push(p.clone());
        Ok(p)
    }

    async fn update_period(&self, p: Period) -> DomainResult<Period> {
        let mut periods = self.periods.lock().unwrap();
        let slot = periods
            .iter_mut()
            .find(|x| x.id == p.id)
            .ok_or(DomainError::not_found("Period"))?;
        *slot = p.clone();
        Ok(p)
    }

    async fn find_period(&self, id: i32) -> DomainResult<Option<Period>> {
        Ok(self
            .periods
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_periods(&self) -> DomainResult<Vec<Period>> {
        Ok(self.periods.lock().unwrap().clone())
    }

    async fn periods_for_workplace(&self, workplace_id: i32) -> DomainResult<Vec<Period>> {
        Ok(self
            .periods
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.workplace_id == Some(workplace_id))
            .cloned()
            .collect())
    }

    async fn create_time_slot(&self, mut s: TimeSlot) -> DomainResult<TimeSlot> {
        s.id = self.next_id();
        self.time_slots.lock().unwrap().push(s.clone());
        Ok(s)
    }

    async fn update_time_slot(&self, s: TimeSlot) -> DomainResult<TimeSlot> {
        let mut slots = self.time_slots.lock().unwrap();
        let slot = slots
            .iter_mut()
            .find(|x| x.id == s.id)
            .ok_or(DomainError::not_found("TimeSlot"))?;
        *slot = s.clone();
        Ok(s)
    }

    async fn find_time_slot(&self, id: i32) -> DomainResult<Option<TimeSlot>> {
        Ok(self
            .time_slots
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list_time_slots(&self) -> DomainResult<Vec<TimeSlot>> {
        Ok(self.time_slots.lock().unwrap().clone())
    }

    async fn slot_context(&self, time_slot_id: i32) -> DomainResult<Option<SlotContext>> {
        let Some(slot) = self.find_time_slot(time_slot_id).await? else {
            return Ok(None);
        };
        let Some(period) = self.find_period(slot.period_id).await? else {
            return Ok(None);
        };
        let workplace = match period.workplace_id {
            Some(id) => self.find_workplace(id).await?,
            None => None,
        };
        Ok(Some(SlotContext {
            slot,
            period,
            workplace,
        }))
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepos {
    async fn create(&self, mut r: Reservation) -> DomainResult<Reservation> {
        r.id = self.next_id();
        self.reservations.lock().unwrap().push(r.clone());
        Ok(r)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_active_for_user_and_slot(
        &self,
        user_id: &str,
        time_slot_id: i32,
    ) -> DomainResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.time_slot_id == time_slot_id && r.is_active())
            .cloned())
    }

    async fn active_windows_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<ReservationWindow>> {
        let reservations = self.reservations.lock().unwrap().clone();
        let slots = self.time_slots.lock().unwrap().clone();
        Ok(reservations
            .into_iter()
            .filter(|r| r.user_id == user_id && r.is_active())
            .filter_map(|r| {
                slots.iter().find(|s| s.id == r.time_slot_id).map(|s| {
                    ReservationWindow {
                        reservation_id: r.id,
                        time_slot_id: s.id,
                        start_time: s.start_time,
                        end_time: s.end_time,
                    }
                })
            })
            .collect())
    }

    async fn count_active_for_slot(&self, time_slot_id: i32) -> DomainResult<i64> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.time_slot_id == time_slot_id && r.is_active())
            .count() as i64)
    }

    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<Reservation>, u64)> {
        let mut all = self.reservations.lock().unwrap().clone();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        let total = all.len() as u64;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        let items = all.into_iter().skip(start).take(page_size as usize).collect();
        Ok((items, total))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        page: u64,
        page_size: u64,
    ) -> DomainResult<(Vec<Reservation>, u64)> {
        let mut all: Vec<_> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        let total = all.len() as u64;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        let items = all.into_iter().skip(start).take(page_size as usize).collect();
        Ok((items, total))
    }

    async fn update(&self, r: Reservation) -> DomainResult<Reservation> {
        let mut reservations = self.reservations.lock().unwrap();
        let slot = reservations
            .iter_mut()
            .find(|x| x.id == r.id)
            .ok_or(DomainError::not_found("Reservation"))?;
        *slot = r.clone();
        Ok(r)
    }
}

#[async_trait]
impl PaymentProfileRepository for InMemoryRepos {
    async fn create(&self, mut p: PaymentProfile) -> DomainResult<PaymentProfile> {
        p.id = self.next_id();
        self.payment_profiles.lock().unwrap().push(p.clone());
        Ok(p)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentProfile>> {
        Ok(self
            .payment_profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_for_owner(&self, owner_id: &str) -> DomainResult<Vec<PaymentProfile>> {
        Ok(self
            .payment_profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<PaymentProfile>> {
        Ok(self.payment_profiles.lock().unwrap().clone())
    }
}

// ── Email stubs ────────────────────────────────────────────────

/// Email service that records nothing and always succeeds (or is off).
pub struct NullEmail {
    pub enabled: bool,
}

#[async_trait]
impl EmailService for NullEmail {
    fn enabled(&self) -> bool {
        self.enabled
    }

    async fn send_activation(&self, _recipient: &User, _token_key: &str) -> DomainResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(DomainError::EmailServiceDisabled)
        }
    }

    async fn send_password_reset(&self, _recipient: &User, _token_key: &str) -> DomainResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(DomainError::EmailServiceDisabled)
        }
    }
}

/// Email service that is configured but whose deliveries all fail.
pub struct FailingEmail;

#[async_trait]
impl EmailService for FailingEmail {
    fn enabled(&self) -> bool {
        true
    }

    async fn send_activation(&self, _recipient: &User, _token_key: &str) -> DomainResult<()> {
        Err(DomainError::Detail("Mail delivery failed".into()))
    }

    async fn send_password_reset(&self, _recipient: &User, _token_key: &str) -> DomainResult<()> {
        Err(DomainError::Detail("Mail delivery failed".into()))
    }
}

// ── Payment gateway stub ───────────────────────────────────────

/// Gateway returning canned bodies, recording nothing.
pub struct StubGateway {
    pub profile_id: String,
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_profile(&self, _payload: serde_json::Value) -> DomainResult<GatewayResponse> {
        Ok(GatewayResponse {
            status: 201,
            body: serde_json::json!({ "id": self.profile_id }),
        })
    }

    async fn get_profile(&self, profile_id: &str) -> DomainResult<GatewayResponse> {
        Ok(GatewayResponse {
            status: 200,
            body: serde_json::json!({
                "id": profile_id,
                "cards": [{ "id": "card-1", "lastDigits": "1111" }],
            }),
        })
    }

    async fn update_card(
        &self,
        _profile_id: &str,
        card_id: &str,
        _single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        Ok(GatewayResponse {
            status: 200,
            body: serde_json::json!({ "id": card_id }),
        })
    }

    async fn create_card(
        &self,
        _profile_id: &str,
        _single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        Ok(GatewayResponse {
            status: 201,
            body: serde_json::json!({ "id": "card-2" }),
        })
    }

    async fn charge(&self, amount: i64, _payment_token: &str) -> DomainResult<GatewayResponse> {
        Ok(GatewayResponse {
            status: 200,
            body: serde_json::json!({ "amount": amount, "settled": true }),
        })
    }
}

/// Gateway that declines every operation, for exercising the raise path.
pub struct DecliningGateway;

fn declined() -> DomainError {
    DomainError::Gateway {
        status: 402,
        body: r#"{"error":{"code":"3022","message":"The card has been declined."}}"#.to_string(),
    }
}

#[async_trait]
impl PaymentGateway for DecliningGateway {
    async fn create_profile(&self, _payload: serde_json::Value) -> DomainResult<GatewayResponse> {
        Err(declined())
    }

    async fn get_profile(&self, _profile_id: &str) -> DomainResult<GatewayResponse> {
        Err(declined())
    }

    async fn update_card(
        &self,
        _profile_id: &str,
        _card_id: &str,
        _single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        Err(declined())
    }

    async fn create_card(
        &self,
        _profile_id: &str,
        _single_use_token: &str,
    ) -> DomainResult<GatewayResponse> {
        Err(declined())
    }

    async fn charge(&self, _amount: i64, _payment_token: &str) -> DomainResult<GatewayResponse> {
        Err(declined())
    }
}

/// Build an [`IdentityService`] over the given repos with the usual knobs.
pub fn test_service(
    repos: Arc<InMemoryRepos>,
    auto_activate: bool,
    email_enabled: bool,
) -> IdentityService {
    IdentityService::new(
        repos,
        Arc::new(NullEmail {
            enabled: email_enabled,
        }),
        SecurityConfig {
            auto_activate_users: auto_activate,
            ..SecurityConfig::default()
        },
    )
}
