//! Reservation and availability service — application-layer orchestration
//!
//! Overlap checks are read-then-write without locking; on SQLite there is
//! no range-exclusion constraint to back them up, so two simultaneous
//! writers can slip through. Capacity is reported, never enforced:
//! `places_remaining` may go negative.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::policy::{allows, Action, Resource, Role};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{CancelationReason, Reservation};
use crate::domain::user::User;
use crate::domain::workplace::{windows_overlap, Period, SlotContext, TimeSlot};
use crate::domain::{DomainError, DomainResult, FieldErrors};

const PERIOD_OVERLAP: &str =
    "An existing period overlaps with the provided start_date and end_date.";
const RESERVATION_OVERLAP: &str =
    "This reservation overlaps with another active reservations for this user.";
const NO_WORKPLACE: &str = "No reservation are allowed for time slots without workplace.";
const PRESENCE_ONLY: &str = "Only is_present can be updated. To change other fields, delete \
                             this reservation and create a new one.";

/// A time slot with its resolved context and remaining capacity.
#[derive(Debug, Clone)]
pub struct SlotAvailability {
    pub context: SlotContext,
    /// None when the slot's period has no workplace.
    pub places_remaining: Option<i64>,
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Periods ─────────────────────────────────────────────────

    /// Reject a period whose window collides with another period of the
    /// same workplace. `exclude_id` skips the period being updated.
    async fn check_period_overlap(
        &self,
        period: &Period,
        exclude_id: Option<i32>,
    ) -> DomainResult<()> {
        let Some(workplace_id) = period.workplace_id else {
            return Ok(());
        };
        let siblings = self
            .repos
            .workplaces()
            .periods_for_workplace(workplace_id)
            .await?;
        let collision = siblings
            .iter()
            .filter(|p| Some(p.id) != exclude_id)
            .any(|p| p.overlaps(period.start_date, period.end_date));
        if collision {
            return Err(DomainError::DetailList(vec![PERIOD_OVERLAP.to_string()]));
        }
        Ok(())
    }

    pub async fn create_period(&self, period: Period) -> DomainResult<Period> {
        Period::validate_window(period.start_date, period.end_date)?;
        self.check_period_overlap(&period, None).await?;
        self.repos.workplaces().create_period(period).await
    }

    pub async fn update_period(&self, period: Period) -> DomainResult<Period> {
        Period::validate_window(period.start_date, period.end_date)?;
        self.check_period_overlap(&period, Some(period.id)).await?;
        self.repos.workplaces().update_period(period).await
    }

    // ── Time slots ──────────────────────────────────────────────

    fn validate_slot_window(slot: &TimeSlot) -> DomainResult<()> {
        if slot.start_time >= slot.end_time {
            let mut errors = FieldErrors::new();
            errors.add("end_time", "End time must be later than start_time.");
            errors.add("start_time", "Start time must be earlier than end_time.");
            return Err(DomainError::Fields(errors));
        }
        Ok(())
    }

    pub async fn create_time_slot(&self, slot: TimeSlot) -> DomainResult<TimeSlot> {
        Self::validate_slot_window(&slot)?;
        self.repos
            .workplaces()
            .find_period(slot.period_id)
            .await?
            .ok_or(DomainError::not_found("Period"))?;
        self.repos.workplaces().create_time_slot(slot).await
    }

    pub async fn update_time_slot(&self, slot: TimeSlot) -> DomainResult<TimeSlot> {
        Self::validate_slot_window(&slot)?;
        self.repos.workplaces().update_time_slot(slot).await
    }

    /// Resolve a slot with its period, workplace and remaining capacity.
    pub async fn availability(&self, time_slot_id: i32) -> DomainResult<SlotAvailability> {
        let context = self
            .repos
            .workplaces()
            .slot_context(time_slot_id)
            .await?
            .ok_or(DomainError::not_found("TimeSlot"))?;
        let active = self
            .repos
            .reservations()
            .count_active_for_slot(time_slot_id)
            .await?;
        let places_remaining = context.places_remaining(active);
        Ok(SlotAvailability {
            context,
            places_remaining,
        })
    }

    // ── Reservations ────────────────────────────────────────────

    /// Book a slot. Returns `(reservation, created)`: an existing active
    /// reservation on the same slot is returned as-is with `created`
    /// false, leaving no second row.
    pub async fn create_reservation(
        &self,
        user: &User,
        time_slot_id: i32,
    ) -> DomainResult<(Reservation, bool)> {
        let context = self
            .repos
            .workplaces()
            .slot_context(time_slot_id)
            .await?
            .ok_or(DomainError::not_found("TimeSlot"))?;

        if context.workplace.is_none() {
            return Err(DomainError::non_field(NO_WORKPLACE));
        }

        if let Some(existing) = self
            .repos
            .reservations()
            .find_active_for_user_and_slot(&user.id, time_slot_id)
            .await?
        {
            return Ok((existing, false));
        }

        let windows = self
            .repos
            .reservations()
            .active_windows_for_user(&user.id)
            .await?;
        let collides = windows.iter().any(|w| {
            windows_overlap(
                context.slot.start_time,
                context.slot.end_time,
                w.start_time,
                w.end_time,
            )
        });
        if collides {
            return Err(DomainError::non_field(RESERVATION_OVERLAP));
        }

        let reservation = self
            .repos
            .reservations()
            .create(Reservation::new(user.id.clone(), time_slot_id))
            .await?;
        info!(
            "Reservation {} created for user {} on slot {}",
            reservation.id, user.id, time_slot_id
        );
        Ok((reservation, true))
    }

    /// Validate a PATCH body that may only carry `is_present`.
    pub fn presence_from_patch(body: &serde_json::Value) -> DomainResult<bool> {
        let Some(object) = body.as_object() else {
            return Err(DomainError::field("is_present", PRESENCE_ONLY));
        };
        if object.keys().any(|k| k != "is_present") {
            return Err(DomainError::field("is_present", PRESENCE_ONLY));
        }
        object
            .get("is_present")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| DomainError::field("is_present", PRESENCE_ONLY))
    }

    /// Resolve the caller's role relative to a reservation. Volunteers of
    /// the slot's workplace may see active reservations only; everyone
    /// else without a relation gets a 404, not a 403.
    async fn reservation_role(
        &self,
        actor: &User,
        reservation: &Reservation,
    ) -> DomainResult<Role> {
        if actor.is_staff {
            return Ok(Role::Admin);
        }
        if reservation.user_id == actor.id {
            return Ok(Role::Owner);
        }
        if reservation.is_active() {
            if let Some(context) = self
                .repos
                .workplaces()
                .slot_context(reservation.time_slot_id)
                .await?
            {
                if let Some(workplace) = &context.workplace {
                    if self
                        .repos
                        .workplaces()
                        .is_volunteer(workplace.id, &actor.id)
                        .await?
                    {
                        return Ok(Role::Volunteer);
                    }
                }
            }
        }
        Err(DomainError::not_found("Reservation"))
    }

    /// Check a member in or out. Only the presence flag may change.
    pub async fn set_presence(
        &self,
        actor: &User,
        reservation_id: i32,
        is_present: bool,
    ) -> DomainResult<Reservation> {
        let mut reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::not_found("Reservation"))?;

        let role = self.reservation_role(actor, &reservation).await?;
        if !allows(role, Action::Update, Resource::Reservations) {
            return Err(DomainError::not_found("Reservation"));
        }

        reservation.is_present = is_present;
        self.repos.reservations().update(reservation).await
    }

    /// Soft-cancel. Cancelling twice answers success and leaves the first
    /// cancellation stamp untouched.
    pub async fn cancel_reservation(&self, actor: &User, reservation_id: i32) -> DomainResult<()> {
        let mut reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::not_found("Reservation"))?;

        if !actor.is_staff && reservation.user_id != actor.id {
            return Err(DomainError::not_found("Reservation"));
        }

        if reservation.is_active() {
            reservation.cancel(CancelationReason::User, Utc::now());
            self.repos.reservations().update(reservation).await?;
        }
        Ok(())
    }

    pub async fn reservations_for(
        &self,
        actor: &User,
        page: u64,
        page_size: u64,
    ) -> DomainResult<(Vec<Reservation>, u64)> {
        if actor.is_staff {
            self.repos.reservations().list(page, page_size).await
        } else {
            self.repos
                .reservations()
                .list_for_user(&actor.id, page, page_size)
                .await
        }
    }

    pub async fn reservation_for(
        &self,
        actor: &User,
        reservation_id: i32,
    ) -> DomainResult<Reservation> {
        let reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::not_found("Reservation"))?;
        if !actor.is_staff && reservation.user_id != actor.id {
            return Err(DomainError::not_found("Reservation"));
        }
        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryRepos;
    use crate::domain::workplace::Workplace;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
    }

    fn period(workplace_id: Option<i32>, start: i64, end: i64) -> Period {
        Period {
            id: 0,
            workplace_id,
            name: "period".into(),
            start_date: day(start),
            end_date: day(end),
            price: Decimal::new(30000, 2),
            is_active: true,
        }
    }

    fn slot(period_id: i32, start: i64, end: i64) -> TimeSlot {
        TimeSlot {
            id: 0,
            period_id,
            name: "slot".into(),
            price: Decimal::new(1000, 2),
            start_time: day(start),
            end_time: day(end),
            is_active: true,
        }
    }

    fn member(id: &str) -> User {
        let mut u = User::new(format!("{}@example.com", id), "hash");
        u.id = id.to_string();
        u.activate();
        u
    }

    fn staff() -> User {
        let mut u = member("staff");
        u.is_staff = true;
        u
    }

    async fn workplace_with(repos: &InMemoryRepos, seats: i32) -> Workplace {
        repos
            .workplaces()
            .create_workplace(Workplace {
                id: 0,
                name: "Studio".into(),
                details: String::new(),
                address_line: String::new(),
                city: String::new(),
                postal_code: String::new(),
                seats,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn overlapping_periods_of_same_workplace_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;

        service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let err = service
            .create_period(period(Some(wp.id), 14, 42))
            .await
            .unwrap_err();
        match err {
            DomainError::DetailList(messages) => {
                assert_eq!(messages, vec![PERIOD_OVERLAP.to_string()]);
            }
            other => panic!("expected detail list, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn touching_periods_are_allowed() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;

        service.create_period(period(Some(wp.id), 0, 14)).await.unwrap();
        service.create_period(period(Some(wp.id), 14, 28)).await.unwrap();
    }

    #[tokio::test]
    async fn overlap_across_workplaces_is_fine() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let a = workplace_with(&repos, 4).await;
        let b = workplace_with(&repos, 4).await;

        service.create_period(period(Some(a.id), 0, 28)).await.unwrap();
        service.create_period(period(Some(b.id), 14, 42)).await.unwrap();
    }

    #[tokio::test]
    async fn updating_a_period_ignores_itself() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;

        let mut created = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        created.end_date = day(30);
        service.update_period(created).await.unwrap();
    }

    #[tokio::test]
    async fn inverted_period_window_reports_both_fields() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos);
        let err = service.create_period(period(None, 10, 5)).await.unwrap_err();
        assert!(matches!(err, DomainError::Fields(_)));
    }

    #[tokio::test]
    async fn slot_without_workplace_rejects_reservations() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());

        let p = service.create_period(period(None, 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        let err = service
            .create_reservation(&member("u1"), s.id)
            .await
            .unwrap_err();
        match err {
            DomainError::Fields(errors) => {
                assert_eq!(
                    errors.into_inner()["non_field_errors"],
                    vec![NO_WORKPLACE.to_string()]
                );
            }
            other => panic!("expected non-field error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn reservation_create_is_idempotent() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        let user = member("u1");
        let (first, created) = service.create_reservation(&user, s.id).await.unwrap();
        assert!(created);

        let (second, created_again) = service.create_reservation(&user, s.id).await.unwrap();
        assert!(!created_again);
        assert_eq!(first.id, second.id);
        assert_eq!(
            repos.reservations().count_active_for_slot(s.id).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn overlapping_second_booking_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s1 = service.create_time_slot(slot(p.id, 1, 3)).await.unwrap();
        let s2 = service.create_time_slot(slot(p.id, 2, 4)).await.unwrap();

        let user = member("u1");
        service.create_reservation(&user, s1.id).await.unwrap();
        let err = service.create_reservation(&user, s2.id).await.unwrap_err();
        match err {
            DomainError::Fields(errors) => {
                assert_eq!(
                    errors.into_inner()["non_field_errors"],
                    vec![RESERVATION_OVERLAP.to_string()]
                );
            }
            other => panic!("expected non-field error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn back_to_back_slots_do_not_collide() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s1 = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();
        let s2 = service.create_time_slot(slot(p.id, 2, 3)).await.unwrap();

        let user = member("u1");
        service.create_reservation(&user, s1.id).await.unwrap();
        service.create_reservation(&user, s2.id).await.unwrap();
    }

    #[tokio::test]
    async fn cancelled_reservations_free_the_window() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s1 = service.create_time_slot(slot(p.id, 1, 3)).await.unwrap();
        let s2 = service.create_time_slot(slot(p.id, 2, 4)).await.unwrap();

        let user = member("u1");
        let (r, _) = service.create_reservation(&user, s1.id).await.unwrap();
        service.cancel_reservation(&user, r.id).await.unwrap();
        service.create_reservation(&user, s2.id).await.unwrap();
    }

    #[tokio::test]
    async fn capacity_reports_but_never_blocks() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 1).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        service.create_reservation(&member("u1"), s.id).await.unwrap();
        service.create_reservation(&member("u2"), s.id).await.unwrap();

        let availability = service.availability(s.id).await.unwrap();
        assert_eq!(availability.places_remaining, Some(-1));
    }

    #[tokio::test]
    async fn double_cancel_keeps_first_stamp() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        let user = member("u1");
        let (r, _) = service.create_reservation(&user, s.id).await.unwrap();

        service.cancel_reservation(&user, r.id).await.unwrap();
        let first_stamp = repos
            .reservations()
            .find_by_id(r.id)
            .await
            .unwrap()
            .unwrap()
            .cancelation_date;
        assert!(first_stamp.is_some());

        service.cancel_reservation(&user, r.id).await.unwrap();
        let second_stamp = repos
            .reservations()
            .find_by_id(r.id)
            .await
            .unwrap()
            .unwrap()
            .cancelation_date;
        assert_eq!(first_stamp, second_stamp);
    }

    #[tokio::test]
    async fn presence_patch_rejects_extra_fields() {
        let body = serde_json::json!({ "is_present": true, "is_active": false });
        let err = BookingService::presence_from_patch(&body).unwrap_err();
        match err {
            DomainError::Fields(errors) => {
                let map = errors.into_inner();
                assert!(map["is_present"][0].starts_with("Only is_present can be updated."));
            }
            other => panic!("expected field error, got {:?}", other),
        }

        assert!(BookingService::presence_from_patch(&serde_json::json!({ "is_present": true }))
            .is_ok());
    }

    #[tokio::test]
    async fn volunteer_updates_presence_on_active_reservations_only() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        repos
            .workplaces()
            .set_volunteers(wp.id, vec!["vol".to_string()])
            .await
            .unwrap();
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        let owner = member("u1");
        let volunteer = member("vol");
        let (r, _) = service.create_reservation(&owner, s.id).await.unwrap();

        let updated = service.set_presence(&volunteer, r.id, true).await.unwrap();
        assert!(updated.is_present);

        service.cancel_reservation(&owner, r.id).await.unwrap();
        let err = service.set_presence(&volunteer, r.id, false).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        // The owner still can, and staff always can.
        service.set_presence(&owner, r.id, false).await.unwrap();
        service.set_presence(&staff(), r.id, true).await.unwrap();
    }

    #[tokio::test]
    async fn strangers_get_not_found_on_foreign_reservations() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        let wp = workplace_with(&repos, 4).await;
        let p = service.create_period(period(Some(wp.id), 0, 28)).await.unwrap();
        let s = service.create_time_slot(slot(p.id, 1, 2)).await.unwrap();

        let owner = member("u1");
        let stranger = member("u2");
        let (r, _) = service.create_reservation(&owner, s.id).await.unwrap();

        assert!(matches!(
            service.set_presence(&stranger, r.id, true).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            service.cancel_reservation(&stranger, r.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            service.reservation_for(&stranger, r.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
