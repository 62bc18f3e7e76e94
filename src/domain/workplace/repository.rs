//! Workplace/Period/TimeSlot repository interface

use async_trait::async_trait;

use super::model::{Period, SlotContext, TimeSlot, Workplace};
use crate::domain::DomainResult;

#[async_trait]
pub trait WorkplaceRepository: Send + Sync {
    // ── Workplaces ─────────────────────────────────────────────

    async fn create_workplace(&self, workplace: Workplace) -> DomainResult<Workplace>;
    async fn update_workplace(&self, workplace: Workplace) -> DomainResult<Workplace>;
    async fn find_workplace(&self, id: i32) -> DomainResult<Option<Workplace>>;
    async fn list_workplaces(&self) -> DomainResult<Vec<Workplace>>;

    /// Replace the volunteer set of a workplace.
    async fn set_volunteers(&self, workplace_id: i32, user_ids: Vec<String>) -> DomainResult<()>;

    /// Whether the user is a volunteer of the workplace.
    async fn is_volunteer(&self, workplace_id: i32, user_id: &str) -> DomainResult<bool>;

    // ── Periods ────────────────────────────────────────────────

    async fn create_period(&self, period: Period) -> DomainResult<Period>;
    async fn update_period(&self, period: Period) -> DomainResult<Period>;
    async fn find_period(&self, id: i32) -> DomainResult<Option<Period>>;
    async fn list_periods(&self) -> DomainResult<Vec<Period>>;

    /// Periods of one workplace, for overlap checks.
    async fn periods_for_workplace(&self, workplace_id: i32) -> DomainResult<Vec<Period>>;

    // ── Time slots ─────────────────────────────────────────────

    async fn create_time_slot(&self, slot: TimeSlot) -> DomainResult<TimeSlot>;
    async fn update_time_slot(&self, slot: TimeSlot) -> DomainResult<TimeSlot>;
    async fn find_time_slot(&self, id: i32) -> DomainResult<Option<TimeSlot>>;
    async fn list_time_slots(&self) -> DomainResult<Vec<TimeSlot>>;

    /// A slot with its Period and Workplace resolved.
    async fn slot_context(&self, time_slot_id: i32) -> DomainResult<Option<SlotContext>>;
}
