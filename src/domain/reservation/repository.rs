//! Reservation repository interface

use async_trait::async_trait;

use super::model::{Reservation, ReservationWindow};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation, returning it with its assigned id.
    async fn create(&self, reservation: Reservation) -> DomainResult<Reservation>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// The active reservation for a (user, timeslot) pair, if any.
    async fn find_active_for_user_and_slot(
        &self,
        user_id: &str,
        time_slot_id: i32,
    ) -> DomainResult<Option<Reservation>>;

    /// Time windows of all the user's active reservations.
    async fn active_windows_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<ReservationWindow>>;

    /// Count of active reservations on a slot, for `places_remaining`.
    async fn count_active_for_slot(&self, time_slot_id: i32) -> DomainResult<i64>;

    /// Paginated list of all reservations, newest first.
    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<Reservation>, u64)>;

    /// Paginated list of one user's reservations, newest first.
    async fn list_for_user(
        &self,
        user_id: &str,
        page: u64,
        page_size: u64,
    ) -> DomainResult<(Vec<Reservation>, u64)>;

    /// Persist changed fields (state, presence, cancellation stamp).
    async fn update(&self, reservation: Reservation) -> DomainResult<Reservation>;
}
