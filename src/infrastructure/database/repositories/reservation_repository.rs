//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::reservation::{
    CancelationReason, Reservation, ReservationRepository, ReservationState, ReservationWindow,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, time_slot};

const ACTIVE: &str = "Active";

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        user_id: m.user_id,
        time_slot_id: m.time_slot_id,
        state: ReservationState::from_str(&m.state),
        is_present: m.is_present,
        cancelation_date: m.cancelation_date,
        cancelation_reason: m
            .cancelation_reason
            .as_deref()
            .and_then(CancelationReason::from_str),
        created_at: m.created_at,
    }
}

fn domain_to_active(r: Reservation, new: bool) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: if new { NotSet } else { Set(r.id) },
        user_id: Set(r.user_id),
        time_slot_id: Set(r.time_slot_id),
        state: Set(r.state.as_str().to_string()),
        is_present: Set(r.is_present),
        cancelation_date: Set(r.cancelation_date),
        cancelation_reason: Set(r.cancelation_reason.map(|c| c.as_str().to_string())),
        created_at: Set(r.created_at),
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!(
            "Creating reservation for user {} on slot {}",
            r.user_id, r.time_slot_id
        );
        let model = domain_to_active(r, true)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_active_for_user_and_slot(
        &self,
        user_id: &str,
        time_slot_id: i32,
    ) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .filter(reservation::Column::TimeSlotId.eq(time_slot_id))
            .filter(reservation::Column::State.eq(ACTIVE))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn active_windows_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<ReservationWindow>> {
        let rows = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .filter(reservation::Column::State.eq(ACTIVE))
            .find_also_related(time_slot::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(r, slot)| {
                slot.map(|s| ReservationWindow {
                    reservation_id: r.id,
                    time_slot_id: s.id,
                    start_time: s.start_time,
                    end_time: s.end_time,
                })
            })
            .collect())
    }

    async fn count_active_for_slot(&self, time_slot_id: i32) -> DomainResult<i64> {
        let count = reservation::Entity::find()
            .filter(reservation::Column::TimeSlotId.eq(time_slot_id))
            .filter(reservation::Column::State.eq(ACTIVE))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count as i64)
    }

    async fn list(&self, page: u64, page_size: u64) -> DomainResult<(Vec<Reservation>, u64)> {
        let paginator = reservation::Entity::find()
            .order_by_desc(reservation::Column::Id)
            .paginate(&self.db, page_size.max(1));
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;
        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        page: u64,
        page_size: u64,
    ) -> DomainResult<(Vec<Reservation>, u64)> {
        let paginator = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id))
            .order_by_desc(reservation::Column::Id)
            .paginate(&self.db, page_size.max(1));
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;
        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn update(&self, r: Reservation) -> DomainResult<Reservation> {
        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Reservation"));
        }
        let model = domain_to_active(r, false)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(model))
    }
}
