//! SeaORM implementation of WorkplaceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::workplace::{Period, SlotContext, TimeSlot, Workplace, WorkplaceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{period, time_slot, workplace, workplace_volunteer};

pub struct SeaOrmWorkplaceRepository {
    db: DatabaseConnection,
}

impl SeaOrmWorkplaceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn workplace_to_domain(m: workplace::Model) -> Workplace {
    Workplace {
        id: m.id,
        name: m.name,
        details: m.details,
        address_line: m.address_line,
        city: m.city,
        postal_code: m.postal_code,
        seats: m.seats,
    }
}

fn workplace_to_active(w: Workplace, new: bool) -> workplace::ActiveModel {
    workplace::ActiveModel {
        id: if new { NotSet } else { Set(w.id) },
        name: Set(w.name),
        details: Set(w.details),
        address_line: Set(w.address_line),
        city: Set(w.city),
        postal_code: Set(w.postal_code),
        seats: Set(w.seats),
    }
}

fn period_to_domain(m: period::Model) -> Period {
    Period {
        id: m.id,
        workplace_id: m.workplace_id,
        name: m.name,
        start_date: m.start_date,
        end_date: m.end_date,
        price: m.price,
        is_active: m.is_active,
    }
}

fn period_to_active(p: Period, new: bool) -> period::ActiveModel {
    period::ActiveModel {
        id: if new { NotSet } else { Set(p.id) },
        workplace_id: Set(p.workplace_id),
        name: Set(p.name),
        start_date: Set(p.start_date),
        end_date: Set(p.end_date),
        price: Set(p.price),
        is_active: Set(p.is_active),
    }
}

fn slot_to_domain(m: time_slot::Model) -> TimeSlot {
    TimeSlot {
        id: m.id,
        period_id: m.period_id,
        name: m.name,
        price: m.price,
        start_time: m.start_time,
        end_time: m.end_time,
        is_active: m.is_active,
    }
}

fn slot_to_active(s: TimeSlot, new: bool) -> time_slot::ActiveModel {
    time_slot::ActiveModel {
        id: if new { NotSet } else { Set(s.id) },
        period_id: Set(s.period_id),
        name: Set(s.name),
        price: Set(s.price),
        start_time: Set(s.start_time),
        end_time: Set(s.end_time),
        is_active: Set(s.is_active),
    }
}

// ── WorkplaceRepository impl ────────────────────────────────────

#[async_trait]
impl WorkplaceRepository for SeaOrmWorkplaceRepository {
    async fn create_workplace(&self, w: Workplace) -> DomainResult<Workplace> {
        debug!("Creating workplace: {}", w.name);
        let model = workplace_to_active(w, true)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(workplace_to_domain(model))
    }

    async fn update_workplace(&self, w: Workplace) -> DomainResult<Workplace> {
        let existing = workplace::Entity::find_by_id(w.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Workplace"));
        }
        let model = workplace_to_active(w, false)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(workplace_to_domain(model))
    }

    async fn find_workplace(&self, id: i32) -> DomainResult<Option<Workplace>> {
        let model = workplace::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(workplace_to_domain))
    }

    async fn list_workplaces(&self) -> DomainResult<Vec<Workplace>> {
        let models = workplace::Entity::find()
            .order_by_asc(workplace::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(workplace_to_domain).collect())
    }

    async fn set_volunteers(&self, workplace_id: i32, user_ids: Vec<String>) -> DomainResult<()> {
        workplace_volunteer::Entity::delete_many()
            .filter(workplace_volunteer::Column::WorkplaceId.eq(workplace_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if user_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<workplace_volunteer::ActiveModel> = user_ids
            .into_iter()
            .map(|user_id| workplace_volunteer::ActiveModel {
                workplace_id: Set(workplace_id),
                user_id: Set(user_id),
            })
            .collect();
        workplace_volunteer::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn is_volunteer(&self, workplace_id: i32, user_id: &str) -> DomainResult<bool> {
        let found = workplace_volunteer::Entity::find()
            .filter(workplace_volunteer::Column::WorkplaceId.eq(workplace_id))
            .filter(workplace_volunteer::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.is_some())
    }

    async fn create_period(&self, p: Period) -> DomainResult<Period> {
        debug!("Creating period: {}", p.name);
        let model = period_to_active(p, true)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(period_to_domain(model))
    }

    async fn update_period(&self, p: Period) -> DomainResult<Period> {
        let existing = period::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Period"));
        }
        let model = period_to_active(p, false)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(period_to_domain(model))
    }

    async fn find_period(&self, id: i32) -> DomainResult<Option<Period>> {
        let model = period::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(period_to_domain))
    }

    async fn list_periods(&self) -> DomainResult<Vec<Period>> {
        let models = period::Entity::find()
            .order_by_asc(period::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(period_to_domain).collect())
    }

    async fn periods_for_workplace(&self, workplace_id: i32) -> DomainResult<Vec<Period>> {
        let models = period::Entity::find()
            .filter(period::Column::WorkplaceId.eq(workplace_id))
            .order_by_asc(period::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(period_to_domain).collect())
    }

    async fn create_time_slot(&self, s: TimeSlot) -> DomainResult<TimeSlot> {
        debug!("Creating time slot for period {}", s.period_id);
        let model = slot_to_active(s, true)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(slot_to_domain(model))
    }

    async fn update_time_slot(&self, s: TimeSlot) -> DomainResult<TimeSlot> {
        let existing = time_slot::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("TimeSlot"));
        }
        let model = slot_to_active(s, false)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(slot_to_domain(model))
    }

    async fn find_time_slot(&self, id: i32) -> DomainResult<Option<TimeSlot>> {
        let model = time_slot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(slot_to_domain))
    }

    async fn list_time_slots(&self) -> DomainResult<Vec<TimeSlot>> {
        let models = time_slot::Entity::find()
            .order_by_asc(time_slot::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(slot_to_domain).collect())
    }

    async fn slot_context(&self, time_slot_id: i32) -> DomainResult<Option<SlotContext>> {
        let Some((slot, period)) = time_slot::Entity::find_by_id(time_slot_id)
            .find_also_related(period::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let Some(period) = period else {
            return Ok(None);
        };

        let workplace = match period.workplace_id {
            Some(id) => workplace::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(db_err)?,
            None => None,
        };

        Ok(Some(SlotContext {
            slot: slot_to_domain(slot),
            period: period_to_domain(period),
            workplace: workplace.map(workplace_to_domain),
        }))
    }
}
