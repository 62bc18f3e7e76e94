//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_action_tokens;
mod m20240101_000003_create_temporary_tokens;
mod m20240101_000004_create_catalog_entries;
mod m20240101_000005_create_workplaces;
mod m20240101_000006_create_workplace_volunteers;
mod m20240101_000007_create_periods;
mod m20240101_000008_create_time_slots;
mod m20240101_000009_create_reservations;
mod m20240101_000010_create_payment_profiles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_action_tokens::Migration),
            Box::new(m20240101_000003_create_temporary_tokens::Migration),
            Box::new(m20240101_000004_create_catalog_entries::Migration),
            Box::new(m20240101_000005_create_workplaces::Migration),
            Box::new(m20240101_000006_create_workplace_volunteers::Migration),
            Box::new(m20240101_000007_create_periods::Migration),
            Box::new(m20240101_000008_create_time_slots::Migration),
            Box::new(m20240101_000009_create_reservations::Migration),
            Box::new(m20240101_000010_create_payment_profiles::Migration),
        ]
    }
}
