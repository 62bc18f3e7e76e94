//! API modules — one per resource, each with its DTOs and handlers

pub mod auth;
pub mod catalogs;
pub mod health;
pub mod payment_profiles;
pub mod periods;
pub mod reservations;
pub mod time_slots;
pub mod users;
pub mod workplaces;
