//! SeaORM entity definitions

pub mod action_token;
pub mod catalog_entry;
pub mod payment_profile;
pub mod period;
pub mod reservation;
pub mod temporary_token;
pub mod time_slot;
pub mod user;
pub mod workplace;
pub mod workplace_volunteer;
