//! Reservations module — booking, presence and soft-cancel

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
