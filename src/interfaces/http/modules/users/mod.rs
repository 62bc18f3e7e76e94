//! Users module — signup, activation, profile management, password flows

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
