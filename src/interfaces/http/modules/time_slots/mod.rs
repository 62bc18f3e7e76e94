//! Time slots module — bookable windows with live capacity

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
