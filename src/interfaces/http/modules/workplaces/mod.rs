//! Workplaces module — bookable locations and their volunteers

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
