//! Periods module — dated offering windows of a workplace

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
