//! Payment profiles module — references into the external card vault

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
