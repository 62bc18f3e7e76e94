//! Health module — server liveness probe

pub mod handlers;

pub use handlers::*;
