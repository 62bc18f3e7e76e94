//! Action and temporary token aggregate

pub mod model;
pub mod repository;

pub use model::{ActionToken, ActionTokenType, TemporaryToken};
pub use repository::TokenRepository;
