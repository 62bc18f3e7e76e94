//! Domain layer: business entities, rules and repository traits

pub mod catalog;
pub mod error;
pub mod payment;
pub mod repositories;
pub mod reservation;
pub mod token;
pub mod user;
pub mod workplace;

pub use error::{DomainError, FieldErrors};
pub use repositories::{DomainResult, RepositoryProvider};
