//! # Atelier Booking API
//!
//! Backend of a membership/booking service: user accounts with
//! email-activation and password-reset flows, temporary authentication
//! tokens, workplace reservations (periods, time slots, capacity and
//! overlap checks) and a payment-profile gateway to an external card vault.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic and workflow services
//! - **infrastructure**: External concerns (database, crypto, email, payment vault)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig};
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;

// Re-export API router
pub use interfaces::http::create_api_router;
