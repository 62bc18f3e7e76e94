//! Payment profile aggregate and gateway seam

pub mod gateway;
pub mod model;
pub mod repository;

pub use gateway::{GatewayResponse, PaymentGateway};
pub use model::PaymentProfile;
pub use repository::PaymentProfileRepository;
