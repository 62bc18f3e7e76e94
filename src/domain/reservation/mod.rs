//! Reservation aggregate

pub mod model;
pub mod repository;

pub use model::{CancelationReason, Reservation, ReservationState, ReservationWindow};
pub use repository::ReservationRepository;
