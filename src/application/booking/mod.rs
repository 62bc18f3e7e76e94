//! Booking module — periods, time slots, reservations
//!
//! Contains the `BookingService` which enforces the availability rules:
//! period overlap per workplace, per-user reservation overlap, capacity
//! reporting and the soft-cancel lifecycle.

pub mod service;

pub use service::{BookingService, SlotAvailability};
