//! Identity module — accounts, activation, sessions
//!
//! Contains the `IdentityService` which orchestrates all account-related
//! use-cases: registration, activation, email change, password reset and
//! change, login and logout.

pub mod service;

pub use service::{ActivationOutcome, IdentityService, NewUser, RegistrationOutcome};
