//! Payments module — external card-vault profiles
//!
//! Contains the `PaymentService` which keeps only the vault reference
//! locally and fetches card data live on every read.

pub mod service;

pub use service::{PaymentService, ProfileView};
