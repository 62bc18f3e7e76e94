//! Application layer — use-case orchestration
//!
//! Services coordinate repositories, crypto, email and the payment gateway.
//! HTTP handlers stay thin wrappers that delegate here.

pub mod booking;
pub mod identity;
pub mod payments;
pub mod policy;

#[cfg(test)]
pub(crate) mod test_support;
