//! Payment vault clients

pub mod paysafe;

pub use paysafe::PaysafeGateway;
