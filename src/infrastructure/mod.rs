//! Infrastructure layer: database, crypto, outbound email and the payment
//! vault client.

pub mod crypto;
pub mod database;
pub mod email;
pub mod payment;
