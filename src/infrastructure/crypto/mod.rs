//! Cryptographic helpers

pub mod password;
pub mod token_key;

pub use password::{hash_password, verify_password};
pub use token_key::generate_token_key;
