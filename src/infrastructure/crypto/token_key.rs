//! Opaque token key generation
//!
//! Action tokens and temporary authentication tokens both use a random
//! hex-encoded key. The key is the only secret a client ever holds; it is
//! looked up verbatim in the database.

use rand::RngCore;

/// Length of the raw random key material in bytes (40 hex chars).
const KEY_BYTES: usize = 20;

/// Generate a fresh random token key.
pub fn generate_token_key() -> String {
    let mut bytes = [0u8; KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_hex_and_unique() {
        let a = generate_token_key();
        let b = generate_token_key();
        assert_eq!(a.len(), KEY_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
