//! Salted one-way password hashing.
//!
//! Hashes are argon2id PHC strings (`$argon2id$v=19$...`), which embed the
//! salt and parameters, so verification needs only the stored string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::{AuthError, Result};

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::hash(e.to_string()))
}

/// Check `password` against a stored hash.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Stored password hash could not be parsed: {e}");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
