//! Salted password hashing.
//!
//! Hashes are Argon2id in PHC string form (`$argon2id$v=19$...`), with a fresh
//! random salt per call. The encoded string carries its own salt and
//! parameters, so [`is_valid`] needs nothing but the hash and the candidate.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Failure to produce a password hash.
#[derive(Error, Debug)]
#[error("failed to hash password: {0}")]
pub struct PasswordError(argon2::password_hash::Error);

/// Hashes `password` with a random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError)
}

/// Checks `password` against a hash produced by [`hash_password`].
///
/// A malformed hash never validates.
pub fn is_valid(hashed_password: &str, password: &str) -> bool {
    PasswordHash::new(hashed_password).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}
