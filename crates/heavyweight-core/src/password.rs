//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id (memory-hard) using a fresh random salt.
//! The result is a PHC string that carries the algorithm, its parameters and
//! the salt, so verification needs nothing but the stored hash:
//!
//! ```text
//! $argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>
//! ```
//!
//! Hashing is deliberately slow. Request handlers should use the
//! [`hash_password_blocking`] and [`verify_password_blocking`] variants, which
//! run on the runtime's blocking pool instead of an executor thread.

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Checks `password` against a stored PHC hash.
///
/// A wrong password is `Ok(false)`, never an error. `Err` means the stored
/// hash itself could not be parsed or used.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to parse password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::internal(anyhow!(
            "Failed to verify password: {}",
            e
        ))),
    }
}

/// [`hash_password`] on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal(anyhow!("Password hashing task failed: {}", e)))?
}

/// [`verify_password`] on the blocking thread pool.
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::internal(anyhow!("Password verification task failed: {}", e)))?
}
