//! Password hashing and verification

use crate::error::{Error, Result};

/// Hash a plaintext password with bcrypt
pub fn hash_password(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
        .map_err(|e| Error::Other(format!("Failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash.
/// The underlying comparison is constant-time.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
