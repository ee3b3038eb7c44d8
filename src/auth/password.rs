//! Password hashing and verification.
//!
//! Credentials are hashed with bcrypt (adaptive cost, salted). Verification
//! is internally constant-time-equivalent for the comparison; a malformed
//! stored hash verifies as `false` rather than erroring, so a corrupt
//! principal record behaves like a wrong password.

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;

/// Hash a plaintext password for storage.
///
/// # Errors
/// Returns an error if bcrypt fails internally (e.g. RNG failure).
pub fn hash(password: &str) -> Result<String> {
    bcrypt::hash(password, DEFAULT_COST).context("failed to hash password")
}

/// Check `password` against a stored bcrypt hash.
#[must_use]
pub fn verify(password: &str, stored_hash: &str) -> bool {
    bcrypt::verify(password, stored_hash).unwrap_or(false)
}
