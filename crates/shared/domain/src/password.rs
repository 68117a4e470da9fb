//! Password value object and hashing.
//!
//! A `Password` only ever holds a bcrypt hash string. It can be produced
//! by a `PasswordHasher` or restored from storage, never built from
//! plaintext directly.

use crate::constants::DEFAULT_BCRYPT_COST;
use crate::error::DomainResult;

/// Hashed password as stored on a user.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Restore a password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

/// One-way password hashing with verification.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a freshly generated salt.
    fn hash(&self, plain_text: &str) -> DomainResult<Password>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Malformed hashes never verify.
    fn verify(&self, plain_text: &str, password: &Password) -> bool;
}

/// bcrypt implementation of `PasswordHasher`.
///
/// The salt is embedded in the produced hash string, so verification
/// needs nothing but the hash.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Hasher using the bcrypt library default cost.
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_BCRYPT_COST)
    }

    /// Hasher using an explicit cost. Invalid costs surface as
    /// `DomainError::Password` on the first `hash` call.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        let hash = bcrypt::hash(plain_text, self.cost)?;
        Ok(Password::from_hash(hash))
    }

    fn verify(&self, plain_text: &str, password: &Password) -> bool {
        bcrypt::verify(plain_text, password.as_str()).unwrap_or(false)
    }
}
