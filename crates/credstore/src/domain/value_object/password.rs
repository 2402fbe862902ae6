//! Password Value Objects
//!
//! Domain wrappers around `platform::password`. `RawPassword` is the
//! validated plaintext (zeroized on drop); `PasswordHash` is the Argon2id
//! PHC string that actually gets stored.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;
use subtle::ConstantTimeEq;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Minimum 8 characters
    /// - Maximum 64 characters
    ///
    /// Content is otherwise unconstrained.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (for storage)
// ============================================================================

/// Hashed password for database storage
///
/// Stores the password in Argon2id PHC string format.
/// Safe to store in the database.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Create from raw password by hashing
    ///
    /// Hashing failure aborts the caller's operation; there is no plaintext
    /// fallback.
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.inner().hash()?))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self(HashedPassword::from_phc_string(phc_string)?))
    }

    /// Get the PHC string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }

    /// Constant-time equality of two stored hashes
    ///
    /// Used by the remember-me ledger to check that a presented hash is the
    /// one on record without leaking a comparison prefix.
    pub fn ct_eq(&self, other: &PasswordHash) -> bool {
        self.as_str().as_bytes().ct_eq(other.as_str().as_bytes()).into()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash").field("hash", &"[HASH]").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
