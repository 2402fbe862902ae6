//! User Entity
//!
//! Identity record owned by the credential store. Created once at
//! registration; there are no update or delete operations.

use crate::domain::value_object::{
    email::Email,
    password::{PasswordHash, RawPassword},
    user_id::UserId,
    user_name::UserName,
};

/// User entity
///
/// Loaded from storage; the `id` is assigned by the store at insert time
/// and is immutable afterwards.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned monotonic identifier
    pub id: UserId,
    /// User name (unique, case-sensitive)
    pub username: UserName,
    /// Email address (unique, case-sensitive)
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: PasswordHash,
}

impl User {
    /// Verify a raw password against this user's stored hash
    pub fn verify_password(&self, password: &RawPassword) -> bool {
        self.password_hash.verify(password)
    }
}
