//! Credential Store Trait
//!
//! Interface for durable, integrity-checked storage of users and
//! remembered-user associations. Implementation is in the infrastructure
//! layer. The store is the final authority on uniqueness: callers
//! pre-check via the lookup operations for ordered error reporting, but
//! the schema constraints decide.

use crate::domain::entity::{remembered::RememberedCredential, user::User};
use crate::domain::value_object::{
    email::Email, password::PasswordHash, surface::Surface, user_id::UserId, user_name::UserName,
};
use crate::error::CredResult;

/// Credential store trait
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Insert a new user record, returning the assigned id
    ///
    /// Fails with `DuplicateUsername`/`DuplicateEmail` when a uniqueness
    /// constraint is violated.
    async fn create_user(
        &self,
        username: &UserName,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> CredResult<UserId>;

    /// Find user by user name (exact, case-sensitive)
    async fn find_by_username(&self, username: &UserName) -> CredResult<Option<User>>;

    /// Find user by email (exact, case-sensitive)
    async fn find_by_email(&self, email: &Email) -> CredResult<Option<User>>;

    /// Resolve a raw identifier against user name OR email
    ///
    /// First match wins; the identifier space is unambiguous because both
    /// columns are globally unique. Tolerates arbitrary input, including
    /// the empty string.
    async fn find_by_identifier(&self, identifier: &str) -> CredResult<Option<User>>;

    /// Check if a user name is already stored
    async fn exists_by_username(&self, username: &UserName) -> CredResult<bool>;

    /// Check if an email is already stored
    async fn exists_by_email(&self, email: &Email) -> CredResult<bool>;

    /// Verify a plaintext password for an identifier
    ///
    /// Returns false on no-match or hash mismatch; never errors for an
    /// unknown identifier.
    async fn authenticate(&self, identifier: &str, password: &str) -> CredResult<bool>;

    /// Return the stored hash only if the password checks out
    ///
    /// Lets a caller persist a remember-me entry without re-hashing.
    async fn get_password_hash_if_valid(
        &self,
        identifier: &str,
        password: &str,
    ) -> CredResult<Option<PasswordHash>>;

    /// Record a remember-me entry for `(surface, user)`
    ///
    /// The `(identifier, password_hash)` pair must correspond to a stored
    /// user with that exact hash; anything else is a logged no-op.
    /// Idempotent: calling twice leaves a single entry.
    async fn remember(
        &self,
        surface: Surface,
        identifier: &str,
        password_hash: &PasswordHash,
    ) -> CredResult<()>;

    /// All remembered credentials for one surface, in insertion order
    async fn list_remembered(&self, surface: Surface) -> CredResult<Vec<RememberedCredential>>;

    /// Look up one remembered credential on a surface by identifier
    async fn find_remembered(
        &self,
        surface: Surface,
        identifier: &str,
    ) -> CredResult<Option<RememberedCredential>>;
}
