//! Remember-Me Use Case
//!
//! Secondary path invoked after a successful login: verifies the
//! credentials once more against storage, then records the user in the
//! surface-scoped ledger. The stored hash is reused as-is; the password is
//! never re-hashed.

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::surface::Surface;
use crate::error::CredResult;

/// Remember input
pub struct RememberInput {
    /// Surface whose ledger receives the entry
    pub surface: Surface,
    /// User name or email
    pub identifier: String,
    /// Plaintext password
    pub password: String,
}

/// Remember use case
pub struct RememberUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
}

impl<S> RememberUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: RememberInput) -> CredResult<()> {
        let Some(password_hash) = self
            .store
            .get_password_hash_if_valid(&input.identifier, &input.password)
            .await?
        else {
            // Same normalization as login: no hint about which field was wrong
            tracing::debug!(
                surface = %input.surface,
                "Remember request with invalid credentials ignored"
            );
            return Ok(());
        };

        self.store
            .remember(input.surface, &input.identifier, &password_hash)
            .await?;

        tracing::info!(surface = %input.surface, "User remembered");

        Ok(())
    }
}
