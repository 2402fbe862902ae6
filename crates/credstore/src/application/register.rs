//! Register Use Case
//!
//! Creates a new user account. Checks run in a fixed priority order and
//! the first failure wins, so front ends can rely on which error they see
//! first: username syntax, username uniqueness, email syntax, email
//! uniqueness, password length.

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{
    email::Email,
    password::{PasswordHash, RawPassword},
    user_id::UserId,
    user_name::UserName,
};
use crate::error::{CredError, CredResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
}

impl<S> RegisterUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: RegisterInput) -> CredResult<RegisterOutput> {
        // 1. Username syntax
        let username = UserName::new(input.username)?;

        // 2. Username uniqueness
        if self.store.exists_by_username(&username).await? {
            return Err(CredError::DuplicateUsername(username.as_str().to_string()));
        }

        // 3. Email syntax
        let email = Email::new(input.email)?;

        // 4. Email uniqueness
        if self.store.exists_by_email(&email).await? {
            return Err(CredError::DuplicateEmail(email.as_str().to_string()));
        }

        // 5. Password length
        let password = RawPassword::new(input.password)?;

        // Hashing must succeed before anything reaches storage
        let password_hash = PasswordHash::from_raw(&password)?;

        // The schema constraints remain the final authority on uniqueness
        let user_id = self
            .store
            .create_user(&username, &email, &password_hash)
            .await?;

        tracing::info!(
            user_id = %user_id,
            username = %username,
            "User registered"
        );

        Ok(RegisterOutput { user_id })
    }
}
