//! Login Use Case
//!
//! Authenticates a user by user name or email. The outcome is normalized:
//! an unknown identifier and a wrong password are indistinguishable to the
//! caller.

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{password::RawPassword, user_id::UserId};
use crate::error::CredResult;

/// Login input
pub struct LoginInput {
    /// User name or email
    pub identifier: String,
    /// Plaintext password
    pub password: String,
}

/// Login outcome
///
/// Bad credentials are an outcome, not an error; only storage failures
/// surface as `CredError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials verified
    Success(UserId),
    /// Unknown identifier or wrong password
    Denied,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
}

impl<S> LoginUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: LoginInput) -> CredResult<LoginOutcome> {
        // Empty fields are a front-end pre-check; tolerate them here
        if input.identifier.is_empty() || input.password.is_empty() {
            return Ok(LoginOutcome::Denied);
        }

        let Some(user) = self.store.find_by_identifier(&input.identifier).await? else {
            tracing::warn!("Login attempt for unknown identifier");
            return Ok(LoginOutcome::Denied);
        };

        // A password outside the 8-64 policy can never match a stored one
        let Ok(password) = RawPassword::new(input.password) else {
            tracing::warn!(user_id = %user.id, "Login attempt rejected");
            return Ok(LoginOutcome::Denied);
        };

        if !user.verify_password(&password) {
            tracing::warn!(user_id = %user.id, "Login attempt rejected");
            return Ok(LoginOutcome::Denied);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome::Success(user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::sqlite::SqliteCredentialStore;

    async fn store_with_alice() -> (Arc<SqliteCredentialStore>, UserId) {
        let store = Arc::new(SqliteCredentialStore::open_in_memory().await.unwrap());
        let output = RegisterUseCase::new(store.clone())
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "goodpass1".to_string(),
            })
            .await
            .unwrap();
        (store, output.user_id)
    }

    fn input(identifier: &str, password: &str) -> LoginInput {
        LoginInput {
            identifier: identifier.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_username() {
        let (store, user_id) = store_with_alice().await;
        let login = LoginUseCase::new(store);

        let outcome = login.execute(input("alice", "goodpass1")).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Success(user_id));
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_login_with_email() {
        let (store, user_id) = store_with_alice().await;
        let login = LoginUseCase::new(store);

        let outcome = login
            .execute(input("alice@example.com", "goodpass1"))
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Success(user_id));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_alike() {
        let (store, _) = store_with_alice().await;
        let login = LoginUseCase::new(store);

        let wrong_password = login.execute(input("alice", "wrongpw99")).await.unwrap();
        let unknown_user = login.execute(input("nobody", "goodpass1")).await.unwrap();
        assert_eq!(wrong_password, LoginOutcome::Denied);
        assert_eq!(unknown_user, LoginOutcome::Denied);
    }

    #[tokio::test]
    async fn test_empty_fields_are_denied_not_errors() {
        let (store, _) = store_with_alice().await;
        let login = LoginUseCase::new(store);

        assert_eq!(
            login.execute(input("", "goodpass1")).await.unwrap(),
            LoginOutcome::Denied
        );
        assert_eq!(
            login.execute(input("alice", "")).await.unwrap(),
            LoginOutcome::Denied
        );
        assert_eq!(
            login.execute(input("", "")).await.unwrap(),
            LoginOutcome::Denied
        );
    }

    #[tokio::test]
    async fn test_out_of_policy_password_is_denied() {
        let (store, _) = store_with_alice().await;
        let login = LoginUseCase::new(store);

        assert_eq!(
            login.execute(input("alice", "short")).await.unwrap(),
            LoginOutcome::Denied
        );
    }
}
