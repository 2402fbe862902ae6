//! Credential Error Types
//!
//! This module provides credential-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use serde::Serialize;
use thiserror::Error;

use crate::domain::value_object::{email::EmailError, user_name::UserNameError};

/// Credential-specific result type alias
pub type CredResult<T> = Result<T, CredError>;

/// Input field an error refers to
///
/// Front ends use this to refocus the offending field; the `Display`
/// messages carry the same field names as stable substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Username,
    Email,
    Password,
}

/// Credential-specific error variants
#[derive(Debug, Error)]
pub enum CredError {
    /// User name failed a syntactic validation rule
    #[error(transparent)]
    UserName(#[from] UserNameError),

    /// Email failed a syntactic validation rule
    #[error(transparent)]
    Email(#[from] EmailError),

    /// Password failed the length policy
    #[error(transparent)]
    Password(#[from] PasswordPolicyError),

    /// User name already exists (pre-check or schema constraint)
    #[error("The user name '{0}' is already in use")]
    DuplicateUsername(String),

    /// Email already exists (pre-check or schema constraint)
    #[error("The email address '{0}' is already in use")]
    DuplicateEmail(String),

    /// Password hashing or hash parsing failed
    #[error("Password hash error: {0}")]
    Hash(#[from] PasswordHashError),

    /// Database error (store unavailable or query failed)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CredError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CredError::UserName(_) | CredError::Email(_) | CredError::Password(_) => {
                ErrorKind::Validation
            }
            CredError::DuplicateUsername(_) | CredError::DuplicateEmail(_) => ErrorKind::Conflict,
            CredError::Hash(_) | CredError::Internal(_) => ErrorKind::Internal,
            CredError::Database(_) => ErrorKind::Unavailable,
        }
    }

    /// Get the input field this error refers to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            CredError::UserName(_) | CredError::DuplicateUsername(_) => Some(Field::Username),
            CredError::Email(_) | CredError::DuplicateEmail(_) => Some(Field::Email),
            CredError::Password(_) => Some(Field::Password),
            _ => None,
        }
    }

    /// Convert to AppError for front-end rendering
    ///
    /// Logs the error with the appropriate level before converting.
    pub fn to_app_error(&self) -> AppError {
        self.log();
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            CredError::DuplicateUsername(_) => err.with_action("Please choose a different user name"),
            CredError::DuplicateEmail(_) => err.with_action("Please use a different email address"),
            CredError::UserName(_) | CredError::Email(_) | CredError::Password(_) => {
                err.with_action("Please correct the field and try again")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CredError::Database(e) => {
                tracing::error!(error = %e, "Credential store database error");
            }
            CredError::Hash(e) => {
                tracing::error!(error = %e, "Password hash error");
            }
            CredError::Internal(msg) => {
                tracing::error!(message = %msg, "Credential store internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Credential error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = CredError::DuplicateUsername("alice".to_string());
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.kind().is_recoverable());

        let err = CredError::Internal("boom".to_string());
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.kind().is_fatal());
    }

    #[test]
    fn test_field_mapping() {
        assert_eq!(
            CredError::DuplicateUsername("alice".to_string()).field(),
            Some(Field::Username)
        );
        assert_eq!(
            CredError::DuplicateEmail("a@b.com".to_string()).field(),
            Some(Field::Email)
        );
        assert_eq!(CredError::Internal("x".to_string()).field(), None);
    }

    #[test]
    fn test_duplicate_message_contains_value() {
        let err = CredError::DuplicateUsername("alice".to_string());
        assert!(err.to_string().contains("'alice'"));
        assert!(err.to_string().contains("user name"));
    }

    #[test]
    fn test_to_app_error() {
        let err = CredError::DuplicateEmail("a@b.com".to_string());
        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::Conflict);
        assert!(app.message().contains("a@b.com"));
        assert!(app.action().is_some());
    }
}
