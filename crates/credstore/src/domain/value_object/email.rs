//! Email Value Object
//!
//! Represents a validated email address.
//! Basic shape validation only - no delivery verification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Constants
// ============================================================================

/// Minimum email length (in characters)
pub const EMAIL_MIN_LENGTH: usize = 6;

/// Maximum email length (in characters)
pub const EMAIL_MAX_LENGTH: usize = 150;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when email validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Email is too short (minimum: EMAIL_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// Email is too long (maximum: EMAIL_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Email does not match the `local@domain.tld` shape
    InvalidFormat,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length, min } => {
                write!(f, "Email is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "Email is too long ({length} chars, maximum {max})")
            }
            Self::InvalidFormat => {
                write!(f, "Email is not a valid address of the form local@domain.tld")
            }
        }
    }
}

impl std::error::Error for EmailError {}

// ============================================================================
// Email Value Object
// ============================================================================

/// Email address value object
///
/// # Invariants
/// - Length between EMAIL_MIN_LENGTH and EMAIL_MAX_LENGTH
/// - Exactly one `@`
/// - Non-empty local part of `[A-Za-z0-9._%+-]`
/// - Domain of `[A-Za-z0-9.-]` ending in a `.tld` of 2+ ASCII letters
///
/// The raw input is kept verbatim; lookups and uniqueness are
/// case-sensitive by contract, so no case folding is applied.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Checks are applied in a fixed order: length first, then shape.
    pub fn new(input: impl Into<String>) -> Result<Self, EmailError> {
        let input = input.into();

        let length = input.chars().count();
        if length < EMAIL_MIN_LENGTH {
            return Err(EmailError::TooShort {
                length,
                min: EMAIL_MIN_LENGTH,
            });
        }
        if length > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                length,
                max: EMAIL_MAX_LENGTH,
            });
        }

        if !Self::is_valid_shape(&input) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(input))
    }

    /// Check the `local@domain.tld` shape
    fn is_valid_shape(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // Local part: non-empty, restricted charset. A second '@' would land
        // in `domain` and fail the domain charset below.
        if local.is_empty() || !local.chars().all(Self::is_local_char) {
            return false;
        }

        // Domain must end in `.tld` with a 2+ letter TLD
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        if host.is_empty() || !host.chars().all(Self::is_domain_char) {
            return false;
        }
        tld.chars().count() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    }

    #[inline]
    fn is_local_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
    }

    #[inline]
    fn is_domain_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Get the email as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part of the email
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Email").field(&self.0).finish()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod shape {
        use super::*;

        #[test]
        fn test_valid_addresses() {
            assert!(Email::new("user@example.com").is_ok());
            assert!(Email::new("user.name@example.co.jp").is_ok());
            assert!(Email::new("user+tag@example.com").is_ok());
            assert!(Email::new("user%x-y_z@sub.example-site.org").is_ok());
        }

        #[test]
        fn test_missing_at() {
            assert!(matches!(
                Email::new("userexample.com"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_double_at() {
            assert!(matches!(
                Email::new("user@@example.com"),
                Err(EmailError::InvalidFormat)
            ));
            assert!(matches!(
                Email::new("user@ex@ample.com"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_empty_local() {
            assert!(matches!(
                Email::new("@example.com"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_domain_without_dot() {
            assert!(matches!(
                Email::new("user@example"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_tld_too_short() {
            assert!(matches!(
                Email::new("user@example.c"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_numeric_tld() {
            assert!(matches!(
                Email::new("user@example.12"),
                Err(EmailError::InvalidFormat)
            ));
        }

        #[test]
        fn test_whitespace_not_stripped() {
            assert!(matches!(
                Email::new(" user@example.com"),
                Err(EmailError::InvalidFormat)
            ));
        }
    }

    mod length {
        use super::*;

        #[test]
        fn test_too_short() {
            // 5 chars, below the minimum of 6
            assert!(matches!(
                Email::new("a@b.c"),
                Err(EmailError::TooShort { length: 5, min: 6 })
            ));
        }

        #[test]
        fn test_minimum_length() {
            assert!(Email::new("a@b.co").is_ok());
        }

        #[test]
        fn test_too_long() {
            let local = "a".repeat(EMAIL_MAX_LENGTH);
            let input = format!("{local}@example.com");
            assert!(matches!(
                Email::new(input),
                Err(EmailError::TooLong { .. })
            ));
        }

        #[test]
        fn test_length_checked_before_shape() {
            // 3 chars and no '@': length error wins
            assert!(matches!(
                Email::new("a.b"),
                Err(EmailError::TooShort { .. })
            ));
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn test_parts() {
            let email = Email::new("user@example.com").unwrap();
            assert_eq!(email.local_part(), "user");
            assert_eq!(email.domain(), "example.com");
        }

        #[test]
        fn test_case_preserved() {
            let email = Email::new("User@Example.COM").unwrap();
            assert_eq!(email.as_str(), "User@Example.COM");
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serialize() {
            let email = Email::new("user@example.com").unwrap();
            let json = serde_json::to_string(&email).unwrap();
            assert_eq!(json, "\"user@example.com\"");
        }

        #[test]
        fn test_deserialize_invalid() {
            let result: Result<Email, _> = serde_json::from_str("\"not-an-email\"");
            assert!(result.is_err());
        }
    }
}
