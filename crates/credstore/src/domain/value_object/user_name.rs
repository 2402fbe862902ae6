//! User Name Value Object
//!
//! The user name is the public identifier a person registers and logs in
//! with. It is stored and compared exactly as entered.
//!
//! ## Invariants
//! - Length: 3-20 characters
//! - Charset: ASCII letters, digits and `_` only
//! - No trimming, no case folding: uniqueness is case-sensitive, and any
//!   whitespace simply fails the charset rule

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 20;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is too short (minimum: USER_NAME_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains invalid character
    InvalidChar { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length, min } => {
                write!(f, "User name is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "User name contains invalid character '{char}' at position {position}. Only A-Z, a-z, 0-9 and _ are allowed"
                )
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated user name
///
/// # Invariants
/// - Length between USER_NAME_MIN_LENGTH and USER_NAME_MAX_LENGTH
/// - Contains only ASCII alphanumeric characters and underscores
///
/// The raw input is kept verbatim: lookups and uniqueness are
/// case-sensitive by contract.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input
    ///
    /// Checks are applied in a fixed order: length first, then charset.
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let input = input.into();
        Self::validate(&input)?;
        Ok(Self(input))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Get the user name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate a raw user name
    fn validate(input: &str) -> Result<(), UserNameError> {
        let length = input.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        for (pos, ch) in input.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(UserNameError::InvalidChar {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }

    /// Check if character is valid in a user name
    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
