//! Remembered Credential
//!
//! A remember-me ledger entry joined with its user data, as handed to a
//! front end for pre-filling a login form.

use crate::domain::value_object::{
    email::Email, password::PasswordHash, user_id::UserId, user_name::UserName,
};

/// One remembered user on a surface
#[derive(Debug, Clone)]
pub struct RememberedCredential {
    pub user_id: UserId,
    pub username: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
}
