//! Credential Management Core
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store trait
//! - `application/` - Use cases (register, login, remember-me)
//! - `infra/` - SQLite store implementation
//!
//! ## Features
//! - User registration with ordered, short-circuiting field validation
//! - Login by user name or email with a normalized success/denied outcome
//! - Per-surface "remember me" ledger for front-end pre-fill
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (random per-record salt, PHC format)
//! - Plaintext never stored; login failures do not reveal which field was wrong
//! - Uniqueness enforced by schema constraints (race-free by construction)
//!
//! The three front ends consuming this library are pure event wiring; all
//! invariants live here.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::{
    LoginInput, LoginOutcome, LoginUseCase, RegisterInput, RegisterOutput, RegisterUseCase,
    RememberInput, RememberUseCase,
};
pub use domain::repository::CredentialStore;
pub use error::{CredError, CredResult, Field};
pub use infra::sqlite::SqliteCredentialStore;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::sqlite::SqliteCredentialStore as CredentialStoreHandle;
}
