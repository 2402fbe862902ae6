//! SQLite Store Implementation
//!
//! Schema-level UNIQUE constraints are the source of truth for uniqueness;
//! a constraint violation is mapped back to the matching duplicate error,
//! which makes check-then-insert races harmless.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::entity::{remembered::RememberedCredential, user::User};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{
    email::Email,
    password::{PasswordHash, RawPassword},
    surface::Surface,
    user_id::UserId,
    user_name::UserName,
};
use crate::error::{CredError, CredResult};

/// Bundled DDL, executed statement by statement at open time
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS remembered_users (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    surface TEXT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users (id),
    UNIQUE (surface, user_id)
);
"#;

/// SQLite-backed credential store
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    /// Open (and create if missing) the store at `path`
    ///
    /// The returned handle is passed to every use case at construction;
    /// call [`close`](Self::close) when the owning session ends.
    pub async fn open(path: impl AsRef<Path>) -> CredResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        tracing::info!("Credential store opened");

        Ok(store)
    }

    /// Open a private in-memory store
    ///
    /// A single connection keeps the database alive for the lifetime of
    /// the pool. Used by tests and throwaway sessions.
    pub async fn open_in_memory() -> CredResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Credential store closed");
    }

    /// Execute the bundled DDL statement by statement
    async fn init_schema(&self) -> CredResult<()> {
        for stmt in SCHEMA.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Map a uniqueness violation onto the offending field
    fn map_unique_violation(err: sqlx::Error, username: &UserName, email: &Email) -> CredError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                if message.contains("users.username") {
                    return CredError::DuplicateUsername(username.as_str().to_string());
                }
                if message.contains("users.email") {
                    return CredError::DuplicateEmail(email.as_str().to_string());
                }
            }
        }
        CredError::Database(err)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> CredResult<User> {
        Ok(User {
            id: UserId::from_i64(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash: PasswordHash::from_phc_string(self.password_hash)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RememberedRow {
    user_id: i64,
    username: String,
    email: String,
    password_hash: String,
}

impl RememberedRow {
    fn into_credential(self) -> CredResult<RememberedCredential> {
        Ok(RememberedCredential {
            user_id: UserId::from_i64(self.user_id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash: PasswordHash::from_phc_string(self.password_hash)?,
        })
    }
}

// ============================================================================
// Credential Store Implementation
// ============================================================================

impl CredentialStore for SqliteCredentialStore {
    async fn create_user(
        &self,
        username: &UserName,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> CredResult<UserId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_unique_violation(e, username, email))?;

        Ok(UserId::from_i64(id))
    }

    async fn find_by_username(&self, username: &UserName) -> CredResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> CredResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_identifier(&self, identifier: &str) -> CredResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE username = ? OR email = ?
            LIMIT 1
            "#,
        )
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &UserName) -> CredResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> CredResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn authenticate(&self, identifier: &str, password: &str) -> CredResult<bool> {
        let Some(user) = self.find_by_identifier(identifier).await? else {
            return Ok(false);
        };

        // A password outside the 8-64 policy can never match a stored one
        let Ok(password) = RawPassword::new(password.to_string()) else {
            return Ok(false);
        };

        Ok(user.verify_password(&password))
    }

    async fn get_password_hash_if_valid(
        &self,
        identifier: &str,
        password: &str,
    ) -> CredResult<Option<PasswordHash>> {
        let Some(user) = self.find_by_identifier(identifier).await? else {
            return Ok(None);
        };

        let Ok(password) = RawPassword::new(password.to_string()) else {
            return Ok(None);
        };

        if user.verify_password(&password) {
            Ok(Some(user.password_hash))
        } else {
            Ok(None)
        }
    }

    async fn remember(
        &self,
        surface: Surface,
        identifier: &str,
        password_hash: &PasswordHash,
    ) -> CredResult<()> {
        // The pair must name a stored user carrying exactly this hash
        let Some(user) = self.find_by_identifier(identifier).await? else {
            tracing::debug!(surface = %surface, "Remember request for unknown identifier ignored");
            return Ok(());
        };

        if !user.password_hash.ct_eq(password_hash) {
            tracing::debug!(surface = %surface, "Remember request with stale hash ignored");
            return Ok(());
        }

        // Idempotent: the composite UNIQUE index absorbs repeats
        sqlx::query(
            r#"
            INSERT INTO remembered_users (surface, user_id)
            VALUES (?, ?)
            ON CONFLICT (surface, user_id) DO NOTHING
            "#,
        )
        .bind(surface.as_str())
        .bind(user.id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_remembered(&self, surface: Surface) -> CredResult<Vec<RememberedCredential>> {
        let rows = sqlx::query_as::<_, RememberedRow>(
            r#"
            SELECT u.id AS user_id, u.username, u.email, u.password_hash
            FROM users AS u
            JOIN remembered_users AS r ON u.id = r.user_id
            WHERE r.surface = ?
            ORDER BY r.id
            "#,
        )
        .bind(surface.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_credential()).collect()
    }

    async fn find_remembered(
        &self,
        surface: Surface,
        identifier: &str,
    ) -> CredResult<Option<RememberedCredential>> {
        let row = sqlx::query_as::<_, RememberedRow>(
            r#"
            SELECT u.id AS user_id, u.username, u.email, u.password_hash
            FROM users AS u
            JOIN remembered_users AS r ON u.id = r.user_id
            WHERE r.surface = ? AND (u.username = ? OR u.email = ?)
            LIMIT 1
            "#,
        )
        .bind(surface.as_str())
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }
}

// ============================================================================
// Tests
// ============================================================================
