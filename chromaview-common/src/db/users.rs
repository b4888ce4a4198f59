//! User credential queries
//!
//! The store keeps one row per user: username and password digest. The
//! password itself never reaches the database and is never logged.

use crate::hash::hash_password;
use crate::Result;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Register a new user.
///
/// Returns `false` if the username is already taken. Uniqueness is enforced
/// by inserting and letting the primary-key constraint fail, so two
/// concurrent signups for the same name cannot both succeed.
pub async fn register(pool: &SqlitePool, username: &str, password: &str) -> Result<bool> {
    let digest = hash_password(password);

    let insert = sqlx::query("INSERT INTO users (username, password_digest) VALUES (?, ?)")
        .bind(username)
        .bind(&digest)
        .execute(pool)
        .await;

    match insert {
        Ok(_) => {
            info!(username = %username, "Registered new user");
            Ok(true)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            debug!(username = %username, "Registration rejected: username taken");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Verify a username/password pair.
///
/// Returns `true` iff a row exists for the username and its stored digest
/// equals the digest of the submitted password. A lookup miss is `false`,
/// not an error. No side effects.
pub async fn verify(pool: &SqlitePool, username: &str, password: &str) -> Result<bool> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT password_digest FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    match row {
        Some((stored_digest,)) => Ok(stored_digest == hash_password(password)),
        None => Ok(false),
    }
}

/// Number of registered users (used by tests and diagnostics)
pub async fn user_count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
