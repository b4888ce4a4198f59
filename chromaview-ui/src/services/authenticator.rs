//! Authenticator
//!
//! Verifies submitted credentials against the credential store and validates
//! signup requests. Every failure path is a distinct, user-facing condition;
//! nothing is silently swallowed.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

/// Authentication failures, each mapped to its own user-visible message
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password at login; retry allowed
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Signup for a username that already exists
    #[error("Username already exists")]
    DuplicateUsername,

    /// Signup password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Signup with an empty username or password
    #[error("Please fill in all fields")]
    MissingField,

    /// Credential store failure (not user-recoverable)
    #[error("Credential store error: {0}")]
    Store(#[from] chromaview_common::Error),
}

/// Verifies logins and signups against the credential store
#[derive(Clone)]
pub struct Authenticator {
    db: SqlitePool,
}

impl Authenticator {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Verify a login attempt.
    ///
    /// A lookup miss and a digest mismatch are indistinguishable to the
    /// caller: both are `InvalidCredentials`.
    pub async fn login_attempt(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if chromaview_common::db::verify(&self.db, username, password).await? {
            info!(username = %username, "Login succeeded");
            Ok(())
        } else {
            warn!(username = %username, "Login rejected: invalid credentials");
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Validate and execute a signup attempt.
    ///
    /// Validation order: confirmation match, then non-empty fields, then the
    /// store's uniqueness check. Nothing is written unless all three pass.
    pub async fn signup_attempt(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        if chromaview_common::db::register(&self.db, username, password).await? {
            Ok(())
        } else {
            Err(AuthError::DuplicateUsername)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaview_common::db::{create_users_table, user_count};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_authenticator() -> Authenticator {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        create_users_table(&pool).await.unwrap();
        Authenticator::new(pool)
    }

    #[tokio::test]
    async fn signup_then_login_succeeds() {
        let auth = test_authenticator().await;

        auth.signup_attempt("alice", "pw1", "pw1").await.unwrap();
        auth.login_attempt("alice", "pw1").await.unwrap();
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let auth = test_authenticator().await;

        auth.signup_attempt("alice", "pw1", "pw1").await.unwrap();

        let result = auth.login_attempt("alice", "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_of_unknown_user_is_invalid_credentials() {
        let auth = test_authenticator().await;

        let result = auth.login_attempt("nobody", "pw1").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn mismatched_confirmation_writes_nothing() {
        let auth = test_authenticator().await;

        let result = auth.signup_attempt("alice", "pw1", "pw2").await;
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));

        assert_eq!(user_count(&auth.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let auth = test_authenticator().await;

        let result = auth.signup_attempt("", "pw1", "pw1").await;
        assert!(matches!(result, Err(AuthError::MissingField)));

        let result = auth.signup_attempt("alice", "", "").await;
        assert!(matches!(result, Err(AuthError::MissingField)));
    }

    #[tokio::test]
    async fn mismatch_is_reported_before_missing_field() {
        let auth = test_authenticator().await;

        // Both checks would fail; confirmation mismatch is reported first
        let result = auth.signup_attempt("", "pw1", "other").await;
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let auth = test_authenticator().await;

        auth.signup_attempt("alice", "pw1", "pw1").await.unwrap();

        let result = auth.signup_attempt("alice", "pw2", "pw2").await;
        assert!(matches!(result, Err(AuthError::DuplicateUsername)));
    }
}
