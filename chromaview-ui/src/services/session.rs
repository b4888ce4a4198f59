//! Session guard
//!
//! A two-state machine per logical session: Anonymous until a successful
//! login, Authenticated until logout. One [`SessionState`] exists per
//! session, held in the [`SessionRegistry`] and keyed by a random session
//! id; there is no process-wide flag. The guard performs no I/O - handlers
//! consult it once per request to decide whether the ingest/extract path is
//! reachable at all.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Per-session authentication state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    authenticated: bool,
}

impl SessionState {
    /// New sessions start Anonymous
    pub fn new() -> Self {
        Self { authenticated: false }
    }

    /// Anonymous -> Authenticated. Only called after credential verification
    /// has succeeded.
    pub fn login(&mut self) {
        self.authenticated = true;
    }

    /// Authenticated -> Anonymous. Always allowed; a no-op when already
    /// Anonymous.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Holds the live sessions, keyed by session id
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new Anonymous session and return its id
    pub async fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, SessionState::new());
        debug!(session_id = %id, "Opened session");
        id
    }

    /// Transition the session to Authenticated
    pub async fn login(&self, id: Uuid) {
        if let Some(state) = self.sessions.write().await.get_mut(&id) {
            state.login();
        }
    }

    /// Transition the session to Anonymous and drop it. A no-op for unknown
    /// or already-Anonymous sessions.
    pub async fn logout(&self, id: Uuid) {
        if let Some(mut state) = self.sessions.write().await.remove(&id) {
            state.logout();
            debug!(session_id = %id, "Closed session");
        }
    }

    pub async fn is_authenticated(&self, id: Uuid) -> bool {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(SessionState::is_authenticated)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_anonymous() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut state = SessionState::new();

        state.login();
        assert!(state.is_authenticated());

        state.logout();
        assert!(!state.is_authenticated());

        // Re-enterable: a second login is allowed after logout
        state.login();
        assert!(state.is_authenticated());
    }

    #[test]
    fn logout_before_login_is_a_no_op() {
        let mut state = SessionState::new();
        state.logout();
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn registry_gates_by_session_id() {
        let registry = SessionRegistry::new();

        let id = registry.open().await;
        assert!(!registry.is_authenticated(id).await);

        registry.login(id).await;
        assert!(registry.is_authenticated(id).await);

        // A different id is never authenticated by someone else's login
        assert!(!registry.is_authenticated(Uuid::new_v4()).await);

        registry.logout(id).await;
        assert!(!registry.is_authenticated(id).await);
    }

    #[tokio::test]
    async fn logout_of_unknown_session_is_a_no_op() {
        let registry = SessionRegistry::new();
        registry.logout(Uuid::new_v4()).await;
    }
}
