//! HTTP API surface
//!
//! Route builders per concern plus the session gate shared by every
//! authenticated endpoint.

pub mod auth;
pub mod chromatogram;
pub mod health;
pub mod metabolites;
pub mod ui;

use crate::{ApiError, AppState};
use axum::http::HeaderMap;
use uuid::Uuid;

pub use auth::auth_routes;
pub use chromatogram::chromatogram_routes;
pub use health::health_routes;
pub use metabolites::metabolite_routes;
pub use ui::ui_routes;

/// Header carrying the session id issued at login
pub const SESSION_HEADER: &str = "x-session-id";

/// The session gate: resolve and check the caller's session.
///
/// Consulted once per request; downstream ingest/extract/query code is
/// unreachable without an Authenticated session.
pub async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or_else(|| ApiError::Unauthorized("Not logged in".to_string()))?;

    if state.sessions.is_authenticated(session_id).await {
        Ok(session_id)
    } else {
        Err(ApiError::Unauthorized("Not logged in".to_string()))
    }
}
