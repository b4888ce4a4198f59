//! Login, signup and logout endpoints

use crate::api::SESSION_HEADER;
use crate::{ApiResult, AppState};
use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for POST /api/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response payload for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session id; subsequent requests carry it in the X-Session-Id header
    pub session_id: Uuid,
}

/// Request payload for POST /api/signup
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub confirm: String,
}

/// Generic success envelope
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/login
///
/// Verifies the credentials, then transitions a fresh session to
/// Authenticated. The session guard only ever sees a login after
/// verification succeeded.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    state
        .authenticator
        .login_attempt(&payload.username, &payload.password)
        .await?;

    let session_id = state.sessions.open().await;
    state.sessions.login(session_id).await;

    Ok(Json(LoginResponse { session_id }))
}

/// POST /api/signup
///
/// Creates the account; the user still logs in afterwards.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state
        .authenticator
        .signup_attempt(&payload.username, &payload.password, &payload.confirm)
        .await?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Account created successfully! Please login.".to_string(),
    }))
}

/// POST /api/logout
///
/// Always succeeds; logging out an unknown or Anonymous session is a no-op.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<StatusResponse> {
    if let Some(session_id) = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
    {
        state.sessions.logout(session_id).await;
    }

    Json(StatusResponse {
        success: true,
        message: "Logged out".to_string(),
    })
}

/// Build authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
        .route("/api/logout", post(logout))
}
