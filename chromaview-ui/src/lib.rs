//! chromaview-ui library interface
//!
//! Exposes the service layer and router for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use crate::parser::RecordParser;
use crate::render::SeriesRenderer;
use crate::services::{ArtifactIngestor, Authenticator, MetaboliteClient, SessionRegistry};
use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential database pool
    pub db: SqlitePool,
    /// Login/signup verification
    pub authenticator: Authenticator,
    /// Per-session authentication states
    pub sessions: SessionRegistry,
    /// Upload staging and processing
    pub ingestor: Arc<ArtifactIngestor>,
    /// External parsing collaborator
    pub parser: Arc<dyn RecordParser>,
    /// External rendering collaborator
    pub renderer: Arc<dyn SeriesRenderer>,
    /// Remote metabolite query client
    pub metabolites: Arc<MetaboliteClient>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        ingestor: ArtifactIngestor,
        parser: Arc<dyn RecordParser>,
        renderer: Arc<dyn SeriesRenderer>,
        metabolites: MetaboliteClient,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(db.clone()),
            db,
            sessions: SessionRegistry::new(),
            ingestor: Arc::new(ingestor),
            parser,
            renderer,
            metabolites: Arc::new(metabolites),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::ui_routes())
        .merge(api::auth_routes())
        .merge(api::chromatogram_routes())
        .merge(api::metabolite_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
