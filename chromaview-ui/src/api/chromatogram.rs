//! Chromatogram upload endpoint
//!
//! The one request with real state-transition logic: session gate, staging,
//! parse, extract, render, and unconditional cleanup of the staged file.

use crate::api::require_session;
use crate::render::PlotLabels;
use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

/// Response payload for a rendered chromatogram
#[derive(Debug, Serialize)]
pub struct ChromatogramResponse {
    /// SVG document ready for inline display
    pub svg: String,
    /// Number of (time, intensity) points in the extracted trace
    pub point_count: usize,
}

/// POST /api/chromatogram
///
/// Multipart body with one `file` field holding an mzXML document.
/// The staged copy of the upload is deleted on every exit path; the handle's
/// drop covers parse and extraction failures as well as success.
pub async fn upload_chromatogram(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<Json<ChromatogramResponse>> {
    require_session(&state, &headers).await?;

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed upload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Malformed upload: {}", e)))?;

        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    if !filename.to_ascii_lowercase().ends_with(".mzxml") {
        return Err(ApiError::BadRequest(
            "Expected an .mzXML file".to_string(),
        ));
    }

    info!(filename = %filename, bytes = bytes.len(), "Processing uploaded file");

    let artifact = state.ingestor.stage(&bytes)?;
    let result = state.ingestor.process(&artifact, state.parser.as_ref());
    artifact.release();

    let series = result?;

    let labels = PlotLabels {
        x_label: "Time (s)".to_string(),
        y_label: "Intensity".to_string(),
        title: "Total Ion Chromatogram".to_string(),
    };
    let svg = state.renderer.render(&series, &labels);

    Ok(Json(ChromatogramResponse {
        svg,
        point_count: series.len(),
    }))
}

/// Build chromatogram routes
pub fn chromatogram_routes() -> Router<AppState> {
    Router::new().route("/api/chromatogram", post(upload_chromatogram))
}
