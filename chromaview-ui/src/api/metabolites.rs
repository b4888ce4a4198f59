//! Metabolite table endpoint (thin pass-through to the query service)

use crate::api::require_session;
use crate::models::MetaboliteRecord;
use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/metabolites
#[derive(Debug, Deserialize)]
pub struct MetaboliteQuery {
    pub compound: String,
}

/// Response payload: rows in the service's ranking order
#[derive(Debug, Serialize)]
pub struct MetaboliteTableResponse {
    pub rows: Vec<MetaboliteRecord>,
}

/// GET /api/metabolites?compound=...
pub async fn list_metabolites(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MetaboliteQuery>,
) -> ApiResult<Json<MetaboliteTableResponse>> {
    require_session(&state, &headers).await?;

    if params.compound.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Compound name cannot be empty".to_string(),
        ));
    }

    let rows = state.metabolites.query(&params.compound).await?;

    Ok(Json(MetaboliteTableResponse { rows }))
}

/// Build metabolite routes
pub fn metabolite_routes() -> Router<AppState> {
    Router::new().route("/api/metabolites", get(list_metabolites))
}
