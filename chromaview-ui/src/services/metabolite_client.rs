//! Metabolite query client
//!
//! Thin wrapper over the remote data-query service. The core only relies on
//! the contract that a query returns zero or more ranked rows or fails with
//! a typed error; the wire protocol and ranking are the service's own
//! business.

use crate::models::MetaboliteRecord;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://metabolite-query.example.org/api/v1";
const USER_AGENT: &str = concat!("Chromaview/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Metabolite query failures
#[derive(Debug, Error)]
pub enum MetaboliteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Query service error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// HTTP client for the remote metabolite query service
#[derive(Debug, Clone)]
pub struct MetaboliteClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetaboliteClient {
    pub fn new() -> Result<Self, MetaboliteError> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self, MetaboliteError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MetaboliteError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Query metabolite records matching a compound name.
    ///
    /// Rows come back in the service's ranking order and are passed through
    /// unmodified.
    pub async fn query(&self, compound: &str) -> Result<Vec<MetaboliteRecord>, MetaboliteError> {
        let url = format!("{}/metabolites", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("compound", compound)])
            .send()
            .await
            .map_err(|e| MetaboliteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetaboliteError::Api(status.as_u16(), body));
        }

        let rows: Vec<MetaboliteRecord> = response
            .json()
            .await
            .map_err(|e| MetaboliteError::Parse(e.to_string()))?;

        debug!(compound = %compound, rows = rows.len(), "Metabolite query returned");

        Ok(rows)
    }
}
