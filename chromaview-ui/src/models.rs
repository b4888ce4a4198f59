//! Core data types shared across the ingest/extract/render path

use serde::{Deserialize, Serialize};

/// One point of a chromatographic trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChromatogramPoint {
    /// Retention time in seconds
    pub time: f64,
    /// Ion intensity at that retention time
    pub intensity: f64,
}

/// An aligned (time, intensity) trace, time-ascending.
///
/// Derived from one uploaded record, never persisted; it exists only for the
/// duration of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromatogramSeries {
    pub points: Vec<ChromatogramPoint>,
}

impl ChromatogramSeries {
    pub fn new(points: Vec<ChromatogramPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row of the metabolite table, as ranked by the remote query service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetaboliteRecord {
    /// Common name of the metabolite
    pub name: String,
    /// Molecular formula
    pub formula: Option<String>,
    /// Monoisotopic mass in Daltons
    pub monoisotopic_mass: Option<f64>,
    /// Relevance score assigned by the query service
    pub score: Option<f64>,
}
