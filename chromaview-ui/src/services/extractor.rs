//! Series extractor
//!
//! Pulls the total-ion-chromatogram trace out of a parsed record. Pure: no
//! I/O, no mutation of the input.

use crate::models::{ChromatogramPoint, ChromatogramSeries};
use crate::parser::StructuredRecord;
use crate::services::ingestor::IngestError;

/// Extract the TIC from a structured record.
///
/// Selects the FIRST time-series in collection order and maps its points to
/// (time, intensity) pairs in the order the record yields them; the input is
/// assumed already time-ascending and is not re-sorted. An absence of any
/// series is a recoverable, user-visible condition, not a crash.
///
/// Whether "first" is always the intended TIC (as opposed to a series
/// labelled as such) is inherited behavior; see DESIGN.md.
pub fn extract_tic(record: &StructuredRecord) -> Result<ChromatogramSeries, IngestError> {
    let first = record
        .time_series()
        .first()
        .ok_or(IngestError::NoSeriesFound)?;

    let points = first
        .points()
        .iter()
        .map(|&(time, intensity)| ChromatogramPoint { time, intensity })
        .collect();

    Ok(ChromatogramSeries::new(points))
}
