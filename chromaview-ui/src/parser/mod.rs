//! Parser collaborator boundary
//!
//! The core pipeline never looks inside the mass-spectrometry wire format.
//! It hands raw bytes to a [`RecordParser`] and gets back a
//! [`StructuredRecord`]: an ordered collection of time-series, each yielding
//! (retention time, intensity) pairs in file order.

pub mod mzxml;

use thiserror::Error;

pub use mzxml::MzxmlParser;

/// Parser rejection (corrupt or unsupported input)
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// One time-series from a structured record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<(f64, f64)>,
}

impl TimeSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Points in the order the underlying file yielded them
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// A parsed scientific record: zero or more time-series in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredRecord {
    series: Vec<TimeSeries>,
}

impl StructuredRecord {
    pub fn new(series: Vec<TimeSeries>) -> Self {
        Self { series }
    }

    /// Time-series in the order the record presents them
    pub fn time_series(&self) -> &[TimeSeries] {
        &self.series
    }
}

/// Contract for the external parsing collaborator
pub trait RecordParser: Send + Sync {
    /// Parse raw uploaded bytes into a structured record, or reject them.
    fn parse(&self, bytes: &[u8]) -> Result<StructuredRecord, ParseError>;
}
