//! Artifact ingestor
//!
//! Stages one uploaded byte blob under a unique path and guarantees the
//! staged file is deleted exactly once on every exit path: success, parse
//! failure, extraction failure, or an early return anywhere in between. The
//! guarantee is carried by [`StagedArtifact`], whose drop removes the file
//! unless `release()` already did.

use crate::models::ChromatogramSeries;
use crate::parser::RecordParser;
use crate::services::extractor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Ingest failures, all user-recoverable (the user may re-upload)
#[derive(Debug, Error)]
pub enum IngestError {
    /// The external parser rejected the bytes (corrupt/unsupported file)
    #[error("Error processing file: {0}")]
    ParseFailed(String),

    /// Structurally valid record with no time-series in it
    #[error("No chromatograms found in the uploaded file")]
    NoSeriesFound,

    /// Staging I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A staged upload, owned until processing of that upload finishes.
///
/// Dropping the handle removes the underlying file; `release()` does the
/// same eagerly. Either way the file is deleted exactly once.
#[derive(Debug)]
pub struct StagedArtifact {
    path: PathBuf,
    released: bool,
}

impl StagedArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the staged file now instead of at drop
    pub fn release(mut self) {
        self.delete();
    }

    fn delete(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed staged artifact"),
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove staged artifact"
            ),
        }
    }
}

impl Drop for StagedArtifact {
    fn drop(&mut self) {
        self.delete();
    }
}

/// Stages uploads and runs the parse/extract pipeline over them
#[derive(Debug, Clone)]
pub struct ArtifactIngestor {
    staging_dir: PathBuf,
}

impl ArtifactIngestor {
    pub fn new(staging_dir: PathBuf) -> Self {
        Self { staging_dir }
    }

    /// Write the uploaded bytes to a unique staged location.
    ///
    /// Every upload gets its own uuid-named file; staged paths never collide
    /// across concurrent sessions.
    pub fn stage(&self, raw_bytes: &[u8]) -> Result<StagedArtifact, IngestError> {
        std::fs::create_dir_all(&self.staging_dir)?;

        let path = self.staging_dir.join(format!("{}.mzXML", Uuid::new_v4()));
        std::fs::write(&path, raw_bytes)?;

        debug!(
            path = %path.display(),
            bytes = raw_bytes.len(),
            "Staged uploaded artifact"
        );

        Ok(StagedArtifact { path, released: false })
    }

    /// Parse the staged bytes and extract the TIC trace.
    ///
    /// Parser rejections are reclassified as `ParseFailed`; the staged file
    /// is untouched here and is removed when the handle drops, whatever this
    /// returns.
    pub fn process(
        &self,
        artifact: &StagedArtifact,
        parser: &dyn RecordParser,
    ) -> Result<ChromatogramSeries, IngestError> {
        let bytes = std::fs::read(artifact.path())?;

        let record = parser
            .parse(&bytes)
            .map_err(|e| IngestError::ParseFailed(e.to_string()))?;

        extractor::extract_tic(&record)
    }
}
