use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// ScanError – everything the pipeline can report
// ---------------------------------------------------------------------------

/// Errors raised while scanning, interpolating or rendering.
///
/// `MetadataMissing` and `ExtractionTimeout` are per-file: the scanner logs
/// them and keeps going. Everything else is fatal for the run.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Tag absent, malformed, or the file could not be parsed at all.
    #[error("{}: no usable {metric} tag ({reason})", path.display())]
    MetadataMissing {
        path: PathBuf,
        metric: Metric,
        reason: String,
    },

    #[error("{}: metadata read did not finish within {timeout:?}", path.display())]
    ExtractionTimeout { path: PathBuf, timeout: Duration },

    /// Interpolation needs at least two distinct values.
    #[error("need at least 2 distinct values to draw a curve, found {distinct}")]
    InsufficientData { distinct: usize },

    #[error("cannot read directory {}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart: {message}")]
    Render { message: String },

    #[error("failed to start metadata reader thread")]
    Worker(#[source] std::io::Error),
}

impl ScanError {
    pub fn metadata_missing(
        path: impl Into<PathBuf>,
        metric: Metric,
        reason: impl Into<String>,
    ) -> Self {
        Self::MetadataMissing {
            path: path.into(),
            metric,
            reason: reason.into(),
        }
    }

    pub fn render(message: impl std::fmt::Display) -> Self {
        Self::Render {
            message: message.to_string(),
        }
    }

    /// Whether the scanner should log this error and move on to the next file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ScanError::MetadataMissing { .. } | ScanError::ExtractionTimeout { .. }
        )
    }
}
