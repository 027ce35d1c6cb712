//! Error types for log loading and result export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// `NotFound` and `Read` abort the run before any aggregation happens;
/// `Write` is raised after the console report has already been printed,
/// which is deliberate: a failed export does not retract the report.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The input log file does not exist.
    #[error("log file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input log file exists but could not be read.
    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
