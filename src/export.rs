//! CSV export of the full analysis results.
//!
//! The export mirrors the console report but is never truncated: all four
//! tables are written in full. Sections are separated by a blank row and
//! each starts with its own header row.

use crate::analysis::AnalysisResult;
use crate::error::AuditError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes the four result tables to `path` as CSV, overwriting any
/// existing file.
///
/// Section order: request counts per source (descending), the
/// most-accessed endpoint, flagged sources (first-seen order), endpoint
/// access counts (descending). An empty endpoint table exports the
/// most-accessed header with no data row.
pub fn export_csv(result: &AnalysisResult, path: impl AsRef<Path>) -> Result<(), AuditError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AuditError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let mut file = File::create(path).map_err(|source| AuditError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: csv::Error| AuditError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Other, source),
    };
    let io_err = |source: std::io::Error| AuditError::Write {
        path: path.to_path_buf(),
        source,
    };

    write_table(
        &mut file,
        ["IP Address", "Request Count"],
        &result.requests_per_source.sorted_desc(),
    )
    .map_err(write_err)?;
    file.write_all(b"\n").map_err(io_err)?;

    let most_accessed: Vec<(&str, usize)> = result
        .most_accessed
        .as_ref()
        .map(|(endpoint, count)| (endpoint.as_str(), *count))
        .into_iter()
        .collect();
    write_table(
        &mut file,
        ["Most Accessed Endpoint", "Access Count"],
        &most_accessed,
    )
    .map_err(write_err)?;
    file.write_all(b"\n").map_err(io_err)?;

    write_table(
        &mut file,
        ["IP Address", "Failed Login Attempts"],
        &result.suspicious.iter().collect::<Vec<_>>(),
    )
    .map_err(write_err)?;
    file.write_all(b"\n").map_err(io_err)?;

    write_table(
        &mut file,
        ["Endpoint", "Access Count"],
        &result.endpoint_access.sorted_desc(),
    )
    .map_err(write_err)?;

    file.flush().map_err(io_err)?;
    Ok(())
}

/// Writes one header row plus data rows through a fresh CSV writer over
/// the shared file handle.
fn write_table(
    file: &mut File,
    header: [&str; 2],
    rows: &[(&str, usize)],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(&mut *file);
    writer.write_record(header)?;
    for (key, count) in rows {
        writer.write_record([*key, count.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
