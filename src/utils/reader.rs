//! Log file loader.
//!
//! Reads an access log into an ordered, newline-stripped line buffer. The
//! whole file is materialized up front; every aggregation pass then scans
//! the same immutable buffer.
//!
//! # Examples
//!
//! ```no_run
//! use access_audit::utils::reader::read_lines;
//!
//! let lines = read_lines("access.log").unwrap();
//! println!("{} lines loaded", lines.len());
//! ```

use crate::error::AuditError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the file at `path` into a vector of lines, in file order.
///
/// Returns [`AuditError::NotFound`] when the path does not exist and
/// [`AuditError::Read`] for any other I/O failure, including errors hit
/// partway through the file.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, AuditError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AuditError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        lines.push(line);
    }

    Ok(lines)
}
