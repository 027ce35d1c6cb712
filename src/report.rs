//! Console report formatting.
//!
//! Pure formatting over an [`AnalysisResult`]: top-N tables for sources and
//! endpoints, the most-accessed endpoint, and every flagged source address
//! (the suspicious table is never truncated). The functions are generic
//! over the output writer so tests can capture the report.

use crate::analysis::AnalysisResult;
use std::io::{self, Write};

/// Column width used to align keys in console tables. Cosmetic only.
const KEY_WIDTH: usize = 20;

/// Writes the full console report.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    top_ips: usize,
    top_endpoints: usize,
) -> io::Result<()> {
    writeln!(out, "IP Address Request Count")?;
    for (source, count) in result.requests_per_source.sorted_desc().iter().take(top_ips) {
        writeln!(out, "{:<KEY_WIDTH$} {}", source, count)?;
    }

    writeln!(out, "\nMost Frequently Accessed Endpoint:")?;
    match &result.most_accessed {
        Some((endpoint, count)) => writeln!(out, "{} (Accessed {} times)", endpoint, count)?,
        None => writeln!(out, "(none) (Accessed 0 times)")?,
    }

    writeln!(out, "\nSuspicious Activity Detected:")?;
    writeln!(out, "IP Address Failed Login Attempts")?;
    for (source, count) in result.suspicious.iter() {
        writeln!(out, "{:<KEY_WIDTH$} {}", source, count)?;
    }

    writeln!(out, "\nTop Endpoints Accessed:")?;
    writeln!(out, "Endpoint Access Count")?;
    for (endpoint, count) in result.endpoint_access.sorted_desc().iter().take(top_endpoints) {
        writeln!(out, "{:<KEY_WIDTH$} {}", endpoint, count)?;
    }

    Ok(())
}

/// Writes the report to stdout.
pub fn print_report(result: &AnalysisResult, top_ips: usize, top_endpoints: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, result, top_ips, top_endpoints)
}
