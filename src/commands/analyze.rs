//! End-to-end log analysis command.
//!
//! Loads the log file, runs the aggregation passes, prints the console
//! report, and exports the full tables to CSV.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: top 5 sources/endpoints, log_analysis_results.csv
//! access-audit access.log
//!
//! # Narrow console output, custom export path
//! access-audit access.log --top_ips 2 --output_file results.csv
//!
//! # Stricter brute-force flagging
//! access-audit access.log --failed_login_threshold 50
//! ```

use crate::analysis::{analyze, AnalysisConfig};
use crate::export::export_csv;
use crate::report::print_report;
use crate::utils::reader::read_lines;
use anyhow::{Context, Result};

/// Runs the full pipeline over one log file.
///
/// The console report is printed before the export is attempted, so an
/// unwritable output path fails the run without retracting the report.
pub fn run(
    log_file: &str,
    top_ips: usize,
    top_endpoints: usize,
    output_file: &str,
    failed_login_threshold: usize,
) -> Result<()> {
    let lines = read_lines(log_file)?;
    eprintln!("Loaded {} lines from {}", lines.len(), log_file);

    let config = AnalysisConfig {
        failed_login_threshold,
    };
    let result = analyze(&lines, &config);

    print_report(&result, top_ips, top_endpoints).context("failed to write console report")?;

    export_csv(&result, output_file)?;
    eprintln!("\nResults saved to {}", output_file);

    Ok(())
}
