//! # access-audit
//!
//! Command-line tool for analyzing web-server access logs: per-source
//! request counts, endpoint hotspots, and suspicious-activity detection
//! from repeated failed-login signatures.
//!
//! ## Overview
//!
//! The tool is a single-pass batch pipeline over one in-memory line
//! buffer:
//!
//! 1. **Load** - read the whole log file into ordered lines
//! 2. **Aggregate** - three independent scans: requests per source
//!    address, endpoint access counts (with the single most-accessed
//!    endpoint), and failed-login counts filtered by a threshold
//! 3. **Report** - top-N console summary on stdout
//! 4. **Export** - full, untruncated tables to a four-section CSV file
//!
//! Every aggregation pass is a pure read-only scan with its own output
//! table, so pass order never affects results. Tie-breaks everywhere use
//! first-seen order, so repeated runs over the same file produce
//! byte-identical output.
//!
//! ## Input format
//!
//! Space-delimited access-log lines with the source address as the first
//! token and the HTTP request as a quoted `"METHOD /path HTTP/x.x"`
//! field:
//!
//! ```text
//! 203.0.113.5 - - [03/Dec/2024:10:12:36 +0000] "GET /home HTTP/1.1" 200 512
//! ```
//!
//! Lines without a request field still count toward per-source totals;
//! lines without any token are skipped.
//!
//! ## Example usage
//!
//! ```bash
//! # Analyze with defaults (top 5, log_analysis_results.csv)
//! access-audit access.log
//!
//! # Show only the two busiest sources, flag sources with >50 failures
//! access-audit access.log --top_ips 2 --failed_login_threshold 50
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - aggregation passes and result types
//! - [`commands`] - the end-to-end command implementation
//! - [`report`] - console report formatting
//! - [`export`] - CSV export
//! - [`utils`] - file loading
//! - [`error`] - typed error kinds

pub mod analysis;
pub mod commands;
pub mod error;
pub mod export;
pub mod report;
pub mod utils;
