//! Failed-login detection and threshold filtering.
//!
//! A line counts as a failed login when it contains one of the marker
//! substrings below. Detection is plain substring containment, not a
//! field-aware status check: a line whose byte count happens to contain
//! `401` is counted too. That looseness matches the established behavior
//! of this report and is kept deliberately.

use crate::analysis::requests::source_address;
use crate::analysis::types::FrequencyTable;

/// Failed-login count a source must exceed (strictly) before it is flagged.
pub const DEFAULT_FAILED_LOGIN_THRESHOLD: usize = 10;

/// Substrings treated as failed-login evidence.
const FAILED_LOGIN_MARKERS: [&str; 2] = ["401", "Invalid credentials"];

/// Counts failed-login lines per source address, then keeps only addresses
/// whose count is strictly greater than `threshold`.
///
/// Lines without a source token are skipped, mirroring request counting.
/// The returned table preserves first-seen order of the flagged addresses.
pub fn detect_suspicious_activity(lines: &[String], threshold: usize) -> FrequencyTable {
    let mut failed_logins = FrequencyTable::new();
    for line in lines {
        if !FAILED_LOGIN_MARKERS.iter().any(|m| line.contains(m)) {
            continue;
        }
        let Some(source) = source_address(line) else {
            continue;
        };
        failed_logins.increment(source);
    }

    let mut flagged = FrequencyTable::new();
    for (source, count) in failed_logins.iter() {
        if count > threshold {
            flagged.add(source, count);
        }
    }
    flagged
}
