//! Per-source request counting.
//!
//! The source address is the first whitespace-delimited token of a log line,
//! taken as-is; it is not validated as a real network address.

use crate::analysis::types::FrequencyTable;

/// Extracts the source address from a log line, or `None` for a line with
/// no tokens.
pub(crate) fn source_address(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Counts requests per source address across the whole line buffer.
///
/// Empty and whitespace-only lines carry no source token and are skipped.
pub fn count_requests_per_source(lines: &[String]) -> FrequencyTable {
    let mut counts = FrequencyTable::new();
    for line in lines {
        let Some(source) = source_address(line) else {
            continue;
        };
        counts.increment(source);
    }
    counts
}
