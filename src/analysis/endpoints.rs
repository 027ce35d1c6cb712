//! Endpoint extraction and access counting.
//!
//! Access logs carry the HTTP request as a quoted field:
//!
//! ```text
//! 203.0.113.5 - - [03/Dec/2024:10:12:36 +0000] "GET /home HTTP/1.1" 200 512
//! ```
//!
//! The endpoint is the path between the method token and the following
//! space (the HTTP version in well-formed logs). Extraction is a small
//! hand-rolled tokenizer with one failure mode: a line that does not
//! contain `"` + `GET`/`POST` + space + non-empty path + space contributes
//! to no endpoint count.

use crate::analysis::types::FrequencyTable;

/// Request methods recognized in the quoted request field.
const METHODS: [&str; 2] = ["GET ", "POST "];

/// Extracts the request path from a log line, or `None` when the line has
/// no parseable quoted request field.
///
/// Scans for a `"` immediately followed by a recognized method and a space;
/// the path is the non-empty run of characters up to the next space. A
/// quote that does not lead a full match is skipped and scanning resumes at
/// the next quote.
pub fn parse_request_path(line: &str) -> Option<&str> {
    let mut rest = line;
    loop {
        let quote = rest.find('"')?;
        let after = &rest[quote + 1..];

        for method in METHODS {
            if let Some(tail) = after.strip_prefix(method) {
                if let Some(end) = tail.find(' ') {
                    if end > 0 {
                        return Some(&tail[..end]);
                    }
                }
            }
        }

        rest = after;
    }
}

/// Counts endpoint accesses across the whole line buffer. Lines without a
/// parseable request field are skipped silently.
pub fn count_endpoint_access(lines: &[String]) -> FrequencyTable {
    let mut counts = FrequencyTable::new();
    for line in lines {
        let Some(endpoint) = parse_request_path(line) else {
            continue;
        };
        counts.increment(endpoint);
    }
    counts
}
