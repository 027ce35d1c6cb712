//! Log aggregation passes.
//!
//! Three independent scans over the same immutable line buffer:
//!
//! - [`requests`] - request count per source address
//! - [`endpoints`] - endpoint access counts and the most-accessed endpoint
//! - [`suspicious`] - failed-login counting with threshold filtering
//!
//! Each pass owns its output table, so their order never affects results.
//! [`analyze`] runs all three and bundles the outcome into an
//! [`AnalysisResult`](types::AnalysisResult).

pub mod endpoints;
pub mod requests;
pub mod suspicious;
pub mod types;

pub use suspicious::DEFAULT_FAILED_LOGIN_THRESHOLD;
pub use types::{AnalysisConfig, AnalysisResult, FrequencyTable};

/// Runs all aggregation passes over the line buffer.
pub fn analyze(lines: &[String], config: &AnalysisConfig) -> AnalysisResult {
    let requests_per_source = requests::count_requests_per_source(lines);
    let endpoint_access = endpoints::count_endpoint_access(lines);
    let most_accessed = endpoint_access
        .max_entry()
        .map(|(endpoint, count)| (endpoint.to_string(), count));
    let suspicious =
        suspicious::detect_suspicious_activity(lines, config.failed_login_threshold);

    AnalysisResult {
        requests_per_source,
        endpoint_access,
        most_accessed,
        suspicious,
    }
}
