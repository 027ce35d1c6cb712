//! Command implementations.
//!
//! - [`analyze`] - end-to-end log analysis: load, aggregate, report, export

pub mod analyze;
