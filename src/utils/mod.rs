//! Shared utilities.
//!
//! - [`reader`] - Log file loader

pub mod reader;
