//! Probe output parsing.
//!
//! Turns the line-delimited JSON printed by the probing tool into
//! [`HostRecord`](crate::models::HostRecord)s. Malformed lines and records
//! without a `url` are dropped here and never surface as errors.

mod probe;

// Re-export public API
pub use probe::{parse_probe_file, parse_probe_line, parse_probe_output};
