//! Error handling.
//!
//! This module provides the error taxonomy of a run:
//! - **Dependency missing**: a collaborator binary cannot be started
//! - **Step failure**: a collaborator exits non-zero or exceeds its ceiling
//! - **Empty result**: nothing was discovered, probed or parsed
//!
//! Malformed probe lines and report-writing failures are recovered where they
//! happen and never reach this module.

mod types;

// Re-export public API
pub use types::{exit_code_for, ErrorKind, InitializationError, ReconError, Step};
