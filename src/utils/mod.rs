//! Utility functions.
//!
//! This module provides:
//! - Sanitizing of remote-controlled text before display
//! - Filename-safe rendering of user input

pub mod sanitize;

pub use sanitize::{sanitize_display_text, sanitize_filename_component};
