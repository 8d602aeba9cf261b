//! Error type definitions.
//!
//! This module defines the failure taxonomy of a recon run.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{EXIT_DEPENDENCY_MISSING, EXIT_FAILURE, EXIT_NO_RESULTS};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Pipeline step that talks to an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Step {
    /// Subdomain enumeration (subfinder)
    Discovery,
    /// HTTP probing (httpx)
    Probing,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Discovery => "subdomain discovery",
            Step::Probing => "HTTP probing",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`ReconError`], used for exit codes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// A collaborator binary could not be located or started
    DependencyMissing,
    /// A collaborator exited non-zero or ran past its ceiling
    StepFailure,
    /// The run produced nothing to categorize
    EmptyResult,
}

impl ErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::DependencyMissing => EXIT_DEPENDENCY_MISSING,
            ErrorKind::StepFailure => EXIT_FAILURE,
            ErrorKind::EmptyResult => EXIT_NO_RESULTS,
        }
    }
}

/// Fatal errors of a recon run.
///
/// Malformed probe lines and report-writing failures are absorbed locally
/// and never show up here.
#[derive(Error, Debug)]
pub enum ReconError {
    /// The collaborator binary is not installed (or not executable).
    #[error("{tool} not found! Install with: {install_hint}")]
    DependencyMissing {
        tool: String,
        install_hint: &'static str,
    },

    /// The step ran past its wall-clock ceiling.
    #[error("{step} timed out after {seconds}s")]
    StepTimeout { step: Step, seconds: u64 },

    /// The step exited unsuccessfully or its I/O failed.
    #[error("{step} failed: {reason}")]
    StepFailed { step: Step, reason: String },

    /// Discovery succeeded but found nothing.
    #[error("no subdomains found for {domain}")]
    NoSubdomains { domain: String },

    /// Probing succeeded but printed nothing.
    #[error("HTTP probing found no live hosts")]
    NoProbeOutput,

    /// Probe output contained no usable records.
    #[error("no results found")]
    NoResults,
}

impl ReconError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReconError::DependencyMissing { .. } => ErrorKind::DependencyMissing,
            ReconError::StepTimeout { .. } | ReconError::StepFailed { .. } => {
                ErrorKind::StepFailure
            }
            ReconError::NoSubdomains { .. }
            | ReconError::NoProbeOutput
            | ReconError::NoResults => ErrorKind::EmptyResult,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

/// Picks the process exit code for an error returned by the run.
///
/// Walks the anyhow chain looking for a [`ReconError`]; anything else is an
/// unexpected fault.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ReconError>())
        .map(ReconError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
