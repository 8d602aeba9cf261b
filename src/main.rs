//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `recon_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use recon_status::initialization::init_logger_with;
use recon_status::{exit_code_for, run_recon, Config, ConfigValidationError, ReconError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Usage errors exit with code 2 here, before any tool runs
    let config = Config::parse();

    init_logger_with(
        config.log_level.clone().into(),
        config.log_format,
        !config.no_color,
    )
    .context("Failed to initialize logger")?;

    // The run future owns the staging directory and the child processes;
    // dropping it on Ctrl-C kills the children and removes the directory.
    let outcome = tokio::select! {
        result = run_recon(config) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        None => {
            warn!("Scan interrupted");
            Ok(())
        }
        Some(Ok(report)) => {
            info!(
                "Processed {} live host{} in {:.1}s",
                report.total_results,
                if report.total_results == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Some(Err(e)) => {
            if is_expected_failure(&e) {
                eprintln!("recon_status error: {:#}", e);
            } else {
                // Unexpected fault: print the whole chain
                eprintln!("recon_status error: {:?}", e);
            }
            process::exit(exit_code_for(&e));
        }
    }
}

fn is_expected_failure(e: &anyhow::Error) -> bool {
    e.downcast_ref::<ReconError>().is_some() || e.downcast_ref::<ConfigValidationError>().is_some()
}
