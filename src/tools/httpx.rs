//! HTTP probing via httpx.

use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use log::{debug, info};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::{ProbeMode, HTTPX_INSTALL_HINT};
use crate::error_handling::{ReconError, Step};

use super::{check_exit, non_empty_lines, spawn_error, with_ceiling};

/// Arguments for httpx in JSON-lines mode; full mode adds technology detection.
pub fn probe_command_args(mode: ProbeMode) -> Vec<&'static str> {
    match mode {
        ProbeMode::Simple => vec!["-silent", "-status-code", "-title", "-json"],
        ProbeMode::Full => vec!["-silent", "-status-code", "-title", "-tech-detect", "-json"],
    }
}

/// Probes `hosts` and stages the JSON lines httpx prints in `output`.
///
/// Hosts are fed on stdin, one per line. Feeding stdin and draining stdout
/// are driven together so a long host list cannot fill both pipes.
///
/// Returns the number of lines staged.
///
/// # Errors
///
/// - [`ReconError::DependencyMissing`] if `bin` cannot be started
/// - [`ReconError::StepTimeout`] if it runs longer than `ceiling`
/// - [`ReconError::StepFailed`] if it exits non-zero or staging fails
/// - [`ReconError::NoProbeOutput`] if it printed nothing
pub async fn run_probe(
    bin: &str,
    hosts: &[String],
    mode: ProbeMode,
    output: &Path,
    ceiling: Duration,
) -> Result<usize, ReconError> {
    info!("Running httpx on {} subdomains...", hosts.len());

    let mut child = Command::new(bin)
        .args(probe_command_args(mode))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| spawn_error(Step::Probing, bin, HTTPX_INSTALL_HINT, e))?;

    let mut input = hosts.join("\n");
    input.push('\n');
    let stdin = child.stdin.take();

    let feed = async move {
        let Some(mut stdin) = stdin else {
            return Ok(());
        };
        match stdin.write_all(input.as_bytes()).await {
            // The prober may stop reading early; that is its call.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
        // stdin is dropped here, closing the pipe
    };

    let run = async move {
        let (fed, result) = tokio::join!(feed, child.wait_with_output());
        if let Err(e) = fed {
            debug!("Writing hosts to httpx failed: {e}");
        }
        result
    };

    let result = with_ceiling(Step::Probing, ceiling, run).await?;
    check_exit(Step::Probing, bin, &result)?;

    let lines = non_empty_lines(&String::from_utf8_lossy(&result.stdout));
    if lines.is_empty() {
        return Err(ReconError::NoProbeOutput);
    }

    let mut staged = lines.join("\n");
    staged.push('\n');
    tokio::fs::write(output, staged)
        .await
        .map_err(|e| ReconError::StepFailed {
            step: Step::Probing,
            reason: format!("could not stage probe output in {}: {e}", output.display()),
        })?;

    info!("Found {} alive hosts", lines.len());
    Ok(lines.len())
}
