//! External collaborators.
//!
//! Discovery (`subfinder`) and probing (`httpx`) run as child processes with a
//! wall-clock ceiling each. Exceeding the ceiling kills the child and fails the
//! step; there are no retries and no partial results.

mod httpx;
mod subfinder;

use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;

use log::debug;
use tokio::process::Command;

use crate::config::DEPENDENCY_CHECK_TIMEOUT;
use crate::error_handling::{ReconError, Step};

// Re-export public API
pub use httpx::{probe_command_args, run_probe};
pub use subfinder::{discovery_command_args, run_discovery};

/// Maximum number of stderr characters quoted in a step failure.
const STDERR_EXCERPT_CHARS: usize = 300;

/// Checks that `bin` can be started, by running `bin -h`.
///
/// Only a spawn failure counts as missing; the help output and exit status
/// are ignored.
///
/// # Errors
///
/// Returns [`ReconError::DependencyMissing`] if the process cannot be spawned.
pub async fn ensure_installed(
    bin: &str,
    install_hint: &'static str,
) -> Result<(), ReconError> {
    let mut child = Command::new(bin)
        .arg("-h")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            debug!("Failed to start {bin}: {e}");
            ReconError::DependencyMissing {
                tool: bin.to_string(),
                install_hint,
            }
        })?;

    match tokio::time::timeout(DEPENDENCY_CHECK_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => debug!("{bin} -h exited with {status}"),
        Ok(Err(e)) => debug!("Waiting for {bin} -h failed: {e}"),
        Err(_) => debug!("{bin} -h did not exit within {DEPENDENCY_CHECK_TIMEOUT:?}"),
    }
    Ok(())
}

/// Maps a spawn failure to the error taxonomy.
fn spawn_error(step: Step, bin: &str, install_hint: &'static str, error: io::Error) -> ReconError {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ReconError::DependencyMissing {
                tool: bin.to_string(),
                install_hint,
            }
        }
        _ => ReconError::StepFailed {
            step,
            reason: format!("could not start {bin}: {error}"),
        },
    }
}

/// Awaits `fut` for at most `ceiling`.
async fn with_ceiling<F, T>(step: Step, ceiling: Duration, fut: F) -> Result<T, ReconError>
where
    F: std::future::Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(ceiling, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ReconError::StepFailed {
            step,
            reason: e.to_string(),
        }),
        Err(_) => Err(ReconError::StepTimeout {
            step,
            seconds: ceiling.as_secs(),
        }),
    }
}

/// Fails the step when the child exited unsuccessfully.
fn check_exit(step: Step, bin: &str, output: &Output) -> Result<(), ReconError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let excerpt: String = stderr.trim().chars().take(STDERR_EXCERPT_CHARS).collect();
    let reason = if excerpt.is_empty() {
        format!("{bin} exited with {}", output.status)
    } else {
        format!("{bin} exited with {}: {excerpt}", output.status)
    };
    Err(ReconError::StepFailed { step, reason })
}

/// Non-empty, trimmed lines of `text`.
fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines() {
        assert_eq!(
            non_empty_lines("a.example.com\n\n  b.example.com  \r\n"),
            vec!["a.example.com", "b.example.com"]
        );
        assert!(non_empty_lines("\n \n").is_empty());
    }

    #[test]
    fn test_spawn_error_not_found_is_dependency_missing() {
        let err = spawn_error(
            Step::Probing,
            "httpx",
            crate::config::HTTPX_INSTALL_HINT,
            io::Error::new(io::ErrorKind::NotFound, "nope"),
        );
        assert!(matches!(err, ReconError::DependencyMissing { .. }));
    }

    #[test]
    fn test_spawn_error_other_is_step_failure() {
        let err = spawn_error(
            Step::Discovery,
            "subfinder",
            crate::config::SUBFINDER_INSTALL_HINT,
            io::Error::new(io::ErrorKind::Other, "boom"),
        );
        assert!(matches!(err, ReconError::StepFailed { step: Step::Discovery, .. }));
    }

    #[tokio::test]
    async fn test_ensure_installed_missing_binary() {
        let err = ensure_installed(
            "definitely-not-a-real-binary-4f1c2",
            crate::config::HTTPX_INSTALL_HINT,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ReconError::DependencyMissing { .. }));
    }

    #[tokio::test]
    async fn test_with_ceiling_times_out() {
        let err = with_ceiling(Step::Probing, Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, io::Error>(())
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ReconError::StepTimeout { step: Step::Probing, .. }));
    }

    #[tokio::test]
    async fn test_with_ceiling_maps_io_error() {
        let err = with_ceiling(Step::Discovery, Duration::from_secs(1), async {
            Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ReconError::StepFailed { .. }));
    }
}
