//! Subdomain discovery via subfinder.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use log::{debug, info};
use tokio::process::Command;

use crate::config::SUBFINDER_INSTALL_HINT;
use crate::error_handling::{ReconError, Step};

use super::{check_exit, non_empty_lines, spawn_error, with_ceiling};

/// Arguments for `subfinder -d <domain> -silent -o <output>`.
pub fn discovery_command_args(domain: &str, output: &Path) -> Vec<String> {
    vec![
        "-d".to_string(),
        domain.to_string(),
        "-silent".to_string(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

/// Runs subdomain discovery and returns the discovered hostnames.
///
/// The tool writes its results to `output`, which is read back afterwards.
///
/// # Errors
///
/// - [`ReconError::DependencyMissing`] if `bin` cannot be started
/// - [`ReconError::StepTimeout`] if it runs longer than `ceiling`
/// - [`ReconError::StepFailed`] if it exits non-zero
/// - [`ReconError::NoSubdomains`] if it found nothing
pub async fn run_discovery(
    bin: &str,
    domain: &str,
    output: &Path,
    ceiling: Duration,
) -> Result<Vec<String>, ReconError> {
    info!("Running subfinder for: {domain}");

    let child = Command::new(bin)
        .args(discovery_command_args(domain, output))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| spawn_error(Step::Discovery, bin, SUBFINDER_INSTALL_HINT, e))?;

    let result = with_ceiling(Step::Discovery, ceiling, child.wait_with_output()).await?;
    check_exit(Step::Discovery, bin, &result)?;

    let contents = match tokio::fs::read_to_string(output).await {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Could not read discovery output {}: {e}", output.display());
            String::new()
        }
    };

    let subdomains = non_empty_lines(&contents);
    if subdomains.is_empty() {
        return Err(ReconError::NoSubdomains {
            domain: domain.to_string(),
        });
    }

    info!("Found {} subdomains", subdomains.len());
    Ok(subdomains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_discovery_command_args() {
        let args = discovery_command_args("example.com", &PathBuf::from("/tmp/x/subs.txt"));
        assert_eq!(args, vec!["-d", "example.com", "-silent", "-o", "/tmp/x/subs.txt"]);
    }

    #[tokio::test]
    async fn test_run_discovery_missing_binary() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = run_discovery(
            "no-such-subfinder-9b3e",
            "example.com",
            &dir.path().join("subs.txt"),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ReconError::DependencyMissing { .. }));
    }
}
