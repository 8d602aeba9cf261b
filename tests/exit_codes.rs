//! Tests for the exit code mapping.

use anyhow::Context;
use recon_status::{exit_code_for, ReconError, Step};
use strum::IntoEnumIterator;

#[test]
fn test_exit_code_per_error() {
    let cases = [
        (
            ReconError::DependencyMissing {
                tool: "httpx".to_string(),
                install_hint: "go install example",
            },
            4,
        ),
        (
            ReconError::StepTimeout {
                step: Step::Discovery,
                seconds: 300,
            },
            1,
        ),
        (
            ReconError::StepFailed {
                step: Step::Probing,
                reason: "exit status 1".to_string(),
            },
            1,
        ),
        (
            ReconError::NoSubdomains {
                domain: "example.com".to_string(),
            },
            3,
        ),
        (ReconError::NoProbeOutput, 3),
        (ReconError::NoResults, 3),
    ];
    for (error, code) in cases {
        assert_eq!(error.exit_code(), code, "{error}");
        assert_eq!(exit_code_for(&anyhow::Error::from(error)), code);
    }
}

#[test]
fn test_exit_code_survives_context() {
    let err = Err::<(), _>(ReconError::NoResults)
        .context("while reporting")
        .unwrap_err();
    assert_eq!(exit_code_for(&err), 3);
}

#[test]
fn test_unexpected_fault_is_failure() {
    let err = anyhow::anyhow!("disk on fire");
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn test_step_names() {
    let names: Vec<String> = Step::iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["subdomain discovery", "HTTP probing"]);
}
