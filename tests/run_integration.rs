//! Orchestrator tests against stub collaborators.
#![cfg(unix)]

mod helpers;

use helpers::{stub_httpx, stub_httpx_lines, stub_subfinder, test_config};
use recon_status::{exit_code_for, run_recon, ConfigValidationError, ReconError, Step};
use tempfile::TempDir;

const PROBE_LINES: [&str; 4] = [
    r#"{"url":"https://api.example.com","status_code":200,"title":"API","tech":["Nginx"]}"#,
    r#"{"url":"http://old.example.com","status_code":301,"title":"Moved"}"#,
    r#"{"url":"https://admin.example.com:8080","status_code":403,"title":"Forbidden"}"#,
    "this line is not json",
];

fn report_files(dir: &std::path::Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("recon_"))
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[tokio::test]
async fn test_full_run_writes_reports() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com", "old.example.com"]);
    let httpx = stub_httpx_lines(bins.path(), &PROBE_LINES);

    let report = run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .expect("run should succeed");

    assert_eq!(report.domain, "example.com");
    assert_eq!(report.total_results, 3);
    assert_eq!(report.stats.web_services, 3);
    assert_eq!(report.stats.fully_operational, 1);
    assert_eq!(report.stats.redirects, 1);
    assert_eq!(report.stats.blocked, 1);

    let json_path = report.report_paths.json.expect("json report");
    let text_path = report.report_paths.text.expect("text report");
    assert!(json_path.starts_with(out.path()));
    assert!(json_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("recon_example.com_"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(doc["metadata"]["total_results"], 3);
    assert_eq!(doc["raw_data"].as_array().unwrap().len(), 3);
    assert_eq!(doc["raw_data"][0]["tech"][0], "Nginx");
    assert_eq!(
        doc["interesting_finds"]["development_servers"][0],
        "admin.example.com:8080"
    );

    let text = std::fs::read_to_string(&text_path).unwrap();
    assert!(text.contains("RECONNAISSANCE REPORT - example.com"));
    assert!(text.contains("old.example.com (Status: 301)"));
}

#[tokio::test]
async fn test_staging_directory_is_removed() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx_lines(bins.path(), &PROBE_LINES[..1]);

    run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .expect("run should succeed");

    let staged = std::fs::read_to_string(bins.path().join("subfinder_output_path")).unwrap();
    let staging_dir = std::path::Path::new(&staged).parent().unwrap().to_path_buf();
    assert!(!staging_dir.exists(), "{} still exists", staging_dir.display());
}

#[tokio::test]
async fn test_staging_directory_is_removed_on_failure() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx(bins.path(), "exit 1");

    run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .unwrap_err();

    let staged = std::fs::read_to_string(bins.path().join("subfinder_output_path")).unwrap();
    let staging_dir = std::path::Path::new(&staged).parent().unwrap().to_path_buf();
    assert!(!staging_dir.exists());
}

#[tokio::test]
async fn test_missing_collaborator_is_dependency_error() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = bins.path().join("does-not-exist-httpx");

    let err = run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReconError>(),
        Some(ReconError::DependencyMissing { .. })
    ));
    assert!(err.to_string().contains("go install"));
    assert_eq!(exit_code_for(&err), 4);
    assert!(report_files(out.path()).is_empty());
    // Preflight runs before discovery
    assert!(!bins.path().join("subfinder_output_path").exists());
}

#[tokio::test]
async fn test_only_malformed_probe_output_is_no_results() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx_lines(bins.path(), &["garbage", r#"{"status_code":200}"#]);

    let err = run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReconError>(),
        Some(ReconError::NoResults)
    ));
    assert_eq!(exit_code_for(&err), 3);
    assert!(report_files(out.path()).is_empty());
}

#[tokio::test]
async fn test_empty_discovery_is_no_subdomains() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &[]);
    let httpx = stub_httpx_lines(bins.path(), &PROBE_LINES);

    let err = run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReconError>(),
        Some(ReconError::NoSubdomains { .. })
    ));
    assert_eq!(exit_code_for(&err), 3);
}

#[tokio::test]
async fn test_failing_probe_is_step_failure() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx(bins.path(), "echo 'rate limited' >&2\nexit 2");

    let err = run_recon(test_config(&subfinder, &httpx, out.path()))
        .await
        .unwrap_err();

    match err.downcast_ref::<ReconError>() {
        Some(ReconError::StepFailed { step, reason }) => {
            assert_eq!(*step, Step::Probing);
            assert!(reason.contains("rate limited"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(exit_code_for(&err), 1);
}

#[tokio::test]
async fn test_probe_ceiling_is_step_timeout() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx(bins.path(), "sleep 10");

    let mut config = test_config(&subfinder, &httpx, out.path());
    config.timeout = Some(1);

    let started = std::time::Instant::now();
    let err = run_recon(config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReconError>(),
        Some(ReconError::StepTimeout {
            step: Step::Probing,
            seconds: 1
        })
    ));
    assert!(started.elapsed() < std::time::Duration::from_secs(8));
    assert_eq!(exit_code_for(&err), 1);
}

#[tokio::test]
async fn test_invalid_config_starts_no_tool() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx_lines(bins.path(), &PROBE_LINES);

    let mut config = test_config(&subfinder, &httpx, out.path());
    config.domain = "   ".to_string();

    let err = run_recon(config).await.unwrap_err();
    assert!(err.downcast_ref::<ConfigValidationError>().is_some());
    assert_eq!(exit_code_for(&err), 1);
    assert!(!bins.path().join("subfinder_output_path").exists());
}

#[tokio::test]
async fn test_cancelled_run_removes_staging_and_writes_nothing() {
    let bins = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let subfinder = stub_subfinder(bins.path(), &["api.example.com"]);
    let httpx = stub_httpx(bins.path(), "sleep 30");
    let marker = bins.path().join("subfinder_output_path");

    // Dropping the run future is what the binary does on Ctrl-C.
    let run = run_recon(test_config(&subfinder, &httpx, out.path()));
    let cancelled = tokio::time::timeout(std::time::Duration::from_millis(1500), run).await;
    assert!(cancelled.is_err(), "run should still be probing when cancelled");

    let staged = std::fs::read_to_string(&marker).expect("discovery ran before the cancel");
    let staging_dir = std::path::Path::new(&staged).parent().unwrap().to_path_buf();
    assert!(!staging_dir.exists(), "{} still exists", staging_dir.display());
    assert!(report_files(out.path()).is_empty());
}
