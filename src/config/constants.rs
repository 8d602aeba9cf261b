//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including collaborator timeouts, display limits and report labels.

use std::time::Duration;

// Collaborator ceilings
/// Wall-clock ceiling for the subdomain discovery step.
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(300);
/// Default wall-clock ceiling for the HTTP probing step.
/// Larger than discovery because probe cost scales with the number of hosts.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(900);
/// Ceiling for the `-h` invocation used to check that a collaborator is installed.
pub const DEPENDENCY_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

// Collaborator binaries
pub const DEFAULT_SUBFINDER_BIN: &str = "subfinder";
pub const DEFAULT_HTTPX_BIN: &str = "httpx";
pub const SUBFINDER_INSTALL_HINT: &str =
    "go install -v github.com/projectdiscovery/subfinder/v2/cmd/subfinder@latest";
pub const HTTPX_INSTALL_HINT: &str =
    "go install -v github.com/projectdiscovery/httpx/cmd/httpx@latest";

// Staged intermediate files (inside the per-run temp directory)
pub const SUBDOMAINS_FILE_NAME: &str = "subs.txt";
pub const PROBE_OUTPUT_FILE_NAME: &str = "alive.jsonl";

// Presentation limits
/// Default number of hosts rendered per category before truncation kicks in.
pub const DEFAULT_MAX_HOSTS: usize = 25;
/// Maximum display width (in characters) of the URL and title columns.
pub const DISPLAY_FIELD_WIDTH: usize = 40;
/// Number of omitted hosts sampled below a truncated category.
pub const OMITTED_SAMPLE_SIZE: usize = 3;
/// Interesting-find groups up to this size are rendered in full.
pub const INTERESTING_SHOW_ALL_LIMIT: usize = 10;
/// Number of entries rendered for an interesting-find group above the limit.
pub const INTERESTING_PREVIEW_COUNT: usize = 8;
/// Width of the horizontal rules in the rendered report.
pub const RULE_WIDTH: usize = 70;

// Record defaults
/// Title used when the probe output carries none.
pub const NO_TITLE: &str = "No Title";
/// Status code sentinel meaning the host gave no HTTP response.
pub const NO_RESPONSE_STATUS: i64 = 0;

/// Tool identifier written into the JSON report metadata.
pub const TOOL_IDENTIFIER: &str = concat!(env!("CARGO_PKG_NAME"), "_v", env!("CARGO_PKG_VERSION"));

// Exit codes
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NO_RESULTS: i32 = 3;
pub const EXIT_DEPENDENCY_MISSING: i32 = 4;
