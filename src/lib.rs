//! recon_status library: subdomain discovery, HTTP probing and categorized reporting
//!
//! A run discovers the subdomains of a target with `subfinder`, probes them
//! with `httpx`, sorts every live host into a status category, renders a
//! terminal report and saves a JSON and a text report.
//!
//! # Example
//!
//! ```no_run
//! use recon_status::{run_recon, Config, MaxHosts};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     max_hosts: MaxHosts::All,
//!     simple: true,
//!     ..Default::default()
//! };
//!
//! let report = run_recon(config).await?;
//! println!("{} live hosts, {} redirects", report.total_results, report.stats.redirects);
//! # Ok(())
//! # }
//! ```
//!
//! The pure stages are usable on their own:
//!
//! ```
//! use recon_status::{categorize, parse_probe_output};
//!
//! let records = parse_probe_output([
//!     r#"{"url":"https://api.example.com","status_code":200,"title":"API"}"#,
//!     "not json",
//! ]);
//! let result = categorize(&records);
//! assert_eq!(result.stats.fully_operational, 1);
//! assert_eq!(result.interesting.api_endpoints.len(), 1);
//! ```
//!
//! # Requirements
//!
//! [`run_recon`] needs a Tokio runtime with the process and time drivers enabled.

pub mod app;
pub mod categorize;
pub mod config;
pub mod display;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod tools;
mod utils;

// Re-export public API
pub use categorize::{categorize, Categorization};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, MaxHosts, ProbeMode};
pub use display::{Palette, Presenter};
pub use error_handling::{exit_code_for, ErrorKind, InitializationError, ReconError, Step};
pub use export::ReportPaths;
pub use parse::{parse_probe_file, parse_probe_line, parse_probe_output};
pub use run::{run_recon, ReconReport};

// Internal run module (the orchestrator)
mod run {
    use std::io::{self, Write};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::Local;
    use log::{info, warn};

    use crate::app::{render_banner, render_completion, render_run_header};
    use crate::categorize::categorize;
    use crate::config::{
        Config, DISCOVERY_TIMEOUT, HTTPX_INSTALL_HINT, PROBE_OUTPUT_FILE_NAME,
        SUBDOMAINS_FILE_NAME, SUBFINDER_INSTALL_HINT,
    };
    use crate::display::{Palette, Presenter};
    use crate::error_handling::ReconError;
    use crate::export::{save_reports, ReportContext, ReportPaths};
    use crate::models::Stats;
    use crate::parse::parse_probe_file;
    use crate::tools::{ensure_installed, run_discovery, run_probe};

    /// Results of a completed run.
    #[derive(Debug, Clone)]
    pub struct ReconReport {
        /// Target domain
        pub domain: String,
        /// Number of parsed probe records
        pub total_results: usize,
        /// Counters computed by the categorizer
        pub stats: Stats,
        /// Where the reports were saved; `None` for a format that failed
        pub report_paths: ReportPaths,
        /// Wall-clock duration of the run
        pub elapsed_seconds: f64,
    }

    /// Runs discovery, probing, categorization, display and persistence for
    /// `config.domain`.
    ///
    /// The terminal report is written to stdout; progress is logged. Staged
    /// tool output lives in a temporary directory that is removed when this
    /// future completes or is dropped.
    ///
    /// # Errors
    ///
    /// - `ConfigValidationError` if `config` is invalid (no tool is started)
    /// - [`ReconError`] if a tool is missing, times out, fails, or the run
    ///   produces nothing to report
    /// - an I/O error if the temporary directory cannot be created
    ///
    /// Failing to save a report is not an error; see [`ReconReport::report_paths`].
    pub async fn run_recon(config: Config) -> Result<ReconReport> {
        let start_time = Instant::now();
        config.validate()?;

        let palette = if config.no_color {
            Palette::plain()
        } else {
            Palette::colored()
        };
        let mut stdout = io::stdout();
        print_block(&mut stdout, &render_banner(&palette));

        ensure_installed(&config.subfinder_bin, SUBFINDER_INSTALL_HINT).await?;
        ensure_installed(&config.httpx_bin, HTTPX_INSTALL_HINT).await?;

        print_block(
            &mut stdout,
            &format!(
                "{}\n",
                render_run_header(&palette, &config.domain, Local::now(), config.max_hosts)
            ),
        );

        // Removed on drop, including when the run is cancelled.
        let staging = tempfile::Builder::new()
            .prefix("recon_status_")
            .tempdir()
            .context("Failed to create staging directory")?;
        let subs_file = staging.path().join(SUBDOMAINS_FILE_NAME);
        let alive_file = staging.path().join(PROBE_OUTPUT_FILE_NAME);

        let subdomains = run_discovery(
            &config.subfinder_bin,
            &config.domain,
            &subs_file,
            DISCOVERY_TIMEOUT,
        )
        .await?;

        run_probe(
            &config.httpx_bin,
            &subdomains,
            config.probe_mode(),
            &alive_file,
            config.probe_timeout(),
        )
        .await?;

        let records = parse_probe_file(&alive_file)
            .with_context(|| format!("Failed to read probe output {}", alive_file.display()))?;
        if records.is_empty() {
            return Err(ReconError::NoResults.into());
        }
        info!("Successfully processed {} results", records.len());

        let result = categorize(&records);
        Presenter::new(config.max_hosts, palette).present(&result, &mut stdout);

        let report_paths = save_reports(
            &ReportContext {
                domain: &config.domain,
                generated_at: Local::now(),
                records: &records,
                result: &result,
            },
            &config.output,
        );

        if let Err(e) = staging.close() {
            warn!("Failed to remove staging directory: {e}");
        }

        print_block(
            &mut stdout,
            &format!("\n{}", render_completion(&palette, records.len(), Local::now())),
        );

        Ok(ReconReport {
            domain: config.domain,
            total_results: records.len(),
            stats: result.stats,
            report_paths,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    fn print_block<W: Write>(out: &mut W, block: &str) {
        if let Err(e) = writeln!(out, "{block}").and_then(|()| out.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}
