//! Command-line options and the run configuration built from them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_HTTPX_BIN, DEFAULT_MAX_HOSTS, DEFAULT_SUBFINDER_BIN, PROBE_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How many hosts per category the detailed listing renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxHosts {
    /// Render at most this many hosts (always >= 1).
    Limit(usize),
    /// Render every host.
    All,
}

impl MaxHosts {
    /// Returns the cap, or `None` when unbounded.
    pub fn limit(self) -> Option<usize> {
        match self {
            MaxHosts::Limit(n) => Some(n),
            MaxHosts::All => None,
        }
    }

    /// True when a category of `count` hosts has to be truncated.
    pub fn is_exceeded_by(self, count: usize) -> bool {
        self.limit().is_some_and(|limit| count > limit)
    }
}

impl Default for MaxHosts {
    fn default() -> Self {
        MaxHosts::Limit(DEFAULT_MAX_HOSTS)
    }
}

impl fmt::Display for MaxHosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxHosts::Limit(n) => write!(f, "{n}"),
            MaxHosts::All => f.write_str("all"),
        }
    }
}

impl FromStr for MaxHosts {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(MaxHosts::All);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(MaxHosts::Limit(n)),
            _ => Err(format!(
                "invalid --max-hosts value '{s}': use a number >= 1 or 'all'"
            )),
        }
    }
}

/// Feature level requested from the probing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMode {
    /// Status code and title only.
    Simple,
    /// Status code, title and technology fingerprints.
    Full,
}

/// Error returned by [`Config::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use recon_status::{Config, MaxHosts};
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     max_hosts: MaxHosts::All,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recon_status",
    version,
    about = "Subdomain discovery + HTTP probing with categorized reporting",
    after_help = "Examples:\n  recon_status -d example.com                  # 25 hosts per category\n  recon_status -d example.com --max-hosts 50   # 50 hosts per category\n  recon_status -d example.com --max-hosts all  # every host\n  recon_status -d example.com -o ./results     # save reports to a directory\n  recon_status -d example.com --simple         # no technology detection"
)]
pub struct Config {
    /// Target domain
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Directory the reports are written to
    #[arg(short = 'o', long, default_value = ".")]
    pub output: PathBuf,

    /// Max hosts rendered per category (number or 'all')
    #[arg(long, default_value = "25", value_parser = MaxHosts::from_str)]
    pub max_hosts: MaxHosts,

    /// Simple probe mode (no technology detection)
    #[arg(long)]
    pub simple: bool,

    /// Probing timeout in seconds (default 900)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Subdomain discovery executable
    #[arg(long, default_value = DEFAULT_SUBFINDER_BIN)]
    pub subfinder_bin: String,

    /// HTTP probing executable
    #[arg(long, default_value = DEFAULT_HTTPX_BIN)]
    pub httpx_bin: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable colors in the rendered report
    #[arg(long)]
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            output: PathBuf::from("."),
            max_hosts: MaxHosts::default(),
            simple: false,
            timeout: None,
            subfinder_bin: DEFAULT_SUBFINDER_BIN.to_string(),
            httpx_bin: DEFAULT_HTTPX_BIN.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            no_color: false,
        }
    }
}

impl Config {
    pub fn probe_mode(&self) -> ProbeMode {
        if self.simple {
            ProbeMode::Simple
        } else {
            ProbeMode::Full
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        self.timeout.map(Duration::from_secs).unwrap_or(PROBE_TIMEOUT)
    }

    /// Checks the options clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let domain = self.domain.trim();
        if domain.is_empty() {
            return Err(ConfigValidationError {
                field: "domain",
                message: "must not be empty".to_string(),
            });
        }
        if self
            .domain
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(ConfigValidationError {
                field: "domain",
                message: format!("'{domain}' must be a bare domain name (no spaces or slashes)"),
            });
        }
        if self.timeout == Some(0) {
            return Err(ConfigValidationError {
                field: "timeout",
                message: "must be greater than 0 seconds".to_string(),
            });
        }
        if self.subfinder_bin.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "subfinder_bin",
                message: "must not be empty".to_string(),
            });
        }
        if self.httpx_bin.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "httpx_bin",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
