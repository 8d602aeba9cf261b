//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{Color, Colorize};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate, so
/// `RUST_LOG=debug` still works without any CLI flags. Plain output is
/// colored on a terminal unless `color` is false. Json output writes one
/// object per line and is never colored.
///
/// Log lines go to stderr; the report itself is written to stdout.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug recon_status -d example.com
/// recon_status -d example.com --log-level warn --log-format json
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    color: bool,
) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("recon_status", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(move |buf, record| {
                writeln!(buf, "{} {}", plain_prefix(record.level(), color), record.args())
            });
        }
    }

    // try_init: tests may install a logger more than once per process
    builder.try_init()?;
    Ok(())
}

/// `[*] [INFO]`-style prefix of a plain log line.
///
/// Colour is applied per line, never through `colored`'s process-wide
/// override, so log settings cannot change how the report on stdout looks.
fn plain_prefix(level: log::Level, color: bool) -> String {
    let (marker, tint) = match level {
        log::Level::Error => ("[-]", Color::Red),
        log::Level::Warn => ("[!]", Color::Yellow),
        log::Level::Info => ("[*]", Color::Green),
        log::Level::Debug => ("[.]", Color::Blue),
        log::Level::Trace => ("[~]", Color::Magenta),
    };
    let name = level.to_string();
    if color {
        format!("{marker} [{}]", name.color(tint))
    } else {
        format!("{marker} [{name}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error_instead_of_panicking() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain, false);
        let again = init_logger_with(LevelFilter::Debug, LogFormat::Json, false);
        assert!(matches!(again, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_json_format_leaves_report_colouring_alone() {
        let before = colored::control::SHOULD_COLORIZE.should_colorize();
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Json, true);
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain, false);
        assert_eq!(colored::control::SHOULD_COLORIZE.should_colorize(), before);
    }

    #[test]
    fn test_plain_prefix_without_color() {
        assert_eq!(plain_prefix(log::Level::Warn, false), "[!] [WARN]");
        assert_eq!(plain_prefix(log::Level::Info, false), "[*] [INFO]");
        assert!(plain_prefix(log::Level::Error, true).contains("ERROR"));
    }
}
