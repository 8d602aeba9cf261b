//! Report persistence.
//!
//! A finished run is saved twice: a JSON document for machines and a plain
//! text summary for people. The two are written independently, so a failure
//! in one still leaves the other on disk. Persistence failures never abort the
//! run; they are logged and reflected as `None` in [`ReportPaths`].

mod json;
mod text;
mod types;

use std::path::Path;

use log::{info, warn};

pub use json::write_json_report;
pub use text::{render_text_report, write_text_report};
pub use types::{ExportFormat, ReportContext, ReportPaths};

/// Writes the JSON and text reports into `output_dir`, creating it if needed.
pub fn save_reports(ctx: &ReportContext<'_>, output_dir: &Path) -> ReportPaths {
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        warn!(
            "Could not create output directory {}: {e}",
            output_dir.display()
        );
        return ReportPaths::default();
    }

    let json_path = ctx.report_path(output_dir, ExportFormat::Json);
    let json = match write_json_report(ctx, &json_path) {
        Ok(()) => {
            info!("JSON report: {}", json_path.display());
            Some(json_path)
        }
        Err(e) => {
            warn!("Error saving JSON report: {e:#}");
            None
        }
    };

    let text_path = ctx.report_path(output_dir, ExportFormat::Text);
    let text = match write_text_report(ctx, &text_path) {
        Ok(()) => {
            info!("Text report: {}", text_path.display());
            Some(text_path)
        }
        Err(e) => {
            warn!("Error saving text report: {e:#}");
            None
        }
    };

    ReportPaths { json, text }
}
