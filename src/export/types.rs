//! Export types.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::categorize::Categorization;
use crate::models::HostRecord;
use crate::utils::sanitize_filename_component;

/// Report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Full structured report (metadata, stats, categories, finds, raw records)
    Json,
    /// Human-readable summary
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

/// Everything a report is written from.
#[derive(Clone, Copy, Debug)]
pub struct ReportContext<'a> {
    pub domain: &'a str,
    pub generated_at: DateTime<Local>,
    pub records: &'a [HostRecord],
    pub result: &'a Categorization,
}

impl ReportContext<'_> {
    /// `<dir>/recon_<domain>_<YYYYmmdd_HHMMSS>.<ext>`
    pub fn report_path(&self, dir: &Path, format: ExportFormat) -> PathBuf {
        dir.join(format!(
            "recon_{}_{}.{}",
            sanitize_filename_component(self.domain),
            self.generated_at.format("%Y%m%d_%H%M%S"),
            format.extension()
        ))
    }
}

/// Paths of the reports that were written; `None` for a format that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: Option<PathBuf>,
    pub text: Option<PathBuf>,
}
