//! JSON report.
//!
//! One pretty-printed document holding the run metadata, the statistics, the
//! categorized hosts, the interesting finds and every parsed probe record
//! (including the fields the categorizer does not interpret).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::TOOL_IDENTIFIER;
use crate::models::{CategorizedHosts, HostRecord, InterestingFinds, Stats};

use super::types::ReportContext;

#[derive(Serialize)]
struct Metadata<'a> {
    domain: &'a str,
    timestamp: String,
    tool: &'static str,
    total_results: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: Metadata<'a>,
    statistics: &'a Stats,
    categorized_results: &'a CategorizedHosts,
    interesting_finds: &'a InterestingFinds,
    raw_data: &'a [HostRecord],
}

impl<'a> From<&ReportContext<'a>> for JsonReport<'a> {
    fn from(ctx: &ReportContext<'a>) -> Self {
        Self {
            metadata: Metadata {
                domain: ctx.domain,
                timestamp: ctx.generated_at.to_rfc3339(),
                tool: TOOL_IDENTIFIER,
                total_results: ctx.records.len(),
            },
            statistics: &ctx.result.stats,
            categorized_results: &ctx.result.categorized,
            interesting_finds: &ctx.result.interesting,
            raw_data: ctx.records,
        }
    }
}

/// Writes the JSON report to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_json_report(ctx: &ReportContext<'_>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON report: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &JsonReport::from(ctx))
        .context("Failed to serialize JSON report")?;
    writer.write_all(b"\n")?;
    writer.flush().context("Failed to flush JSON report")?;
    Ok(())
}
