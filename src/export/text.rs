//! Plain-text report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::RULE_WIDTH;

use super::types::ReportContext;

const SECTION_RULE_WIDTH: usize = 60;
const SUB_RULE_WIDTH: usize = 40;

/// Renders the text report.
pub fn render_text_report(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("RECONNAISSANCE REPORT - {}\n", ctx.domain));
    out.push_str(&format!(
        "Generated: {}\n",
        ctx.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("{rule}\n\n"));

    out.push_str("STATISTICS\n");
    out.push_str(&format!("{}\n", "-".repeat(SUB_RULE_WIDTH)));
    for (label, value) in ctx.result.stats.labeled() {
        out.push_str(&format!("{label}: {value}\n"));
    }

    out.push_str("\n\nCATEGORIZED RESULTS\n");
    out.push_str(&format!("{}\n", "=".repeat(SECTION_RULE_WIDTH)));

    for (category, hosts) in ctx.result.categorized.non_empty() {
        out.push_str(&format!(
            "\n{} ({} hosts)\n",
            category.as_str().to_uppercase(),
            hosts.len()
        ));
        out.push_str(&format!("{}\n", "-".repeat(SUB_RULE_WIDTH)));
        for host in hosts {
            out.push_str(&format!(
                "{} (Status: {})\n",
                host.clean_url, host.status_code
            ));
            out.push_str(&format!("  Title: {}\n\n", host.title));
        }
    }
    out
}

/// Writes the text report to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_text_report(ctx: &ReportContext<'_>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create text report: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_text_report(ctx).as_bytes())
        .context("Failed to write text report")?;
    writer.flush().context("Failed to flush text report")?;
    Ok(())
}
