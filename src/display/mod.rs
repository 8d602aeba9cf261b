//! Terminal report rendering.
//!
//! Pure rendering over the output of [`categorize`](crate::categorize::categorize):
//! - statistics panel (two columns)
//! - category overview with percentages
//! - per-category listing, capped at [`MaxHosts`] with a sample of what was left out
//! - interesting finds
//!
//! Rendering never fails; empty input renders empty sections.

mod format;
mod style;

use std::io::Write;

use log::warn;

use crate::categorize::Categorization;
use crate::config::{
    MaxHosts, DISPLAY_FIELD_WIDTH, INTERESTING_PREVIEW_COUNT, INTERESTING_SHOW_ALL_LIMIT,
    OMITTED_SAMPLE_SIZE, RULE_WIDTH,
};
use crate::models::{CategorizedHost, CategorizedHosts, Category, InterestingFinds, Stats};
use crate::utils::sanitize_display_text;

pub use format::{percentage, truncate};
pub use style::Palette;

/// Column width of the URL and title fields (truncated width plus gutter).
const COLUMN_WIDTH: usize = DISPLAY_FIELD_WIDTH + 3;
const STATS_LABEL_WIDTH: usize = 25;
const STATS_VALUE_WIDTH: usize = 10;

/// Renders categorized results for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    max_hosts: MaxHosts,
    palette: Palette,
}

impl Presenter {
    pub fn new(max_hosts: MaxHosts, palette: Palette) -> Self {
        Self { max_hosts, palette }
    }

    fn rule(&self, ch: char) -> String {
        ch.to_string().repeat(RULE_WIDTH)
    }

    /// Renders every section in report order.
    pub fn render_report(&self, result: &Categorization) -> String {
        let sections = [
            self.render_statistics(&result.stats),
            self.render_category_overview(&result.categorized),
            self.render_category_details(&result.categorized),
            self.render_interesting_finds(&result.interesting),
        ];
        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the full report to `out`.
    ///
    /// A failing sink (closed pipe, full disk) is logged and otherwise ignored.
    pub fn present<W: Write>(&self, result: &Categorization, out: &mut W) {
        let report = self.render_report(result);
        if let Err(e) = writeln!(out, "{report}").and_then(|()| out.flush()) {
            warn!("Failed to write report to terminal: {e}");
        }
    }

    /// Two-column statistics panel.
    pub fn render_statistics(&self, stats: &Stats) -> String {
        let left = [
            ("Total Discovered", stats.total_discovered),
            ("DNS Resolved", stats.dns_resolved),
            ("Online Hosts", stats.online_hosts),
            ("Web Services", stats.web_services),
            ("No Response", stats.no_response),
        ];
        let right = [
            ("Fully Operational", stats.fully_operational),
            ("Redirects", stats.redirects),
            ("Blocked", stats.blocked),
            ("Server Errors", stats.errors),
        ];

        let cell = |label: &str, value: usize| {
            format!(
                "{}{}",
                self.palette
                    .label(&format!("{label:<width$}", width = STATS_LABEL_WIDTH)),
                self.palette
                    .value(&format!("{value:>width$}", width = STATS_VALUE_WIDTH))
            )
        };

        let mut lines = vec![
            String::new(),
            self.palette.heading("📈 COMPREHENSIVE STATISTICS"),
            self.rule('─'),
        ];
        for (i, (label, value)) in left.iter().enumerate() {
            let mut line = cell(label, *value);
            if let Some((r_label, r_value)) = right.get(i) {
                line.push_str("   ");
                line.push_str(&cell(r_label, *r_value));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Count and share of each non-empty category, in display order.
    pub fn render_category_overview(&self, categorized: &CategorizedHosts) -> String {
        let total = categorized.total();
        let mut lines = vec![
            String::new(),
            self.palette.heading(&self.rule('=')),
            self.palette.heading("📊 CATEGORIZED RESULTS - SMART VIEW"),
            self.palette.heading(&self.rule('=')),
            String::new(),
            self.palette
                .accent(&format!("{:^width$}", "📋 CATEGORY OVERVIEW", width = RULE_WIDTH)),
            self.rule('─'),
        ];

        for (category, hosts) in categorized.non_empty() {
            let count = hosts.len();
            let display_mode = match self.max_hosts.limit() {
                Some(limit) if self.max_hosts.is_exceeded_by(count) => format!("Top {limit}"),
                _ => "Showing all".to_string(),
            };
            lines.push(format!(
                "  {} {:<20} {} ({:5.1}%) - {}",
                category.icon(),
                category.label(),
                self.palette.value(&format!("{count:>4}")),
                percentage(count, total),
                display_mode
            ));
        }

        lines.push(String::new());
        lines.push(
            self.palette
                .label(&format!("Total hosts across all categories: {total}")),
        );
        lines.join("\n")
    }

    /// Per-category host listing.
    pub fn render_category_details(&self, categorized: &CategorizedHosts) -> String {
        categorized
            .non_empty()
            .map(|(category, hosts)| self.render_category(category, hosts))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Listing of one category, truncated to `max_hosts` when it is exceeded.
    pub fn render_category(&self, category: Category, hosts: &[CategorizedHost]) -> String {
        let count = hosts.len();
        let (shown, omitted) = match self.max_hosts.limit() {
            Some(limit) if self.max_hosts.is_exceeded_by(count) => hosts.split_at(limit),
            _ => (hosts, &hosts[count..]),
        };

        let mode = if omitted.is_empty() {
            "Showing ALL".to_string()
        } else {
            format!("Showing top {}", shown.len())
        };

        let mut lines = vec![
            String::new(),
            self.palette.category(category, &self.rule('─')),
            self.palette.category(
                category,
                &format!(
                    "{} {} ({} hosts - {})",
                    category.icon(),
                    category.label(),
                    count,
                    mode
                ),
            ),
            self.palette.category(category, &self.rule('─')),
        ];

        if !omitted.is_empty() {
            lines.push(format!(
                "{} Large category! Showing {} of {} hosts.",
                self.palette.warning("[!]"),
                shown.len(),
                count
            ));
        }

        lines.extend(
            shown
                .iter()
                .enumerate()
                .map(|(i, host)| self.render_host(category, host, i + 1)),
        );

        if !omitted.is_empty() {
            lines.push(String::new());
            lines.push(
                self.palette
                    .warning(&format!("Not shown ({} hosts):", omitted.len())),
            );
            lines.push(format!(
                "  {} {}",
                self.palette.warning("•"),
                omitted_preview(omitted)
            ));
        }

        lines.join("\n")
    }

    /// One listing row: index, status, URL, title.
    pub fn render_host(&self, category: Category, host: &CategorizedHost, index: usize) -> String {
        let url = truncate(&sanitize_display_text(&host.clean_url), DISPLAY_FIELD_WIDTH);
        let title = truncate(&sanitize_display_text(&host.title), DISPLAY_FIELD_WIDTH);
        format!(
            "  {} {} {} {}",
            self.palette.dim(&format!("{index:3}.")),
            self.palette
                .category(category, &format!("{:4}", host.status_code)),
            self.palette
                .label(&format!("{url:<width$}", width = COLUMN_WIDTH)),
            self.palette
                .title(&format!("{title:<width$}", width = COLUMN_WIDTH))
        )
        .trim_end()
        .to_string()
    }

    /// Non-empty interesting groups; empty string when there are none.
    pub fn render_interesting_finds(&self, interesting: &InterestingFinds) -> String {
        if interesting.is_empty() {
            return String::new();
        }

        let mut lines = vec![
            String::new(),
            self.palette.accent("🎯 INTERESTING FINDS"),
            self.rule('─'),
        ];

        for (group, hosts) in interesting.iter().filter(|(_, h)| !h.is_empty()) {
            lines.push(String::new());
            lines.push(
                self.palette
                    .warning(&format!("{}: ({} found)", group.label(), hosts.len())),
            );

            let shown = if hosts.len() <= INTERESTING_SHOW_ALL_LIMIT {
                hosts
            } else {
                &hosts[..INTERESTING_PREVIEW_COUNT]
            };
            lines.extend(
                shown
                    .iter()
                    .map(|host| format!("  • {}", sanitize_display_text(host))),
            );
            if shown.len() < hosts.len() {
                lines.push(format!(
                    "  {}",
                    self.palette
                        .warning(&format!("... (+{} more)", hosts.len() - shown.len()))
                ));
            }
        }
        lines.join("\n")
    }
}

/// Comma-separated clean URLs of the first few omitted hosts, with a
/// `(+K more)` suffix when more were omitted than sampled.
fn omitted_preview(omitted: &[CategorizedHost]) -> String {
    let mut preview = omitted
        .iter()
        .take(OMITTED_SAMPLE_SIZE)
        .map(|h| sanitize_display_text(&h.clean_url))
        .collect::<Vec<_>>()
        .join(", ");
    if omitted.len() > OMITTED_SAMPLE_SIZE {
        preview.push_str(&format!(" ... (+{} more)", omitted.len() - OMITTED_SAMPLE_SIZE));
    }
    preview
}
