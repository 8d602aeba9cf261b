//! Run banner, header and completion summary.

use chrono::{DateTime, Local};

use crate::config::{MaxHosts, RULE_WIDTH};
use crate::display::Palette;

const BANNER_INNER_WIDTH: usize = 67;

/// The boxed title printed when a run starts.
pub fn render_banner(palette: &Palette) -> String {
    let title = format!(
        "{} v{}",
        env!("CARGO_PKG_NAME").replace('_', " ").to_uppercase(),
        env!("CARGO_PKG_VERSION")
    );
    let subtitle = "subfinder + httpx: smart categorization & reports";
    let bar = "═".repeat(BANNER_INNER_WIDTH);
    let lines = [
        format!("╔{bar}╗"),
        format!("║{:<BANNER_INNER_WIDTH$}║", format!("           {title}")),
        format!("║{:<BANNER_INNER_WIDTH$}║", format!("           {subtitle}")),
        format!("╚{bar}╝"),
    ];
    palette.heading(&lines.join("\n"))
}

/// Target, start time and per-category cap for this run.
pub fn render_run_header(
    palette: &Palette,
    domain: &str,
    started_at: DateTime<Local>,
    max_hosts: MaxHosts,
) -> String {
    [
        format!("[*] Target: {}", palette.label(domain)),
        format!("[*] Start: {}", started_at.format("%Y-%m-%d %H:%M:%S")),
        format!("[*] Max hosts per category: {max_hosts}"),
    ]
    .join("\n")
}

pub fn render_completion(
    palette: &Palette,
    alive_hosts: usize,
    finished_at: DateTime<Local>,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let body = [
        rule.clone(),
        "SCAN COMPLETED SUCCESSFULLY".to_string(),
        format!("Total alive hosts: {alive_hosts}"),
        format!("Finished: {}", finished_at.format("%Y-%m-%d %H:%M:%S")),
        rule,
    ]
    .join("\n");
    palette.value(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_banner_box_is_aligned() {
        let banner = render_banner(&Palette::plain());
        let widths: Vec<usize> = banner.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == BANNER_INNER_WIDTH + 2));
        assert!(banner.contains("RECON STATUS v"));
    }

    #[test]
    fn test_run_header_shows_all_for_unbounded() {
        let header = render_run_header(&Palette::plain(), "example.com", at(), MaxHosts::All);
        assert!(header.contains("Target: example.com"));
        assert!(header.contains("Start: 2024-01-02 03:04:05"));
        assert!(header.ends_with("Max hosts per category: all"));

        let capped =
            render_run_header(&Palette::plain(), "example.com", at(), MaxHosts::Limit(10));
        assert!(capped.ends_with("Max hosts per category: 10"));
    }

    #[test]
    fn test_completion_summary() {
        let done = render_completion(&Palette::plain(), 42, at());
        assert!(done.contains("SCAN COMPLETED SUCCESSFULLY"));
        assert!(done.contains("Total alive hosts: 42"));
        assert!(done.contains("Finished: 2024-01-02 03:04:05"));
    }
}
