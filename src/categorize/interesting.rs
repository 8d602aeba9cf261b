//! Keyword heuristics for "interesting" hosts.
//!
//! Matching is a case-insensitive substring test. A host is added at most
//! once per group, however many keywords of that group it matches, but may
//! land in several groups.

use crate::models::{HostRecord, InterestingFinds, InterestingGroup};

/// Matched against the URL and the title.
pub const ADMIN_KEYWORDS: [&str; 6] = [
    "admin",
    "login",
    "panel",
    "dashboard",
    "control",
    "administrator",
];

/// Matched against the URL only.
pub const API_KEYWORDS: [&str; 7] = ["api.", "/api", "/v1", "/v2", "/v3", "/graphql", "/rest"];

/// Matched against the URL only.
pub const DEV_PORTS: [&str; 6] = [":3000", ":5000", ":8000", ":8080", ":9000", ":4200"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Groups whose heuristics `record` satisfies, in display order.
pub fn matching_groups(record: &HostRecord) -> Vec<InterestingGroup> {
    let url = record.url.to_lowercase();
    let title = record.title.to_lowercase();

    let mut groups = Vec::new();
    if contains_any(&url, &ADMIN_KEYWORDS) || contains_any(&title, &ADMIN_KEYWORDS) {
        groups.push(InterestingGroup::AdminPanels);
    }
    if contains_any(&url, &API_KEYWORDS) {
        groups.push(InterestingGroup::ApiEndpoints);
    }
    if contains_any(&url, &DEV_PORTS) {
        groups.push(InterestingGroup::DevelopmentServers);
    }
    // SharedHosting needs resolved IPs, which probe records do not carry.
    groups
}

/// Appends the clean URL of `record` to every group it matches.
pub(crate) fn flag_interesting(record: &HostRecord, finds: &mut InterestingFinds) {
    for group in matching_groups(record) {
        finds.push(group, record.clean_url().to_string());
    }
}
