//! Data model shared by the parser, categorizer, presenter and exporters.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// One host as reported by the probing tool.
///
/// `url`, `status_code` and `title` are the interpreted fields. `raw` is the
/// probe record exactly as decoded (original keys, no defaults filled in) and
/// is the only part that gets serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostRecord {
    #[serde(skip)]
    pub url: String,
    /// HTTP status, `0` when the host gave no response.
    #[serde(skip)]
    pub status_code: i64,
    #[serde(skip)]
    pub title: String,
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

impl HostRecord {
    /// Builds a record whose raw form holds just the three interpreted fields.
    pub fn new(url: impl Into<String>, status_code: i64, title: impl Into<String>) -> Self {
        let url = url.into();
        let title = title.into();
        let mut raw = Map::new();
        raw.insert("url".to_string(), Value::from(url.as_str()));
        raw.insert("status_code".to_string(), Value::from(status_code));
        raw.insert("title".to_string(), Value::from(title.as_str()));
        Self {
            url,
            status_code,
            title,
            raw,
        }
    }

    /// `url` with its `https://` or `http://` prefix removed.
    pub fn clean_url(&self) -> &str {
        strip_scheme(&self.url)
    }

    pub fn is_https(&self) -> bool {
        self.url.starts_with("https://")
    }
}

/// Removes a leading `https://` or `http://` from `url`.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Operational category of a host. Variant order is the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FullyOperational,
    /// Declared for display; the status rules never assign it.
    HttpsOnly,
    /// Declared for display; the status rules never assign it.
    HttpOnly,
    Redirects,
    Errors,
    Blocked,
    NoResponse,
}

impl Category {
    /// Snake-case key, as used in the reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FullyOperational => "fully_operational",
            Category::HttpsOnly => "https_only",
            Category::HttpOnly => "http_only",
            Category::Redirects => "redirects",
            Category::Errors => "errors",
            Category::Blocked => "blocked",
            Category::NoResponse => "no_response",
        }
    }

    /// Heading used in the terminal report.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FullyOperational => "FULLY OPERATIONAL",
            Category::HttpsOnly => "HTTPS ONLY",
            Category::HttpOnly => "HTTP ONLY",
            Category::Redirects => "REDIRECTING",
            Category::Errors => "SERVER ERRORS",
            Category::Blocked => "ACCESS BLOCKED",
            Category::NoResponse => "NO RESPONSE",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::FullyOperational => "✅",
            Category::HttpsOnly => "🔐",
            Category::HttpOnly => "⚠️",
            Category::Redirects => "↪️",
            Category::Errors => "🚨",
            Category::Blocked => "🚫",
            Category::NoResponse => "🔴",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready view of a [`HostRecord`], created once during categorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedHost {
    pub url: String,
    pub clean_url: String,
    pub status_code: i64,
    pub title: String,
    pub is_https: bool,
}

impl From<&HostRecord> for CategorizedHost {
    fn from(record: &HostRecord) -> Self {
        Self {
            url: record.url.clone(),
            clean_url: record.clean_url().to_string(),
            status_code: record.status_code,
            title: record.title.clone(),
            is_https: record.is_https(),
        }
    }
}

/// Hosts bucketed by [`Category`]. Every category is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategorizedHosts {
    buckets: BTreeMap<Category, Vec<CategorizedHost>>,
}

impl Default for CategorizedHosts {
    fn default() -> Self {
        Self {
            buckets: Category::iter().map(|c| (c, Vec::new())).collect(),
        }
    }
}

impl CategorizedHosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, category: Category, host: CategorizedHost) {
        self.buckets.entry(category).or_default().push(host);
    }

    /// Hosts of `category`, in input order.
    pub fn get(&self, category: Category) -> &[CategorizedHost] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All categories in display order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CategorizedHost])> + '_ {
        Category::iter().map(move |c| (c, self.get(c)))
    }

    /// Non-empty categories in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[CategorizedHost])> + '_ {
        self.iter().filter(|(_, hosts)| !hosts.is_empty())
    }

    /// Number of hosts across all categories.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Aggregate counters of one categorization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_discovered: usize,
    pub dns_resolved: usize,
    pub online_hosts: usize,
    pub web_services: usize,
    pub fully_operational: usize,
    pub https_only: usize,
    pub http_only: usize,
    pub redirects: usize,
    pub errors: usize,
    pub blocked: usize,
    pub no_response: usize,
}

impl Stats {
    /// Sum of the exclusive per-category counters.
    pub fn category_total(&self) -> usize {
        self.fully_operational
            + self.https_only
            + self.http_only
            + self.redirects
            + self.errors
            + self.blocked
            + self.no_response
    }

    /// Every counter with a human-readable label, in report order.
    pub fn labeled(&self) -> [(&'static str, usize); 11] {
        [
            ("Total Discovered", self.total_discovered),
            ("DNS Resolved", self.dns_resolved),
            ("Online Hosts", self.online_hosts),
            ("Web Services", self.web_services),
            ("Fully Operational", self.fully_operational),
            ("HTTPS Only", self.https_only),
            ("HTTP Only", self.http_only),
            ("Redirects", self.redirects),
            ("Errors", self.errors),
            ("Blocked", self.blocked),
            ("No Response", self.no_response),
        ]
    }
}

/// Keyword-heuristic groups of "interesting" hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InterestingGroup {
    AdminPanels,
    ApiEndpoints,
    DevelopmentServers,
    /// Needs IP-level data the probe output does not carry; always empty.
    SharedHosting,
}

impl InterestingGroup {
    pub fn label(&self) -> &'static str {
        match self {
            InterestingGroup::AdminPanels => "Admin Panels",
            InterestingGroup::ApiEndpoints => "Api Endpoints",
            InterestingGroup::DevelopmentServers => "Development Servers",
            InterestingGroup::SharedHosting => "Shared Hosting",
        }
    }
}

/// Clean URLs of the hosts flagged by each [`InterestingGroup`], in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterestingFinds {
    pub admin_panels: Vec<String>,
    pub api_endpoints: Vec<String>,
    pub development_servers: Vec<String>,
    pub shared_hosting: Vec<String>,
}

impl InterestingFinds {
    pub fn get(&self, group: InterestingGroup) -> &[String] {
        match group {
            InterestingGroup::AdminPanels => &self.admin_panels,
            InterestingGroup::ApiEndpoints => &self.api_endpoints,
            InterestingGroup::DevelopmentServers => &self.development_servers,
            InterestingGroup::SharedHosting => &self.shared_hosting,
        }
    }

    pub(crate) fn push(&mut self, group: InterestingGroup, clean_url: String) {
        let list = match group {
            InterestingGroup::AdminPanels => &mut self.admin_panels,
            InterestingGroup::ApiEndpoints => &mut self.api_endpoints,
            InterestingGroup::DevelopmentServers => &mut self.development_servers,
            InterestingGroup::SharedHosting => &mut self.shared_hosting,
        };
        list.push(clean_url);
    }

    /// All groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (InterestingGroup, &[String])> + '_ {
        InterestingGroup::iter().map(move |g| (g, self.get(g)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, hosts)| hosts.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://a.example.com"), "a.example.com");
        assert_eq!(strip_scheme("http://a.example.com:8080/x"), "a.example.com:8080/x");
        assert_eq!(strip_scheme("a.example.com"), "a.example.com");
    }

    #[test]
    fn test_categorized_host_from_record() {
        let record = HostRecord::new("https://a.example.com", 200, "Home");
        let host = CategorizedHost::from(&record);
        assert_eq!(host.clean_url, "a.example.com");
        assert!(host.is_https);

        let plain = CategorizedHost::from(&HostRecord::new("http://b.example.com", 200, "x"));
        assert!(!plain.is_https);
    }

    #[test]
    fn test_categorized_hosts_starts_with_every_category_empty() {
        let hosts = CategorizedHosts::new();
        assert_eq!(hosts.iter().count(), 7);
        assert!(hosts.is_empty());
        assert_eq!(hosts.non_empty().count(), 0);
    }

    #[test]
    fn test_category_display_order() {
        let order: Vec<Category> = Category::iter().collect();
        assert_eq!(
            order,
            vec![
                Category::FullyOperational,
                Category::HttpsOnly,
                Category::HttpOnly,
                Category::Redirects,
                Category::Errors,
                Category::Blocked,
                Category::NoResponse,
            ]
        );
    }

    #[test]
    fn test_record_serializes_raw_fields_flat() {
        let mut record = HostRecord::new("https://a.example.com", 200, "Home");
        record
            .raw
            .insert("tech".to_string(), serde_json::json!(["nginx"]));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["url"], "https://a.example.com");
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["tech"][0], "nginx");
    }

    #[test]
    fn test_categorized_hosts_serialize_with_snake_case_keys() {
        let mut hosts = CategorizedHosts::new();
        hosts.push(
            Category::NoResponse,
            CategorizedHost::from(&HostRecord::new("http://x.example.com", 0, "No Title")),
        );
        let value = serde_json::to_value(&hosts).unwrap();
        assert_eq!(value["no_response"][0]["clean_url"], "x.example.com");
        assert!(value["fully_operational"].as_array().unwrap().is_empty());
    }
}
