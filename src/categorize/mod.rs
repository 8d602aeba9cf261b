//! Host categorization.
//!
//! A single pass over the probe records that:
//! - assigns every record to exactly one [`Category`] by status code
//! - accumulates the [`Stats`] counters
//! - flags records matching the [`InterestingFinds`] keyword heuristics
//!
//! The category partition is exclusive; the interesting groups are not.

mod interesting;
mod rules;

use log::debug;

use crate::models::{CategorizedHost, CategorizedHosts, HostRecord, InterestingFinds, Stats};

// Re-export public API
pub use interesting::{matching_groups, ADMIN_KEYWORDS, API_KEYWORDS, DEV_PORTS};
pub use rules::category_for_status;

/// Output of [`categorize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categorization {
    pub categorized: CategorizedHosts,
    pub stats: Stats,
    pub interesting: InterestingFinds,
}

/// Categorizes probe records.
///
/// Never fails; an empty slice yields empty buckets and all-zero counters.
/// The probing tool only reports hosts that resolved, so the discovered,
/// resolved and online counters all equal the number of records.
pub fn categorize(records: &[HostRecord]) -> Categorization {
    let total = records.len();
    let mut result = Categorization {
        stats: Stats {
            total_discovered: total,
            dns_resolved: total,
            online_hosts: total,
            ..Stats::default()
        },
        ..Categorization::default()
    };

    for record in records {
        let category = category_for_status(record.status_code);
        rules::record_category(&mut result.stats, category);
        result
            .categorized
            .push(category, CategorizedHost::from(record));
        interesting::flag_interesting(record, &mut result.interesting);
    }

    debug!(
        "Categorized {} records ({} web services, {} without response)",
        total, result.stats.web_services, result.stats.no_response
    );
    result
}
