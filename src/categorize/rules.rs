//! Status code to category rules.

use crate::config::NO_RESPONSE_STATUS;
use crate::models::{Category, Stats};

/// Redirect statuses that count as [`Category::Redirects`].
const REDIRECT_STATUSES: [i64; 4] = [301, 302, 307, 308];

/// Maps an HTTP status to its category. First matching rule wins:
///
/// | status | category |
/// |---|---|
/// | 200 | `FullyOperational` |
/// | 301, 302, 307, 308 | `Redirects` |
/// | 401, 403 | `Blocked` |
/// | other 4xx, any >= 500 | `Errors` |
/// | 0 | `NoResponse` |
/// | anything else (1xx, 2xx other than 200, other 3xx, negative) | `FullyOperational` |
///
/// The URL scheme plays no part, so `HttpsOnly` and `HttpOnly` are never returned.
pub fn category_for_status(status: i64) -> Category {
    match status {
        200 => Category::FullyOperational,
        s if REDIRECT_STATUSES.contains(&s) => Category::Redirects,
        401 | 403 => Category::Blocked,
        400..=499 => Category::Errors,
        500..=i64::MAX => Category::Errors,
        NO_RESPONSE_STATUS => Category::NoResponse,
        _ => Category::FullyOperational,
    }
}

/// Bumps the counters belonging to one host of `category`.
///
/// `web_services` counts every host that answered at the HTTP layer, i.e.
/// everything except `NoResponse`.
pub(crate) fn record_category(stats: &mut Stats, category: Category) {
    if category != Category::NoResponse {
        stats.web_services += 1;
    }
    match category {
        Category::FullyOperational => stats.fully_operational += 1,
        Category::HttpsOnly => stats.https_only += 1,
        Category::HttpOnly => stats.http_only += 1,
        Category::Redirects => stats.redirects += 1,
        Category::Errors => stats.errors += 1,
        Category::Blocked => stats.blocked += 1,
        Category::NoResponse => stats.no_response += 1,
    }
}
