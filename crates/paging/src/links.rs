//! Pagination links.
//!
//! Derives `self`, `next` and `previous` links for a list response from the
//! request URL and the number of results the current page returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::{LIMIT_PARAM, PAGE_PARAM};
use crate::values::{QueryValues, UrlParts, split_url};

/// Hyperlinks for a page of results.
///
/// `next` and `previous` keep every other query parameter of the request.
/// Their query string is re-encoded sorted by parameter name, so
/// `?page=2&limit=3` becomes `?limit=3&page=3` in the next link.
///
/// # Example
///
/// ```
/// use helios_paging::Links;
///
/// let links = Links::new("/v1/users?page=2&limit=3", 3);
/// assert_eq!(links.self_url, "/v1/users?page=2&limit=3");
/// assert_eq!(links.next.as_deref(), Some("/v1/users?limit=3&page=3"));
/// assert_eq!(links.previous.as_deref(), Some("/v1/users?limit=3&page=1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Links {
    /// The following page, when the current page came back full.
    pub next: Option<String>,
    /// The preceding page, when the current page is past the first.
    pub previous: Option<String>,
    /// The request URL, unchanged.
    #[serde(rename = "self")]
    pub self_url: String,
}

impl Links {
    /// Builds links for a request URL and the number of results returned.
    ///
    /// Links are only produced when `page` is an integer. A next link
    /// additionally needs an integer `limit` and `count >= limit`: a full
    /// page means there may be more. A previous link needs `page > 1`.
    pub fn new(url: &str, count: usize) -> Self {
        let mut links = Self {
            next: None,
            previous: None,
            self_url: url.to_string(),
        };

        let parts = split_url(url);
        let mut query = parts.query.map(QueryValues::parse).unwrap_or_default();

        let Some(page) = query.get(PAGE_PARAM).and_then(|v| v.parse::<i64>().ok()) else {
            return links;
        };

        let limit = query.get(LIMIT_PARAM).and_then(|v| v.parse::<i64>().ok());
        if limit.is_some_and(|limit| i64::try_from(count).unwrap_or(i64::MAX) >= limit) {
            query.set(PAGE_PARAM, page.saturating_add(1).to_string());
            links.next = Some(rebuild_url(&parts, &query));
        }

        if page > 1 {
            query.set(PAGE_PARAM, (page - 1).to_string());
            links.previous = Some(rebuild_url(&parts, &query));
        }

        debug!(
            page,
            count,
            has_next = links.next.is_some(),
            has_previous = links.previous.is_some(),
            "Built pagination links"
        );

        links
    }

    /// Returns true if there is a following page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if there is a preceding page.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

fn rebuild_url(parts: &UrlParts<'_>, query: &QueryValues) -> String {
    let mut url = format!("{}?{}", parts.base, query.encode());
    if let Some(fragment) = parts.fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
