//! Axum extractors for paginated list endpoints.
//!
//! - [`Pagination`] - Validated page, limit and ordering
//! - [`Search`] - Search predicate from `field__operation` parameters
//! - [`RequestUrl`] - The request target, for building page links
//!
//! [`Pagination`] and [`Search`] read [`PagingConfig`](crate::PagingConfig)
//! from the router state through [`FromRef`](axum::extract::FromRef).

mod pagination;
mod request_url;
mod search;

pub use pagination::Pagination;
pub use request_url::RequestUrl;
pub use search::Search;

use axum::http::request::Parts;
use helios_paging::QueryValues;

fn query_values(parts: &Parts) -> QueryValues {
    parts.uri.query().map(QueryValues::parse).unwrap_or_default()
}
