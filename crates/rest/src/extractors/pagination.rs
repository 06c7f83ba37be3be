//! Pagination extractor.

use std::ops::Deref;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use helios_paging::PaginationQuery;

use super::query_values;
use crate::config::PagingConfig;
use crate::error::RestError;

/// Axum extractor for pagination and ordering parameters.
///
/// Validates `page`, `limit`, `order_by` and `order`, rejecting the request
/// with a 400 when they are inconsistent. Unset values fall back to the
/// configured defaults.
///
/// # Example
///
/// ```rust,ignore
/// use helios_paging_rest::extractors::Pagination;
///
/// async fn list_handler(Pagination(paging): Pagination) {
///     let sql = format!(
///         "SELECT * FROM users ORDER BY {} LIMIT {} OFFSET {}",
///         paging.order(),
///         paging.limit(),
///         paging.offset()
///     );
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination(pub PaginationQuery);

impl Pagination {
    /// Returns the inner query.
    pub fn into_inner(self) -> PaginationQuery {
        self.0
    }
}

impl Deref for Pagination {
    type Target = PaginationQuery;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    PagingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = PagingConfig::from_ref(state);
        let query = query_values(parts);

        let paging = PaginationQuery::from_query(&query)?.with_defaults(config.query_defaults());
        Ok(Pagination(paging))
    }
}
