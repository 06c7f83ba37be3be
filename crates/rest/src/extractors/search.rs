//! Search extractor.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use helios_paging::SearchPredicate;

use super::query_values;
use crate::config::PagingConfig;
use crate::error::RestError;

/// Axum extractor for the search predicate of a list request.
///
/// Holds `None` when the request has no search parameters. Malformed search
/// parameters reject the request with a 400.
///
/// # Example
///
/// ```rust,ignore
/// use helios_paging_rest::extractors::Search;
///
/// async fn list_handler(Search(predicate): Search) {
///     let (filter, params) = match predicate {
///         Some(p) => (format!(" WHERE {}", p.sql()), p.parameters()),
///         None => (String::new(), Vec::new()),
///     };
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Search(pub Option<SearchPredicate>);

impl Search {
    /// Returns the predicate, if any.
    pub fn predicate(&self) -> Option<&SearchPredicate> {
        self.0.as_ref()
    }

    /// Returns the inner predicate.
    pub fn into_inner(self) -> Option<SearchPredicate> {
        self.0
    }
}

impl<S> FromRequestParts<S> for Search
where
    PagingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = PagingConfig::from_ref(state);
        let query = query_values(parts);

        let predicate = config.translator().translate(&query)?;
        Ok(Search(predicate))
    }
}
