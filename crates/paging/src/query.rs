//! Pagination and ordering query parameters.
//!
//! Provides [`validate_query`] for checking `page`, `limit`, `order_by` and
//! `order` for consistency, and [`PaginationQuery`], a typed view over the
//! validated values with the defaults a datastore query needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QueryError;
use crate::values::QueryValues;

/// Page number parameter.
pub const PAGE_PARAM: &str = "page";
/// Page size parameter.
pub const LIMIT_PARAM: &str = "limit";
/// Ordering field parameter.
pub const ORDER_BY_PARAM: &str = "order_by";
/// Ordering direction parameter.
pub const ORDER_PARAM: &str = "order";

/// Limit applied when the request does not give one.
pub const DEFAULT_LIMIT: i64 = 30;
/// Field ordered by when the request does not give one.
pub const DEFAULT_ORDER_BY: &str = "created_at";

/// Validates the pagination and ordering parameters of a query.
///
/// Rules are checked in this order and the first failure is returned:
///
/// 1. `page`, if given, must be an integer of at least 1.
/// 2. `limit` requires `page`.
/// 3. `limit`, if given, must be an integer of at least 1.
/// 4. `order` requires `order_by`.
/// 5. `order`, if given, must be `asc` or `desc`.
///
/// Empty values count as not given.
pub fn validate_query(query: &QueryValues) -> Result<(), QueryError> {
    let page = query.get_non_empty(PAGE_PARAM);
    let limit = query.get_non_empty(LIMIT_PARAM);
    let order_by = query.get_non_empty(ORDER_BY_PARAM);
    let order = query.get_non_empty(ORDER_PARAM);

    if page.is_some_and(|page| parse_positive(page).is_none()) {
        return Err(QueryError::InvalidPage);
    }

    if limit.is_some() && page.is_none() {
        return Err(QueryError::MissingPage);
    }

    if limit.is_some_and(|limit| parse_positive(limit).is_none()) {
        return Err(QueryError::InvalidLimit);
    }

    if order.is_some() && order_by.is_none() {
        return Err(QueryError::MissingOrderBy);
    }

    if order.is_some_and(|order| order != "asc" && order != "desc") {
        return Err(QueryError::InvalidOrder);
    }

    Ok(())
}

fn parse_positive(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|n| *n > 0)
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword in lowercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defaults applied to unset pagination values.
///
/// A limit below 1 or an empty field is not usable; [`PaginationQuery`]
/// then falls back to [`DEFAULT_LIMIT`] and [`DEFAULT_ORDER_BY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Limit used when none was requested.
    pub limit: i64,
    /// Field used when no `order_by` was requested.
    pub order_by: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            order_by: DEFAULT_ORDER_BY.to_string(),
        }
    }
}

/// Validated pagination and ordering parameters.
///
/// A page or limit of 0 means the value was not given.
///
/// # Example
///
/// ```
/// use helios_paging::{PaginationQuery, QueryValues};
///
/// let query = PaginationQuery::from_query(&QueryValues::parse("page=3&limit=5")).unwrap();
/// assert_eq!(query.limit(), 5);
/// assert_eq!(query.offset(), 10);
/// assert_eq!(query.order(), "created_at asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationQuery {
    page: i64,
    limit: i64,
    order_by: String,
    order: String,
    defaults: QueryDefaults,
}

impl PaginationQuery {
    /// Creates a query from already known values.
    pub fn new(page: i64, limit: i64, order_by: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            order_by: order_by.into(),
            order: order.into(),
            defaults: QueryDefaults::default(),
        }
    }

    /// Validates and parses the pagination parameters of a query.
    pub fn from_query(query: &QueryValues) -> Result<Self, QueryError> {
        if let Err(err) = validate_query(query) {
            debug!(error = %err, "Rejected pagination query");
            return Err(err);
        }

        // Validated above, so anything unparseable here was empty.
        let page = query
            .get(PAGE_PARAM)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let limit = query
            .get(LIMIT_PARAM)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(Self::new(
            page,
            limit,
            query.get(ORDER_BY_PARAM).unwrap_or_default(),
            query.get(ORDER_PARAM).unwrap_or_default(),
        ))
    }

    /// Replaces the defaults used for unset values.
    pub fn with_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the requested page number (0 if not given).
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Returns the requested limit as given (0 if not given).
    pub fn requested_limit(&self) -> i64 {
        self.limit
    }

    /// Returns the requested order-by field as given.
    pub fn requested_order_by(&self) -> &str {
        &self.order_by
    }

    /// Returns the requested order direction as given.
    pub fn requested_order(&self) -> &str {
        &self.order
    }

    /// Returns the limit to query with, always at least 1.
    ///
    /// Falls back to the configured default when the request asked for less
    /// than one record, and to [`DEFAULT_LIMIT`] when that default is itself
    /// below 1.
    pub fn limit(&self) -> i64 {
        if self.limit >= 1 {
            self.limit
        } else if self.defaults.limit >= 1 {
            self.defaults.limit
        } else {
            DEFAULT_LIMIT
        }
    }

    /// Returns the number of rows to skip.
    ///
    /// Pages below 2 (including missing, zero or negative pages) start at 0.
    pub fn offset(&self) -> i64 {
        if self.page < 2 {
            0
        } else {
            (self.page - 1).saturating_mul(self.limit())
        }
    }

    /// Returns the field to order by.
    ///
    /// An empty configured default falls back to [`DEFAULT_ORDER_BY`].
    pub fn order_by(&self) -> &str {
        if !self.order_by.is_empty() {
            &self.order_by
        } else if !self.defaults.order_by.is_empty() {
            &self.defaults.order_by
        } else {
            DEFAULT_ORDER_BY
        }
    }

    /// Returns the order direction. Only an explicit `desc` is descending.
    pub fn direction(&self) -> SortDirection {
        if self.order == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// Returns an `ORDER BY` clause body, e.g. `created_at asc`.
    pub fn order(&self) -> String {
        format!("{} {}", self.order_by(), self.direction())
    }
}
