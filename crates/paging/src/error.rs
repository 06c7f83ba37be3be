//! Error types for the paging helpers.
//!
//! Errors are split by the component that raises them so that callers can
//! tell user input problems (query and search errors) apart from integration
//! problems (page errors). Every message is stable and safe to hand back to a
//! client verbatim.

use thiserror::Error;

/// The umbrella error type for all paging operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// Pagination / ordering parameter errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Search parameter errors
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Page envelope errors
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Malformed pagination or ordering input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// `page` is not an integer greater than zero.
    #[error("page is invalid")]
    InvalidPage,

    /// `limit` was given without a `page`.
    #[error("page is missing")]
    MissingPage,

    /// `limit` is not an integer greater than zero.
    #[error("limit is invalid")]
    InvalidLimit,

    /// `order` was given without an `order_by`.
    #[error("order by is missing")]
    MissingOrderBy,

    /// `order` is neither `asc` nor `desc`.
    #[error("order is invalid")]
    InvalidOrder,
}

/// Search parameter translation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The operator part of a `field__operator` parameter is not recognized.
    #[error("unknown search operation '{0}'")]
    UnknownOperation(String),

    /// Two or more conditions were given without a combinator.
    #[error("search operator is missing")]
    MissingOperator,

    /// A combinator was given with fewer than two conditions.
    #[error("cannot find search conditions")]
    MissingConditions,
}

/// Page envelope construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The request query failed validation.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// No result collection was handed to the page builder.
    #[error("the provided collection is missing")]
    MissingCollection,
}

impl PageError {
    /// Returns true if the error was caused by client input rather than by
    /// the calling code.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PageError::Query(_))
    }
}
