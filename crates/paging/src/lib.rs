//! Helios Paging
//!
//! Pagination, ordering and search support for REST list endpoints.
//!
//! # Features
//!
//! - **Links**: `self`, `next` and `previous` URLs derived from the request
//! - **Validation**: consistency checks for `page`, `limit`, `order_by` and `order`
//! - **Pagination Query**: limit, offset and `ORDER BY` text with defaults
//! - **Search**: `field__operation=value` parameters translated into a
//!   parameterized SQL predicate
//!
//! # Quick Start
//!
//! ```
//! use helios_paging::{Page, PaginationQuery, QueryValues, SearchTranslator};
//!
//! let url = "/v1/users?page=1&limit=2&name__startswith=J&age__gthanorequals=18&searchOperator=AND";
//! let query = QueryValues::from_url(url);
//!
//! let paging = PaginationQuery::from_query(&query).unwrap();
//! assert_eq!((paging.limit(), paging.offset()), (2, 0));
//!
//! let predicate = SearchTranslator::new().translate(&query).unwrap().unwrap();
//! assert_eq!(predicate.sql(), "((age >= ?) AND (name LIKE ?))");
//! assert_eq!(predicate.parameters(), vec!["18", "J%"]);
//!
//! let page = Page::new(url, vec!["Jill", "John"]).unwrap();
//! assert_eq!(page.count, 2);
//! assert!(page.links.next.unwrap().ends_with("page=2&searchOperator=AND"));
//! ```
//!
//! # Safety of generated SQL
//!
//! Values are always bound as parameters. Field names and the search
//! combinator are copied into the SQL text, so callers must whitelist them.

#![warn(missing_docs)]

pub mod error;
pub mod links;
pub mod page;
pub mod query;
pub mod search;
pub mod values;

pub use error::{PageError, PagingError, QueryError, SearchError};
pub use links::Links;
pub use page::Page;
pub use query::{PaginationQuery, QueryDefaults, SortDirection, validate_query};
pub use search::{
    Condition, PlaceholderStyle, SearchComponent, SearchOperation, SearchPredicate,
    SearchTranslator, search_components,
};
pub use values::QueryValues;
