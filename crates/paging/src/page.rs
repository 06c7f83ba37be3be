//! List response envelope.

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::links::Links;
use crate::query::validate_query;
use crate::values::QueryValues;

/// A page of results with its pagination links.
///
/// Serializes as `{"_links": {...}, "count": n, "results": [...]}`. The
/// results are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Links to this, the next and the previous page.
    #[serde(rename = "_links")]
    pub links: Links,
    /// Number of results on this page.
    pub count: usize,
    /// The results themselves.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Creates a page for the given request URL and results.
    ///
    /// The URL's query is validated first, so an invalid pagination request
    /// never produces links.
    pub fn new(url: &str, results: impl IntoIterator<Item = T>) -> Result<Self, PageError> {
        validate_query(&QueryValues::from_url(url))?;
        Ok(Self::build(url, results.into_iter().collect()))
    }

    /// Creates a page from results that may not have been produced.
    ///
    /// Returns [`PageError::MissingCollection`] when `results` is `None`. An
    /// empty collection is a valid, empty page.
    pub fn from_results<I>(url: &str, results: Option<I>) -> Result<Self, PageError>
    where
        I: IntoIterator<Item = T>,
    {
        validate_query(&QueryValues::from_url(url))?;
        let results = results.ok_or(PageError::MissingCollection)?;
        Ok(Self::build(url, results.into_iter().collect()))
    }

    fn build(url: &str, results: Vec<T>) -> Self {
        let count = results.len();
        Self {
            links: Links::new(url, count),
            count,
            results,
        }
    }

    /// Maps every result, keeping the links and count.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            links: self.links,
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }

    /// Returns true if the page has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
