//! Decoded query string values.
//!
//! [`QueryValues`] is the input every other component works from. It is a
//! multi-map from parameter name to the values given for it, decoded with
//! `application/x-www-form-urlencoded` rules.
//!
//! Names are kept in ascending order. This gives search condition discovery a
//! stable order and makes [`QueryValues::encode`] produce key-sorted output,
//! which the pagination links depend on.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Query string parameters, keyed by name.
///
/// # Example
///
/// ```
/// use helios_paging::QueryValues;
///
/// let query = QueryValues::parse("page=2&limit=3&tag=a&tag=b");
/// assert_eq!(query.get("page"), Some("2"));
/// assert_eq!(query.get_all("tag"), ["a", "b"]);
/// assert_eq!(query.encode(), "limit=3&page=2&tag=a&tag=b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Parses the query component of a request URL.
    ///
    /// Accepts absolute URLs, origin-form request targets (`/users?page=2`)
    /// and scheme-less URLs alike. A URL without a `?` yields no values.
    pub fn from_url(url: &str) -> Self {
        match split_url(url).query {
            Some(query) => Self::parse(query),
            None => Self::new(),
        }
    }

    /// Returns the first value given for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the first value for `name` if it is present and non-empty.
    ///
    /// A parameter given as `page=` is treated the same as one that is not
    /// given at all.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Returns every value given for `name`, in arrival order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks if a parameter name is present, whatever its values.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Appends a value for `name`, keeping any existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Replaces all values for `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), vec![value.into()]);
    }

    /// Returns an iterator over `(name, values)` in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns the number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Encodes the values as a query string, sorted by name.
    ///
    /// Values for the same name keep their arrival order. Spaces become `+`;
    /// `~` is percent-encoded and `*` is left as is.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.values {
            for value in values {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.append(name, value);
        }
        values
    }
}

impl From<&url::Url> for QueryValues {
    fn from(url: &url::Url) -> Self {
        url.query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }
}

/// A request URL split into the parts the link builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlParts<'a> {
    /// Everything before the `?` (or the fragment, if there is no query).
    pub base: &'a str,
    /// The raw query string, without the `?`.
    pub query: Option<&'a str>,
    /// The raw fragment, without the `#`.
    pub fragment: Option<&'a str>,
}

/// Splits a URL at its query and fragment delimiters.
pub(crate) fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    UrlParts {
        base,
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_values() {
        let query = QueryValues::parse("name=John+Smith&city=New%20York");
        assert_eq!(query.get("name"), Some("John Smith"));
        assert_eq!(query.get("city"), Some("New York"));
    }

    #[test]
    fn test_parse_strips_leading_question_mark() {
        let query = QueryValues::parse("?page=1");
        assert_eq!(query.get("page"), Some("1"));
    }

    #[test]
    fn test_multiple_values_keep_order() {
        let query = QueryValues::parse("age__greaterthan=18&age__greaterthan=21");
        assert_eq!(query.get("age__greaterthan"), Some("18"));
        assert_eq!(query.get_all("age__greaterthan"), ["18", "21"]);
    }

    #[test]
    fn test_get_non_empty() {
        let query = QueryValues::parse("page=&limit=2");
        assert!(query.contains("page"));
        assert_eq!(query.get("page"), Some(""));
        assert_eq!(query.get_non_empty("page"), None);
        assert_eq!(query.get_non_empty("limit"), Some("2"));
    }

    #[test]
    fn test_encode_sorts_by_name() {
        let query = QueryValues::parse("page=2&limit=3&order_by=name&order=asc");
        assert_eq!(query.encode(), "limit=3&order=asc&order_by=name&page=2");
    }

    #[test]
    fn test_encode_escapes_values() {
        let mut query = QueryValues::new();
        query.set("q", "a b&c");
        assert_eq!(query.encode(), "q=a+b%26c");
    }

    #[test]
    fn test_encode_tilde_and_asterisk() {
        let query = QueryValues::parse("name__contains=a~b*c");
        assert_eq!(query.get("name__contains"), Some("a~b*c"));
        assert_eq!(query.encode(), "name__contains=a%7Eb*c");
    }

    #[test]
    fn test_set_replaces_values() {
        let mut query = QueryValues::parse("page=1&page=7");
        query.set("page", "2");
        assert_eq!(query.get_all("page"), ["2"]);
    }

    #[test]
    fn test_from_url() {
        let query = QueryValues::from_url("api.demo.com/v1/users?page=3#top");
        assert_eq!(query.get("page"), Some("3"));
        assert_eq!(query.len(), 1);

        assert!(QueryValues::from_url("api.demo.com/v1/users").is_empty());
    }

    #[test]
    fn test_from_parsed_url() {
        let url = url::Url::parse("https://api.demo.com/v1/users?limit=5&page=2").unwrap();
        let query = QueryValues::from(&url);
        assert_eq!(query.get("limit"), Some("5"));
        assert_eq!(query.get("page"), Some("2"));
    }

    #[test]
    fn test_split_url() {
        let parts = split_url("/v1/users?page=2#results");
        assert_eq!(parts.base, "/v1/users");
        assert_eq!(parts.query, Some("page=2"));
        assert_eq!(parts.fragment, Some("results"));

        let parts = split_url("/v1/users");
        assert_eq!(parts.base, "/v1/users");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, None);
    }
}
