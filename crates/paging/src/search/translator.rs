//! Translation of query parameters into a search predicate.

use tracing::debug;

use super::operation::SearchOperation;
use super::predicate::{Condition, SearchComponent, SearchPredicate};
use crate::error::SearchError;
use crate::values::QueryValues;

/// Parameter holding the keyword that joins multiple conditions.
pub const SEARCH_OPERATOR_PARAM: &str = "searchOperator";

/// Separator between field and operation in a search parameter name.
pub const CONDITION_SEPARATOR: &str = "__";

/// Splits a parameter name into `(field, operation)`.
///
/// Only the first separator counts: `a__b__c` is field `a` with operation
/// `b__c`. Returns None unless both parts are non-empty.
pub fn split_condition_name(name: &str) -> Option<(&str, &str)> {
    let (field, operation) = name.split_once(CONDITION_SEPARATOR)?;
    if field.is_empty() || operation.is_empty() {
        return None;
    }
    Some((field, operation))
}

/// Maps a single field, operation and value to SQL.
///
/// Returns None for an unknown operation.
///
/// # Example
///
/// ```
/// use helios_paging::search::search_components;
///
/// let component = search_components("name", "startswith", "am").unwrap();
/// assert_eq!(component.condition, "(name LIKE ?)");
/// assert_eq!(component.parameter, "am%");
///
/// assert!(search_components("name", "like", "am").is_none());
/// ```
pub fn search_components(field: &str, operation: &str, value: &str) -> Option<SearchComponent> {
    SearchOperation::parse(operation).map(|op| Condition::new(field, op, value).to_component())
}

/// Translates a query with the default combinator parameter.
///
/// See [`SearchTranslator::translate`].
pub fn translate(query: &QueryValues) -> Result<Option<SearchPredicate>, SearchError> {
    SearchTranslator::default().translate(query)
}

/// Turns `field__operation=value` query parameters into a [`SearchPredicate`].
///
/// Conditions are collected in ascending parameter-name order, so the same
/// query always yields the same SQL and parameter order. When a parameter is
/// repeated, only its first value is used.
///
/// # Example
///
/// ```
/// use helios_paging::{QueryValues, SearchTranslator};
///
/// let query = QueryValues::parse("name__equals=ammar&age__greaterthan=18&searchOperator=AND");
/// let predicate = SearchTranslator::new().translate(&query).unwrap().unwrap();
///
/// assert_eq!(predicate.sql(), "((age > ?) AND (name = ?))");
/// assert_eq!(predicate.parameters(), vec!["18", "ammar"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTranslator {
    operator_param: String,
}

impl Default for SearchTranslator {
    fn default() -> Self {
        Self {
            operator_param: SEARCH_OPERATOR_PARAM.to_string(),
        }
    }
}

impl SearchTranslator {
    /// Creates a translator reading the combinator from `searchOperator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parameter the combinator is read from.
    pub fn with_operator_param(mut self, name: impl Into<String>) -> Self {
        self.operator_param = name.into();
        self
    }

    /// Collects the search conditions of a query.
    ///
    /// Parameters that are not of the form `field__operation`, or that have
    /// no value, are skipped. The first unknown operation fails the whole
    /// collection.
    ///
    /// An empty value is a valid condition: `name__equals=` binds `""`
    /// rather than being rejected as an unknown operation.
    pub fn conditions(&self, query: &QueryValues) -> Result<Vec<Condition>, SearchError> {
        let mut conditions = Vec::new();

        for (name, values) in query.iter() {
            if name == self.operator_param {
                continue;
            }
            let Some((field, operation)) = split_condition_name(name) else {
                continue;
            };
            let Some(value) = values.first() else {
                continue;
            };

            let operation = SearchOperation::parse(operation)
                .ok_or_else(|| SearchError::UnknownOperation(operation.to_string()))?;
            conditions.push(Condition::new(field, operation, value.as_str()));
        }

        Ok(conditions)
    }

    /// Translates a query into a predicate.
    ///
    /// - No conditions and no combinator: `Ok(None)`, apply no filter.
    /// - Two or more conditions without a combinator:
    ///   [`SearchError::MissingOperator`].
    /// - A combinator with fewer than two conditions:
    ///   [`SearchError::MissingConditions`].
    /// - Otherwise the conditions joined by the combinator.
    ///
    /// The combinator is written into the SQL verbatim.
    pub fn translate(&self, query: &QueryValues) -> Result<Option<SearchPredicate>, SearchError> {
        let conditions = self.conditions(query).inspect_err(|err| {
            debug!(error = %err, "Rejected search parameters");
        })?;
        let combinator = query.get_non_empty(&self.operator_param);

        if conditions.is_empty() && combinator.is_none() {
            return Ok(None);
        }

        let count = conditions.len();
        let predicate = SearchPredicate::new(conditions, combinator.map(str::to_string))
            .inspect_err(|err| {
                debug!(conditions = count, error = %err, "Rejected search combination");
            })?;
        debug!(
            conditions = predicate.len(),
            combinator = ?predicate.combinator(),
            "Translated search parameters"
        );

        Ok(Some(predicate))
    }
}
