//! Search conditions and the combined predicate.

use serde::Serialize;

use super::operation::SearchOperation;
use crate::error::SearchError;

/// A recognized `field__operation=value` search parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// The field (column) being searched.
    pub field: String,
    /// The operation applied to the field.
    pub operation: SearchOperation,
    /// The raw value from the query string.
    pub value: String,
}

impl Condition {
    /// Creates a new condition.
    pub fn new(field: impl Into<String>, operation: SearchOperation, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operation,
            value: value.into(),
        }
    }

    /// Returns the SQL condition and its bound parameter.
    pub fn to_component(&self) -> SearchComponent {
        SearchComponent {
            condition: self.operation.condition(&self.field),
            parameter: self.operation.parameter(&self.value),
        }
    }
}

/// A single SQL condition with the value bound to its placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchComponent {
    /// The parenthesized condition, e.g. `(name LIKE ?)`.
    pub condition: String,
    /// The value bound to the condition's placeholder, e.g. `am%`.
    pub parameter: String,
}

/// How placeholders are written in rendered SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// Anonymous `?` placeholders (MySQL, SQLite).
    #[default]
    Positional,
    /// Numbered `?N` placeholders (SQLite), starting at `offset + 1`.
    Numbered {
        /// Number of parameters already used by the enclosing statement.
        offset: usize,
    },
    /// Numbered `$N` placeholders (PostgreSQL), starting at `offset + 1`.
    Dollar {
        /// Number of parameters already used by the enclosing statement.
        offset: usize,
    },
}

impl PlaceholderStyle {
    /// Returns the placeholder for the parameter at `index` (0-based).
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            PlaceholderStyle::Positional => "?".to_string(),
            PlaceholderStyle::Numbered { offset } => format!("?{}", offset + index + 1),
            PlaceholderStyle::Dollar { offset } => format!("${}", offset + index + 1),
        }
    }
}

/// A parameterized boolean expression built from search conditions.
///
/// Condition *i* binds to parameter *i*. The SQL always has one outer pair
/// of parentheses, with the combinator between conditions:
/// `((age > ?) AND (name = ?))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPredicate {
    conditions: Vec<Condition>,
    combinator: Option<String>,
}

impl SearchPredicate {
    /// Creates a predicate from conditions and an optional combinator.
    ///
    /// An empty combinator counts as absent. The arity rules match
    /// [`SearchTranslator::translate`](super::SearchTranslator::translate):
    ///
    /// - two or more conditions need a combinator:
    ///   [`SearchError::MissingOperator`];
    /// - a combinator needs two or more conditions, and there must be at
    ///   least one condition: [`SearchError::MissingConditions`].
    pub fn new(conditions: Vec<Condition>, combinator: Option<String>) -> Result<Self, SearchError> {
        let combinator = combinator.filter(|c| !c.is_empty());

        if conditions.len() > 1 && combinator.is_none() {
            return Err(SearchError::MissingOperator);
        }
        if conditions.is_empty() || (combinator.is_some() && conditions.len() < 2) {
            return Err(SearchError::MissingConditions);
        }

        Ok(Self {
            conditions,
            combinator,
        })
    }

    /// Returns the conditions in binding order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns the combining keyword, if one was given.
    pub fn combinator(&self) -> Option<&str> {
        self.combinator.as_deref()
    }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns true if there are no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns the SQL expression with `?` placeholders.
    pub fn sql(&self) -> String {
        self.to_sql_with(PlaceholderStyle::Positional)
    }

    /// Returns the SQL expression with the given placeholder style.
    pub fn to_sql_with(&self, style: PlaceholderStyle) -> String {
        let separator = format!(" {} ", self.combinator.as_deref().unwrap_or_default());
        let conditions: Vec<String> = self
            .conditions
            .iter()
            .enumerate()
            .map(|(i, c)| {
                c.operation
                    .condition_with_placeholder(&c.field, &style.placeholder(i))
            })
            .collect();
        format!("({})", conditions.join(&separator))
    }

    /// Returns the bound parameter values in placeholder order.
    pub fn parameters(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|c| c.operation.parameter(&c.value))
            .collect()
    }

    /// Returns the SQL condition and bound value of every condition.
    pub fn components(&self) -> Vec<SearchComponent> {
        self.conditions.iter().map(Condition::to_component).collect()
    }

    /// Consumes the predicate, returning `(sql, parameters)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql(), self.parameters())
    }
}
