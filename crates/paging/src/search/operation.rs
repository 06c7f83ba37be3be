//! The fixed set of search operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A search operation, the part after `__` in a `field__operation` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOperation {
    /// `field = value`
    Equals,
    /// `field != value`
    NotEquals,
    /// `field > value`
    GreaterThan,
    /// `field < value`
    LessThan,
    /// `field >= value`
    #[serde(rename = "gthanorequals")]
    GreaterThanOrEquals,
    /// `field <= value`
    #[serde(rename = "lthanorequals")]
    LessThanOrEquals,
    /// `field LIKE 'value%'`
    StartsWith,
    /// `field LIKE '%value'`
    EndsWith,
    /// `field LIKE '%value%'`
    Contains,
    /// `field > value`, for dates and times.
    After,
    /// `field < value`, for dates and times.
    Before,
    /// `YEAR(field) = value`
    Year,
    /// `MONTH(field) = value`
    Month,
    /// `DAY(field) = value`
    Day,
}

impl SearchOperation {
    /// Every supported operation.
    pub const ALL: [SearchOperation; 14] = [
        SearchOperation::Equals,
        SearchOperation::NotEquals,
        SearchOperation::GreaterThan,
        SearchOperation::LessThan,
        SearchOperation::GreaterThanOrEquals,
        SearchOperation::LessThanOrEquals,
        SearchOperation::StartsWith,
        SearchOperation::EndsWith,
        SearchOperation::Contains,
        SearchOperation::After,
        SearchOperation::Before,
        SearchOperation::Year,
        SearchOperation::Month,
        SearchOperation::Day,
    ];

    /// Parses an operation name, returning None for unknown operations.
    ///
    /// Names are matched exactly; `Equals` is not `equals`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "equals" => Some(SearchOperation::Equals),
            "notequals" => Some(SearchOperation::NotEquals),
            "greaterthan" => Some(SearchOperation::GreaterThan),
            "lessthan" => Some(SearchOperation::LessThan),
            "gthanorequals" => Some(SearchOperation::GreaterThanOrEquals),
            "lthanorequals" => Some(SearchOperation::LessThanOrEquals),
            "startswith" => Some(SearchOperation::StartsWith),
            "endswith" => Some(SearchOperation::EndsWith),
            "contains" => Some(SearchOperation::Contains),
            "after" => Some(SearchOperation::After),
            "before" => Some(SearchOperation::Before),
            "year" => Some(SearchOperation::Year),
            "month" => Some(SearchOperation::Month),
            "day" => Some(SearchOperation::Day),
            _ => None,
        }
    }

    /// Returns the operation name as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperation::Equals => "equals",
            SearchOperation::NotEquals => "notequals",
            SearchOperation::GreaterThan => "greaterthan",
            SearchOperation::LessThan => "lessthan",
            SearchOperation::GreaterThanOrEquals => "gthanorequals",
            SearchOperation::LessThanOrEquals => "lthanorequals",
            SearchOperation::StartsWith => "startswith",
            SearchOperation::EndsWith => "endswith",
            SearchOperation::Contains => "contains",
            SearchOperation::After => "after",
            SearchOperation::Before => "before",
            SearchOperation::Year => "year",
            SearchOperation::Month => "month",
            SearchOperation::Day => "day",
        }
    }

    /// Builds the parenthesized SQL condition for `field`, with one `?`
    /// placeholder.
    pub fn condition(&self, field: &str) -> String {
        self.condition_with_placeholder(field, "?")
    }

    /// Builds the parenthesized SQL condition for `field` using the given
    /// placeholder text, e.g. `$3` or `?3`.
    pub fn condition_with_placeholder(&self, field: &str, placeholder: &str) -> String {
        let p = placeholder;
        match self {
            SearchOperation::Equals => format!("({field} = {p})"),
            SearchOperation::NotEquals => format!("({field} != {p})"),
            SearchOperation::GreaterThan | SearchOperation::After => format!("({field} > {p})"),
            SearchOperation::LessThan | SearchOperation::Before => format!("({field} < {p})"),
            SearchOperation::GreaterThanOrEquals => format!("({field} >= {p})"),
            SearchOperation::LessThanOrEquals => format!("({field} <= {p})"),
            SearchOperation::StartsWith | SearchOperation::EndsWith | SearchOperation::Contains => {
                format!("({field} LIKE {p})")
            }
            SearchOperation::Year => format!("(YEAR({field}) = {p})"),
            SearchOperation::Month => format!("(MONTH({field}) = {p})"),
            SearchOperation::Day => format!("(DAY({field}) = {p})"),
        }
    }

    /// Builds the value bound to the condition's placeholder.
    ///
    /// The `LIKE` operations add `%` wildcards; the value itself is not
    /// escaped, so `%` and `_` in it keep their pattern meaning.
    pub fn parameter(&self, value: &str) -> String {
        match self {
            SearchOperation::StartsWith => format!("{value}%"),
            SearchOperation::EndsWith => format!("%{value}"),
            SearchOperation::Contains => format!("%{value}%"),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for SearchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for op in SearchOperation::ALL {
            assert_eq!(SearchOperation::parse(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(SearchOperation::parse("unknownoperation"), None);
        assert_eq!(SearchOperation::parse(""), None);
        assert_eq!(SearchOperation::parse("Equals"), None);
        assert_eq!(SearchOperation::parse("like"), None);
    }

    #[test]
    fn test_date_aliases_share_comparisons() {
        assert_eq!(
            SearchOperation::After.condition("created_at"),
            SearchOperation::GreaterThan.condition("created_at")
        );
        assert_eq!(
            SearchOperation::Before.condition("created_at"),
            SearchOperation::LessThan.condition("created_at")
        );
    }

    #[test]
    fn test_condition_with_placeholder() {
        assert_eq!(
            SearchOperation::Year.condition_with_placeholder("created_at", "$2"),
            "(YEAR(created_at) = $2)"
        );
        assert_eq!(SearchOperation::Equals.condition("id"), "(id = ?)");
    }

    #[test]
    fn test_like_wildcards() {
        assert_eq!(SearchOperation::StartsWith.parameter("am"), "am%");
        assert_eq!(SearchOperation::EndsWith.parameter("am"), "%am");
        assert_eq!(SearchOperation::Contains.parameter("mm"), "%mm%");
        assert_eq!(SearchOperation::Equals.parameter("mm"), "mm");
    }

    #[test]
    fn test_serde_uses_parameter_names() {
        let json = serde_json::to_string(&SearchOperation::GreaterThanOrEquals).unwrap();
        assert_eq!(json, "\"gthanorequals\"");
        let op: SearchOperation = serde_json::from_str("\"notequals\"").unwrap();
        assert_eq!(op, SearchOperation::NotEquals);
    }
}
