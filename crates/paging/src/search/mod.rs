//! Search parameter translation.
//!
//! Query parameters of the form `field__operation=value` become SQL
//! conditions with bound parameters. When several are present, the
//! `searchOperator` parameter supplies the keyword that joins them:
//!
//! ```text
//! ?name__startswith=am&age__gthanorequals=18&searchOperator=AND
//!   -> ((age >= ?) AND (name LIKE ?))   ["18", "am%"]
//! ```
//!
//! Field names and the combinator are written into the SQL as given. Callers
//! must check them against a whitelist of columns and keywords before
//! executing the statement.

mod operation;
mod predicate;
mod translator;

pub use operation::SearchOperation;
pub use predicate::{Condition, PlaceholderStyle, SearchComponent, SearchPredicate};
pub use translator::{
    CONDITION_SEPARATOR, SEARCH_OPERATOR_PARAM, SearchTranslator, search_components,
    split_condition_name, translate,
};
