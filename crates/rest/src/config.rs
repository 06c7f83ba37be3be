//! Configuration for paginated list endpoints.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PAGING_DEFAULT_LIMIT` | 30 | Limit applied when a request gives none |
//! | `PAGING_DEFAULT_ORDER_BY` | created_at | Field ordered by when a request gives none |
//! | `PAGING_SEARCH_OPERATOR_PARAM` | searchOperator | Parameter holding the search combinator |
//! | `PAGING_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use helios_paging_rest::PagingConfig;
//!
//! // Create from environment
//! let config = PagingConfig::from_env();
//!
//! // Or create programmatically
//! let config = PagingConfig {
//!     default_limit: 50,
//!     ..Default::default()
//! };
//! assert_eq!(config.query_defaults().limit, 50);
//! ```

use clap::Parser;
use helios_paging::query::{DEFAULT_LIMIT, DEFAULT_ORDER_BY};
use helios_paging::search::SEARCH_OPERATOR_PARAM;
use helios_paging::{QueryDefaults, SearchTranslator};
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// A configuration that failed [`PagingConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid paging configuration: {}", .0.join("; "))]
pub struct ConfigError(pub Vec<String>);

/// Configuration for paginated list endpoints.
///
/// Used as (part of) the router state; the extractors read it through
/// [`axum::extract::FromRef`].
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "paging")]
#[command(about = "Pagination and search settings for list endpoints")]
pub struct PagingConfig {
    /// Limit applied when a request gives none.
    #[arg(long, env = "PAGING_DEFAULT_LIMIT", default_value = "30")]
    pub default_limit: i64,

    /// Field ordered by when a request gives none.
    #[arg(long, env = "PAGING_DEFAULT_ORDER_BY", default_value = "created_at")]
    pub default_order_by: String,

    /// Query parameter holding the keyword that joins search conditions.
    #[arg(
        long,
        env = "PAGING_SEARCH_OPERATOR_PARAM",
        default_value = "searchOperator"
    )]
    pub search_operator_param: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PAGING_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_order_by: DEFAULT_ORDER_BY.to_string(),
            search_operator_param: SEARCH_OPERATOR_PARAM.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PagingConfig {
    /// Creates a new PagingConfig from environment variables.
    ///
    /// Falls back to the defaults when the environment cannot be parsed.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the defaults for unset pagination values.
    pub fn query_defaults(&self) -> QueryDefaults {
        QueryDefaults {
            limit: self.default_limit,
            order_by: self.default_order_by.clone(),
        }
    }

    /// Returns a search translator reading the configured combinator parameter.
    pub fn translator(&self) -> SearchTranslator {
        SearchTranslator::new().with_operator_param(self.search_operator_param.clone())
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.default_limit < 1 {
            errors.push("Default limit must be at least 1".to_string());
        }

        if self.default_order_by.trim().is_empty() {
            errors.push("Default order by cannot be empty".to_string());
        }

        if self.search_operator_param.trim().is_empty() {
            errors.push("Search operator parameter cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!("Unknown log level: {}", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses a small default limit so default paging is easy to observe.
    pub fn for_testing() -> Self {
        Self {
            default_limit: 2,
            default_order_by: "id".to_string(),
            search_operator_param: SEARCH_OPERATOR_PARAM.to_string(),
            log_level: "debug".to_string(),
        }
    }
}
