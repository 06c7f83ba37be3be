//! # helios-paging-rest - Axum integration for helios-paging
//!
//! Extractors, error responses, configuration and logging for REST list
//! endpoints built on [`helios_paging`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{Json, Router, routing::get};
//! use helios_paging::Page;
//! use helios_paging_rest::{PagingConfig, RestResult, create_app, init_logging};
//! use helios_paging_rest::extractors::{Pagination, RequestUrl, Search};
//!
//! async fn list_users(
//!     Pagination(paging): Pagination,
//!     Search(predicate): Search,
//!     RequestUrl(url): RequestUrl,
//! ) -> RestResult<Json<Page<User>>> {
//!     let users = load_users(&paging, predicate.as_ref()).await?;
//!     Ok(Json(Page::new(&url, users)?))
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PagingConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let app = create_app(Router::new().route("/users", get(list_users)), config)?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Rejected requests get a JSON error body:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Invalid pagination, ordering or search parameters |
//! | 500 | exception | No result collection to page |
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;

pub use config::{ConfigError, PagingConfig};
pub use error::{RestError, RestResult};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Attaches the configuration as router state and adds request tracing.
///
/// Routes use [`PagingConfig`] as their state, so the extractors can read it.
/// Apps with a larger state should implement
/// [`FromRef`](axum::extract::FromRef) for it instead.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configuration fails
/// [`PagingConfig::validate`].
pub fn create_app(router: Router<PagingConfig>, config: PagingConfig) -> Result<Router, ConfigError> {
    config.validate().map_err(|errors| {
        tracing::error!(?errors, "Refusing invalid paging configuration");
        ConfigError(errors)
    })?;

    info!(
        default_limit = config.default_limit,
        default_order_by = %config.default_order_by,
        search_operator_param = %config.search_operator_param,
        "Creating paged list routes"
    );

    Ok(router
        .with_state(config)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "helios_paging={level},helios_paging_rest={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
