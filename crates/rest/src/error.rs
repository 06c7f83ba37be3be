//! Error types for paginated list endpoints.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | QueryError (any) | 400 | invalid |
//! | SearchError (any) | 400 | invalid |
//! | PageError::MissingCollection | 500 | exception |
//! | BadRequest | 400 | invalid |
//! | InternalError | 500 | exception |
//!
//! Responses carry a JSON body:
//!
//! ```json
//! {"error": {"code": "invalid", "message": "page is missing"}}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use helios_paging::{PageError, PagingError, QueryError, SearchError};
use thiserror::Error;
use tracing::{debug, error};

/// The error type for list endpoint operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// A pagination, ordering or search error.
    #[error(transparent)]
    Paging(#[from] PagingError),

    /// Bad request for any other reason (HTTP 400).
    #[error("{message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("{message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Paging(PagingError::Page(err)) if !err.is_client_error() => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RestError::Paging(_) | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        if self.status_code().is_server_error() {
            "exception"
        } else {
            "invalid"
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error = %message, "List request failed");
        } else {
            debug!(error = %message, "Rejected list request");
        }

        let body = create_error_body(self.code(), &message);
        (status, Json(body)).into_response()
    }
}

fn create_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        RestError::Paging(err.into())
    }
}

impl From<SearchError> for RestError {
    fn from(err: SearchError) -> Self {
        RestError::Paging(err.into())
    }
}

impl From<PageError> for RestError {
    fn from(err: PageError) -> Self {
        RestError::Paging(err.into())
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_is_bad_request() {
        let err: RestError = QueryError::MissingPage.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "invalid");
        assert_eq!(err.to_string(), "page is missing");
    }

    #[test]
    fn test_search_error_is_bad_request() {
        let err: RestError = SearchError::UnknownOperation("like".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unknown search operation 'like'");
    }

    #[test]
    fn test_page_query_error_is_bad_request() {
        let err: RestError = PageError::Query(QueryError::InvalidOrder).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "order is invalid");
    }

    #[test]
    fn test_missing_collection_is_server_error() {
        let err: RestError = PageError::MissingCollection.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "exception");
        assert_eq!(err.to_string(), "the provided collection is missing");
    }

    #[test]
    fn test_create_error_body() {
        let body = create_error_body("invalid", "limit is invalid");
        assert_eq!(body["error"]["code"], "invalid");
        assert_eq!(body["error"]["message"], "limit is invalid");
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::BadRequest {
            message: "nope".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = RestError::InternalError {
            message: "boom".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
