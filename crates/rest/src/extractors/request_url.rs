//! Request URL extractor.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};

/// The request target (path and query) as the client sent it.
///
/// Inside nested routers this is the original, un-stripped URI. Pass it to
/// [`Page::new`](helios_paging::Page::new) to build the page links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(pub String);

impl RequestUrl {
    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);

        let url = match uri.path_and_query() {
            Some(path_and_query) => path_and_query.as_str().to_string(),
            None => uri.path().to_string(),
        };
        Ok(RequestUrl(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, Uri};

    #[tokio::test]
    async fn test_keeps_query_as_sent() {
        let (mut parts, _) = Request::builder()
            .uri("http://localhost/users?page=2&limit=3")
            .body(())
            .unwrap()
            .into_parts();
        let url = RequestUrl::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(url.as_str(), "/users?page=2&limit=3");
    }

    #[tokio::test]
    async fn test_prefers_original_uri() {
        let (mut parts, _) = Request::builder()
            .uri("/users?page=1")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(OriginalUri(Uri::from_static("/api/v1/users?page=1")));
        let url = RequestUrl::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(url.0, "/api/v1/users?page=1");
    }
}
