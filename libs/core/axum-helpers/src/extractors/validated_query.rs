//! Query string extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with automatic validation.
///
/// Deserializes the query string into `T` and runs `T::validate()`.
/// Both failures are rejected with a 400 error page.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Search {
///     #[validate(length(max = 100))]
///     name: Option<String>,
/// }
///
/// async fn list(ValidatedQuery(search): ValidatedQuery<Search>) -> String {
///     format!("{:?}", search.name)
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Search {
        #[validate(length(max = 5))]
        name: Option<String>,
        page: Option<u32>,
    }

    async fn handler(ValidatedQuery(search): ValidatedQuery<Search>) -> String {
        format!("{}:{}", search.name.unwrap_or_default(), search.page.unwrap_or(1))
    }

    fn app() -> Router {
        Router::new().route("/", get(handler))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_query_passes() {
        assert_eq!(status_of("/?name=abc&page=2").await, StatusCode::OK);
        assert_eq!(status_of("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_integer_is_bad_request() {
        assert_eq!(status_of("/?page=abc").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validation_failure_is_bad_request() {
        assert_eq!(status_of("/?name=toolong").await, StatusCode::BAD_REQUEST);
    }
}
