//! `{slug}-{id}` path segment of the product routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum_helpers::AppError;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]*$").unwrap());

/// Product reference parsed from a URL such as `/products/acetone-1`.
///
/// The segment is split at its last `-`. The slug may be empty; the id must
/// be a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSegment {
    pub slug: String,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a product reference")]
pub struct InvalidSegment(String);

impl FromStr for ProductSegment {
    type Err = InvalidSegment;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSegment(segment.to_string());

        let (slug, id) = segment.rsplit_once('-').ok_or_else(invalid)?;
        if !SLUG.is_match(slug) || id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id: i32 = id.parse().map_err(|_| invalid())?;
        if id < 1 {
            return Err(invalid());
        }

        Ok(Self {
            slug: slug.to_string(),
            id,
        })
    }
}

/// Reads the route's `{slug_id}` parameter; anything unparsable is a 404.
impl<S> FromRequestParts<S> for ProductSegment
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        segment
            .parse()
            .map_err(|e: InvalidSegment| AppError::NotFound(e.to_string()))
    }
}
