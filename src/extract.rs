use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;
use crate::store::validate_title;

/// `{title}` path segment that passed the title allow-list.
///
/// Extraction failure is a route mismatch, so the handler never runs for a
/// disallowed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(pub String);

impl PageTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for PageTitle
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteMismatch)?;

        match validate_title(&raw) {
            Ok(_) => Ok(PageTitle(raw)),
            Err(_) => {
                tracing::debug!("Rejected page title: {:?}", raw);
                Err(ApiError::RouteMismatch)
            }
        }
    }
}
