use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;
use crate::views::View;

/// Custom error type for wiki handlers
///
/// Missing pages are reported with the rendered error view; everything else
/// becomes a plain-text response carrying the error message.
#[derive(Debug)]
pub enum ApiError {
    /// Path did not match any route or carried a disallowed title
    RouteMismatch,
    /// Page file does not exist
    PageNotFound(String),
    /// Page store failure
    Storage(StoreError),
    /// Template rendering failure
    Template(askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // InvalidTitle reaches here when the store blocks an escaping link
            ApiError::RouteMismatch | ApiError::Storage(StoreError::InvalidTitle(_)) => {
                (StatusCode::NOT_FOUND, "404 page not found".to_string())
            }
            ApiError::PageNotFound(title) => {
                return View::error(&title).into_response();
            }
            ApiError::Storage(err) => {
                tracing::error!("Storage error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Template(err) => {
                tracing::error!("Template error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, error_message).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(title) => ApiError::PageNotFound(title),
            other => ApiError::Storage(other),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Template(err)
    }
}
