//! Error types for foodchain-api

use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::pages;

/// Result type alias for foodchain-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in foodchain-api
///
/// Inside a request every variant is fatal: it is logged and answered with
/// a generic 500 page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from foodchain-auth
    #[error("Auth error: {0}")]
    Auth(#[from] foodchain_auth::AuthError),

    /// Error from foodchain-storage
    #[error("Storage error: {0}")]
    Storage(#[from] foodchain_storage::Error),

    /// Listener or socket error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::error_page()),
        )
            .into_response()
    }
}
