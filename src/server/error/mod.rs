//! Error types for the storefront server.
//!
//! Domain errors (configuration, content lookup) are aggregated into a single [`Error`]
//! that axum handlers return. Every variant maps to an HTTP response through
//! `IntoResponse`; anything without a specific mapping becomes a logged 500.

pub mod config;
pub mod content;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, content::ContentError},
};

/// Main error type for the storefront server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested content does not exist or the request was malformed.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Internal error indicating a bug in the storefront code.
    #[error("Internal error, please open an issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed content requests (e.g. blog page 0)
/// - 404 Not Found - For unknown paths, categories, products and posts
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_map_to_client_statuses() {
        let resp = Error::from(ContentError::UrlNotFound("/nope".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::from(ContentError::InvalidPage(0)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_are_internal() {
        let resp = Error::from(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_errors_are_internal() {
        let resp = Error::from(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
