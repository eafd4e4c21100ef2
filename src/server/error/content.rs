use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures looking up storefront content requested by a client
#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("No content is registered for path {0:?}")]
    UrlNotFound(String),
    #[error("Shop category {0} not found")]
    CategoryNotFound(i32),
    #[error("Shop product {0} not found")]
    ProductNotFound(i32),
    #[error("Blog post {0} not found")]
    BlogPostNotFound(i32),
    #[error("Blog page numbers start at 1, got {0}")]
    InvalidPage(u64),
    #[error("Blog page {page} is past the last page ({total_pages})")]
    PageOutOfRange { page: u64, total_pages: u64 },
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::InvalidPage(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
