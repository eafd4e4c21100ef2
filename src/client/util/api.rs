//! JSON API client used by the storefront components.
//!
//! Requests go through `reqwasm` in the browser. Outside the browser (server-side
//! rendering) every request reports [`FetchError::Unavailable`], which components treat
//! like a pending request so the server renders the loading state.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{
    blog::{BlogPageDto, BlogPostDto},
    content::UrlDto,
    layout::{FooterDto, HeaderDto},
    shop::{CategoryDto, ProductDto},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Requests are only available in the browser")]
    Unavailable,
}

/// State of a resource holding a fetch result
#[derive(Clone, Debug, PartialEq)]
pub enum Loaded<T> {
    /// Still loading, or not loadable in this environment
    Pending,
    /// The API answered 404
    Missing,
    Ready(T),
}

/// Collapse a `use_resource` value into a [`Loaded`], surfacing real failures as errors
pub fn loaded<T: Clone>(
    state: Option<&Result<Option<T>, FetchError>>,
) -> Result<Loaded<T>, FetchError> {
    match state {
        None | Some(Err(FetchError::Unavailable)) => Ok(Loaded::Pending),
        Some(Err(err)) => Err(err.clone()),
        Some(Ok(None)) => Ok(Loaded::Missing),
        Some(Ok(Some(value))) => Ok(Loaded::Ready(value.clone())),
    }
}

/// Endpoint resolving a storefront path to its content
pub fn url_lookup_endpoint(path: &str) -> String {
    format!("/api/url?path={}", urlencoding::encode(path))
}

/// GET a JSON document; a 404 yields `Ok(None)`
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<Option<T>, FetchError> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| FetchError::Parse(e.to_string())),
        404 => Ok(None),
        status => {
            use crate::model::api::ErrorDto;

            let message = match response.json::<ErrorDto>().await {
                Ok(error_dto) => error_dto.error,
                Err(_) => "Unknown error".to_string(),
            };

            Err(FetchError::Status { status, message })
        }
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<Option<T>, FetchError> {
    Err(FetchError::Unavailable)
}

pub async fn fetch_header() -> Result<Option<HeaderDto>, FetchError> {
    get_json("/api/header").await
}

pub async fn fetch_footer() -> Result<Option<FooterDto>, FetchError> {
    get_json("/api/footer").await
}

/// Ask the server what content lives at `path`
pub async fn fetch_url(path: &str) -> Result<Option<UrlDto>, FetchError> {
    get_json(&url_lookup_endpoint(path)).await
}

pub async fn fetch_category(id: i32) -> Result<Option<CategoryDto>, FetchError> {
    get_json(&format!("/api/shop/category/{id}")).await
}

pub async fn fetch_product(id: i32) -> Result<Option<ProductDto>, FetchError> {
    get_json(&format!("/api/shop/product/{id}")).await
}

pub async fn fetch_blog_page(page: u64) -> Result<Option<BlogPageDto>, FetchError> {
    get_json(&format!("/api/blog/posts?page={page}")).await
}

pub async fn fetch_blog_post(id: i32) -> Result<Option<BlogPostDto>, FetchError> {
    get_json(&format!("/api/blog/post/{id}")).await
}
