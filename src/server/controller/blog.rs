use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{error::Error, model::app::AppState, service::blog::BlogService};

pub static BLOG_TAG: &str = "blog";

#[derive(Deserialize)]
pub struct BlogPageParams {
    pub page: Option<u64>,
}

/// Get a page of blog posts, newest first
///
/// # Responses
/// - 200 (OK): The requested page
/// - 400 (Bad Request): Page 0 was requested
/// - 404 (Not Found): The page is past the last page
#[utoipa::path(
    get,
    path = "/api/blog/posts",
    tag = BLOG_TAG,
    params(("page" = Option<u64>, Query, description = "1-based page number, defaults to 1")),
    responses(
        (status = 200, description = "Page of blog posts", body = crate::model::blog::BlogPageDto),
        (status = 400, description = "Invalid page number", body = crate::model::api::ErrorDto),
        (status = 404, description = "Page out of range", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_blog_posts(
    State(state): State<AppState>,
    params: Query<BlogPageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = params.0.page.unwrap_or(1);
    let posts = BlogService::new(&state.db, state.settings.blog_page_size)
        .get_page(page)
        .await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Get a single blog post
#[utoipa::path(
    get,
    path = "/api/blog/post/{id}",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post", body = crate::model::blog::BlogPostDto),
        (status = 404, description = "Blog post not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post = BlogService::new(&state.db, state.settings.blog_page_size)
        .get_post(id)
        .await?;

    Ok((StatusCode::OK, Json(post)))
}
