//! Tests for the blog endpoints.
//!
//! This module verifies blog listing pagination (newest first, 1-based pages), the 400
//! for page 0, the 404 past the last page, and single post retrieval.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use shop_with_blog::{
    model::blog::{BlogPageDto, BlogPostDto},
    server::{
        controller::blog::{get_blog_post, get_blog_posts, BlogPageParams},
        model::app::AppState,
    },
};

use super::*;

async fn blog_with_posts(count: u32) -> Result<TestContext, TestError> {
    let mut builder = TestBuilder::new().with_content_tables();
    for day in 1..=count {
        builder = builder.with_blog_post(&format!("Post {day}"), published(day));
    }

    builder.build().await
}

/// Tests that the first page lists the newest posts.
///
/// Expected: Ok with 200 OK response with 5 posts, newest first, out of 2 pages
#[tokio::test]
async fn first_page_lists_newest_posts() -> Result<(), TestError> {
    let test = blog_with_posts(7).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams { page: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let listing: BlogPageDto = json_body(resp).await;
    assert_eq!(listing.page, 1);
    assert_eq!(listing.total_pages, 2);
    assert_eq!(listing.posts.len(), 5);
    assert_eq!(listing.posts[0].title, "Post 7");

    Ok(())
}

/// Tests the last, partially filled page.
///
/// Expected: Ok with 200 OK response with the 2 oldest posts
#[tokio::test]
async fn last_page_lists_remaining_posts() -> Result<(), TestError> {
    let test = blog_with_posts(7).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams { page: Some(2) }),
    )
    .await;

    assert!(result.is_ok());
    let listing: BlogPageDto = json_body(result.unwrap().into_response()).await;
    let titles: Vec<&str> = listing.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 2", "Post 1"]);

    Ok(())
}

/// Tests that an empty blog still has a first page.
///
/// Expected: Ok with 200 OK response and no posts
#[tokio::test]
async fn empty_blog_has_empty_first_page() -> Result<(), TestError> {
    let test = blog_with_posts(0).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams { page: Some(1) }),
    )
    .await;

    assert!(result.is_ok());
    let listing: BlogPageDto = json_body(result.unwrap().into_response()).await;
    assert!(listing.posts.is_empty());

    Ok(())
}

/// Tests requesting page 0.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn page_zero_is_bad_request() -> Result<(), TestError> {
    let test = blog_with_posts(1).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams { page: Some(0) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests requesting a page past the last one.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn page_past_the_end_is_not_found() -> Result<(), TestError> {
    let test = blog_with_posts(3).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams { page: Some(2) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests requesting the largest representable page.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn largest_page_is_not_found() -> Result<(), TestError> {
    let test = blog_with_posts(3).await?;

    let result = get_blog_posts(
        State(test.to_app_state::<AppState>()),
        Query(BlogPageParams {
            page: Some(u64::MAX),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests single post retrieval.
///
/// Expected: Ok with 200 OK response containing the post
#[tokio::test]
async fn returns_blog_post() -> Result<(), TestError> {
    let test = blog_with_posts(2).await?;

    let result = get_blog_post(State(test.to_app_state::<AppState>()), Path(2)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let post: BlogPostDto = json_body(resp).await;
    assert_eq!(post.title, "Post 2");
    assert_eq!(post.published_at, published(2));

    Ok(())
}

/// Tests single post retrieval for an unknown ID.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn unknown_blog_post_is_not_found() -> Result<(), TestError> {
    let test = blog_with_posts(1).await?;

    let result = get_blog_post(State(test.to_app_state::<AppState>()), Path(9)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
