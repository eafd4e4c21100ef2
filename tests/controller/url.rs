//! Tests for the resolve_url endpoint.
//!
//! This module verifies that storefront paths resolve to their registered content type
//! and entity ID, that paths are normalized before lookup and that unknown paths return
//! a 404.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use shop_with_blog::{
    model::content::{ContentType, UrlDto},
    server::{
        controller::url::{resolve_url, UrlParams},
        model::app::AppState,
    },
};

use super::*;

fn params(path: &str) -> Query<UrlParams> {
    Query(UrlParams {
        path: path.to_string(),
    })
}

/// Tests resolving a registered product path.
///
/// Expected: Ok with 200 OK response carrying the product content type and ID
#[tokio::test]
async fn resolves_registered_product_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Gear", true, 1)
        .with_product(1, "24-MB02", "Fusion Backpack", 5900)
        .with_url_rewrite("/fusion-backpack.html", "shop-product", 1)
        .build()
        .await?;

    let result = resolve_url(
        State(test.to_app_state::<AppState>()),
        params("/fusion-backpack.html"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let url: UrlDto = json_body(resp).await;
    assert_eq!(url.path, "/fusion-backpack.html");
    assert_eq!(url.content_type(), Some(ContentType::ShopProduct));
    assert_eq!(url.id, 1);

    Ok(())
}

/// Tests that trailing slashes and query strings are ignored.
///
/// Expected: Ok with 200 OK response for the normalized path
#[tokio::test]
async fn resolves_path_after_normalizing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Gear", true, 1)
        .with_url_rewrite("/gear.html", "shop-category", 1)
        .build()
        .await?;

    let result = resolve_url(
        State(test.to_app_state::<AppState>()),
        params("gear.html/?sort=price"),
    )
    .await;

    assert!(result.is_ok());
    let url: UrlDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(url.content_type(), Some(ContentType::ShopCategory));

    Ok(())
}

/// Tests resolving a path with no registered content.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn unknown_path_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = resolve_url(
        State(test.to_app_state::<AppState>()),
        params("/does-not-exist.html"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a missing table surfaces as a server error rather than a 404.
///
/// Expected: Err with 500 INTERNAL SERVER ERROR response
#[tokio::test]
async fn database_error_is_internal_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = resolve_url(
        State(test.to_app_state::<AppState>()),
        params("/gear.html"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
