//! Tests for the shop catalog endpoints.
//!
//! This module verifies category retrieval with product summaries and storefront paths,
//! product retrieval, and 404 handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use shop_with_blog::{
    model::shop::{CategoryDto, ProductDto},
    server::{
        controller::shop::{get_category, get_product},
        model::app::AppState,
    },
};

use super::*;

/// Tests category retrieval with its products.
///
/// Products without a registered path are still listed, without a url.
///
/// Expected: Ok with 200 OK response containing both products
#[tokio::test]
async fn returns_category_with_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Gear", true, 1)
        .with_category("Women", true, 2)
        .with_product(1, "24-MB02", "Fusion Backpack", 5900)
        .with_product(1, "24-WB04", "Push It Messenger Bag", 4500)
        .with_product(2, "WT09", "Breathe-Easy Tank", 3400)
        .with_url_rewrite("/fusion-backpack.html", "shop-product", 1)
        .build()
        .await?;

    let result = get_category(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let category: CategoryDto = json_body(resp).await;
    assert_eq!(category.name, "Gear");
    assert_eq!(category.products.len(), 2);

    let backpack = category
        .products
        .iter()
        .find(|p| p.id == 1)
        .expect("backpack should be listed");
    assert_eq!(backpack.url.as_deref(), Some("/fusion-backpack.html"));

    let bag = category
        .products
        .iter()
        .find(|p| p.id == 2)
        .expect("messenger bag should be listed");
    assert_eq!(bag.url, None);

    Ok(())
}

/// Tests category retrieval for an unknown ID.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn unknown_category_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = get_category(State(test.to_app_state::<AppState>()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests product retrieval.
///
/// Expected: Ok with 200 OK response containing the product details
#[tokio::test]
async fn returns_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Women", true, 1)
        .with_product(1, "WT09", "Breathe-Easy Tank", 3400)
        .build()
        .await?;

    let result = get_product(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let product: ProductDto = json_body(resp).await;
    assert_eq!(product.sku, "WT09");
    assert_eq!(product.price_cents, 3400);
    assert_eq!(product.category_id, 1);
    assert!(product.in_stock);

    Ok(())
}

/// Tests product retrieval for an unknown ID.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn unknown_product_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = get_product(State(test.to_app_state::<AppState>()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
