//! Tests for the header and footer endpoints.
//!
//! This module verifies that the header menu lists menu categories in position order
//! followed by the blog, and that the footer links to the same categories.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use shop_with_blog::{
    model::layout::{FooterDto, HeaderDto},
    server::{
        controller::layout::{get_footer, get_header},
        model::app::AppState,
    },
};

use super::*;

/// Tests header menu ordering and filtering.
///
/// Categories hidden from the menu or without a storefront path are left out.
///
/// Expected: Ok with 200 OK response listing Women, Gear then Blog
#[tokio::test]
async fn header_lists_menu_categories_then_blog() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Gear", true, 3)
        .with_category("Women", true, 1)
        .with_category("Sale", false, 2)
        .with_category("Unlinked", true, 4)
        .with_url_rewrite("/gear.html", "shop-category", 1)
        .with_url_rewrite("/women.html", "shop-category", 2)
        .with_url_rewrite("/sale.html", "shop-category", 3)
        .build()
        .await?;

    let result = get_header(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let header: HeaderDto = json_body(resp).await;
    let menu: Vec<(&str, &str)> = header
        .menu
        .iter()
        .map(|item| (item.name.as_str(), item.url.as_str()))
        .collect();
    assert_eq!(
        menu,
        vec![("Women", "/women.html"), ("Gear", "/gear.html"), ("Blog", "/blog")]
    );
    assert_eq!(header.store_name, "Deity Shop with Blog");

    Ok(())
}

/// Tests the footer sections and copyright line.
///
/// Expected: Ok with 200 OK response with a Shop section linking the categories
#[tokio::test]
async fn footer_links_categories_and_customer_service() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_category("Gear", true, 1)
        .with_url_rewrite("/gear.html", "shop-category", 1)
        .build()
        .await?;

    let result = get_footer(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let footer: FooterDto = json_body(resp).await;
    let sections: Vec<&str> = footer.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sections, vec!["Shop", "Customer service", "About us"]);
    assert_eq!(footer.sections[0].links[0].url, "/gear.html");
    assert!(footer.copyright.ends_with("Deity Shop with Blog"));

    Ok(())
}
