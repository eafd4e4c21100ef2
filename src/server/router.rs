//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every storefront API endpoint with its utoipa specification and serves
//! Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the storefront API router.
///
/// # Registered Endpoints
/// - `GET /api/header` - Header menu
/// - `GET /api/footer` - Footer sections
/// - `GET /api/url` - Resolve a path for the dynamic route
/// - `GET /api/shop/category/{id}` - Category with product summaries
/// - `GET /api/shop/product/{id}` - Product details
/// - `GET /api/blog/posts` - Paginated blog listing
/// - `GET /api/blog/post/{id}` - Single blog post
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Shop with Blog", description = "Storefront API"), tags(
        (name = controller::layout::LAYOUT_TAG, description = "Header and footer data"),
        (name = controller::url::URL_TAG, description = "Dynamic path resolution"),
        (name = controller::shop::SHOP_TAG, description = "Shop catalog"),
        (name = controller::blog::BLOG_TAG, description = "Blog content"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::layout::get_header))
        .routes(routes!(controller::layout::get_footer))
        .routes(routes!(controller::url::resolve_url))
        .routes(routes!(controller::shop::get_category))
        .routes(routes!(controller::shop::get_product))
        .routes(routes!(controller::blog::get_blog_posts))
        .routes(routes!(controller::blog::get_blog_post))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
