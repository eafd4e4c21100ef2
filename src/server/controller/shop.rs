use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::server::{error::Error, model::app::AppState, service::shop::ShopService};

pub static SHOP_TAG: &str = "shop";

/// Get a category and its products
#[utoipa::path(
    get,
    path = "/api/shop/category/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with product summaries", body = crate::model::shop::CategoryDto),
        (status = 404, description = "Category not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category = ShopService::new(&state.db).get_category(id).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Get a product
#[utoipa::path(
    get,
    path = "/api/shop/product/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = crate::model::shop::ProductDto),
        (status = 404, description = "Product not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product = ShopService::new(&state.db).get_product(id).await?;

    Ok((StatusCode::OK, Json(product)))
}
