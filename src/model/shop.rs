use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductSummaryDto {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    /// Storefront path of the product page, if one is registered
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub products: Vec<ProductSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub in_stock: bool,
    pub category_id: i32,
}
