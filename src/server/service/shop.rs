use sea_orm::DatabaseConnection;

use crate::{
    model::{
        content::ContentType,
        shop::{CategoryDto, ProductDto, ProductSummaryDto},
    },
    server::{
        data::{
            shop::{category::CategoryRepository, product::ProductRepository},
            url_rewrite::UrlRewriteRepository,
        },
        error::{content::ContentError, Error},
    },
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a category together with the summaries of its products
    pub async fn get_category(&self, id: i32) -> Result<CategoryDto, Error> {
        let Some(category) = CategoryRepository::new(self.db).get_by_id(id).await? else {
            return Err(ContentError::CategoryNotFound(id).into());
        };

        let products = ProductRepository::new(self.db)
            .get_by_category_id(category.id)
            .await?;

        let mut paths = UrlRewriteRepository::new(self.db)
            .get_paths_for(
                ContentType::ShopProduct,
                products.iter().map(|p| p.id).collect(),
            )
            .await?;

        let products = products
            .into_iter()
            .map(|product| ProductSummaryDto {
                url: paths.remove(&product.id),
                id: product.id,
                name: product.name,
                price_cents: product.price_cents,
            })
            .collect();

        Ok(CategoryDto {
            id: category.id,
            name: category.name,
            description: category.description,
            products,
        })
    }

    pub async fn get_product(&self, id: i32) -> Result<ProductDto, Error> {
        let Some(product) = ProductRepository::new(self.db).get_by_id(id).await? else {
            return Err(ContentError::ProductNotFound(id).into());
        };

        Ok(ProductDto {
            id: product.id,
            sku: product.sku,
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            in_stock: product.in_stock,
            category_id: product.category_id,
        })
    }
}
