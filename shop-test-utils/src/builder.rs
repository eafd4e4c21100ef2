//! Declarative test builder.
//!
//! `TestBuilder` queues tables and fixtures which are created, in that order, by the final
//! `build()` call. Fixtures are inserted in the order they were queued, so the first
//! category gets ID 1, the second ID 2 and so on.

use chrono::NaiveDateTime;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,

    categories: Vec<(String, bool, i32)>, // (name, include_in_menu, position)
    products: Vec<(i32, String, String, i64)>, // (category_id, sku, name, price_cents)
    blog_posts: Vec<(String, NaiveDateTime)>,
    url_rewrites: Vec<(String, String, i32)>, // (path, content_type, entity_id)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            categories: Vec::new(),
            products: Vec::new(),
            blog_posts: Vec::new(),
            url_rewrites: Vec::new(),
        }
    }

    /// Add every storefront content table: ShopCategory, ShopProduct, BlogPost and UrlRewrite.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use shop_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), shop_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ShopCategory)
    ///     .with_table(ShopProduct)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_category(mut self, name: &str, include_in_menu: bool, position: i32) -> Self {
        self.categories
            .push((name.to_string(), include_in_menu, position));
        self
    }

    pub fn with_product(mut self, category_id: i32, sku: &str, name: &str, price_cents: i64) -> Self {
        self.products
            .push((category_id, sku.to_string(), name.to_string(), price_cents));
        self
    }

    pub fn with_blog_post(mut self, title: &str, published_at: NaiveDateTime) -> Self {
        self.blog_posts.push((title.to_string(), published_at));
        self
    }

    /// Register a storefront path for an entity; `content_type` is the wire tag.
    pub fn with_url_rewrite(mut self, path: &str, content_type: &str, entity_id: i32) -> Self {
        self.url_rewrites
            .push((path.to_string(), content_type.to_string(), entity_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::ShopCategory),
                schema.create_table_from_entity(entity::prelude::ShopProduct),
                schema.create_table_from_entity(entity::prelude::BlogPost),
                schema.create_table_from_entity(entity::prelude::UrlRewrite),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (name, include_in_menu, position) in self.categories {
            context
                .content()
                .insert_category(&name, include_in_menu, position)
                .await?;
        }

        for (category_id, sku, name, price_cents) in self.products {
            context
                .content()
                .insert_product(category_id, &sku, &name, price_cents)
                .await?;
        }

        for (title, published_at) in self.blog_posts {
            context
                .content()
                .insert_blog_post(&title, published_at)
                .await?;
        }

        for (path, content_type, entity_id) in self.url_rewrites {
            context
                .content()
                .insert_url_rewrite(&path, &content_type, entity_id)
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
