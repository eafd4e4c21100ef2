use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn content<'a>(&'a mut self) -> ContentFixtures<'a> {
        ContentFixtures { context: self }
    }
}

pub struct ContentFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> ContentFixtures<'a> {
    pub async fn insert_category(
        &self,
        name: &str,
        include_in_menu: bool,
        position: i32,
    ) -> Result<entity::shop_category::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ShopCategory::insert(entity::shop_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("All things {}", name.to_lowercase())),
                include_in_menu: ActiveValue::Set(include_in_menu),
                position: ActiveValue::Set(position),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_product(
        &self,
        category_id: i32,
        sku: &str,
        name: &str,
        price_cents: i64,
    ) -> Result<entity::shop_product::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ShopProduct::insert(entity::shop_product::ActiveModel {
                category_id: ActiveValue::Set(category_id),
                sku: ActiveValue::Set(sku.to_string()),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{name} description")),
                price_cents: ActiveValue::Set(price_cents),
                in_stock: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_blog_post(
        &self,
        title: &str,
        published_at: NaiveDateTime,
    ) -> Result<entity::blog_post::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BlogPost::insert(entity::blog_post::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                excerpt: ActiveValue::Set(format!("{title} excerpt")),
                content: ActiveValue::Set(format!("{title} content")),
                published_at: ActiveValue::Set(published_at),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Register a storefront path; `content_type` is the wire tag, e.g. `shop-product`
    pub async fn insert_url_rewrite(
        &self,
        path: &str,
        content_type: &str,
        entity_id: i32,
    ) -> Result<entity::url_rewrite::Model, TestError> {
        Ok(
            entity::prelude::UrlRewrite::insert(entity::url_rewrite::ActiveModel {
                path: ActiveValue::Set(path.to_string()),
                content_type: ActiveValue::Set(content_type.to_string()),
                entity_id: ActiveValue::Set(entity_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
