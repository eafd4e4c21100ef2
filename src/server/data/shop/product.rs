use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::ProductModel;

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        category_id: i32,
        sku: &str,
        name: &str,
        price_cents: i64,
    ) -> Result<ProductModel, DbErr> {
        let now = Utc::now().naive_utc();
        let product = entity::shop_product::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            sku: ActiveValue::Set(sku.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(String::new()),
            price_cents: ActiveValue::Set(price_cents),
            in_stock: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductModel>, DbErr> {
        entity::prelude::ShopProduct::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<ProductModel>, DbErr> {
        entity::prelude::ShopProduct::find()
            .filter(entity::shop_product::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::shop_product::Column::Name)
            .all(self.db)
            .await
    }
}
