use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::CategoryModel;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        include_in_menu: bool,
        position: i32,
    ) -> Result<CategoryModel, DbErr> {
        let now = Utc::now().naive_utc();
        let category = entity::shop_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            include_in_menu: ActiveValue::Set(include_in_menu),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::ShopCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Categories shown in the header menu, in menu order
    pub async fn get_menu_categories(&self) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::ShopCategory::find()
            .filter(entity::shop_category::Column::IncludeInMenu.eq(true))
            .order_by_asc(entity::shop_category::Column::Position)
            .order_by_asc(entity::shop_category::Column::Id)
            .all(self.db)
            .await
    }
}
