use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{model::content::ContentType, server::model::db::UrlRewriteModel};

pub struct UrlRewriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UrlRewriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        path: &str,
        content_type: ContentType,
        entity_id: i32,
    ) -> Result<UrlRewriteModel, DbErr> {
        let rewrite = entity::url_rewrite::ActiveModel {
            path: ActiveValue::Set(path.to_string()),
            content_type: ActiveValue::Set(content_type.tag().to_string()),
            entity_id: ActiveValue::Set(entity_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        rewrite.insert(self.db).await
    }

    pub async fn find_by_path(&self, path: &str) -> Result<Option<UrlRewriteModel>, DbErr> {
        entity::prelude::UrlRewrite::find()
            .filter(entity::url_rewrite::Column::Path.eq(path))
            .one(self.db)
            .await
    }

    /// Get the storefront paths of the given entities, keyed by entity ID
    ///
    /// Entities without a registered path are absent from the map.
    pub async fn get_paths_for(
        &self,
        content_type: ContentType,
        entity_ids: Vec<i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        if entity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rewrites = entity::prelude::UrlRewrite::find()
            .filter(entity::url_rewrite::Column::ContentType.eq(content_type.tag()))
            .filter(entity::url_rewrite::Column::EntityId.is_in(entity_ids))
            .all(self.db)
            .await?;

        Ok(rewrites
            .into_iter()
            .map(|rewrite| (rewrite.entity_id, rewrite.path))
            .collect())
    }
}
