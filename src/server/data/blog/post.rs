use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::db::BlogPostModel;

pub struct BlogPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: &str,
        excerpt: &str,
        content: &str,
        published_at: NaiveDateTime,
    ) -> Result<BlogPostModel, DbErr> {
        let now = Utc::now().naive_utc();
        let post = entity::blog_post::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            excerpt: ActiveValue::Set(excerpt.to_string()),
            content: ActiveValue::Set(content.to_string()),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BlogPostModel>, DbErr> {
        entity::prelude::BlogPost::find_by_id(id).one(self.db).await
    }

    /// Fetch one page of posts, newest first
    ///
    /// `page_index` is 0-based. Returns the posts on the page and the total number of pages.
    /// A page past the last one is empty and never reaches the database.
    pub async fn get_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<(Vec<BlogPostModel>, u64), DbErr> {
        let paginator = entity::prelude::BlogPost::find()
            .order_by_desc(entity::blog_post::Column::PublishedAt)
            .order_by_desc(entity::blog_post::Column::Id)
            .paginate(self.db, page_size);

        let total_pages = paginator.num_pages().await?;
        if page_index >= total_pages {
            return Ok((Vec::new(), total_pages));
        }

        let posts = paginator.fetch_page(page_index).await?;

        Ok((posts, total_pages))
    }
}
