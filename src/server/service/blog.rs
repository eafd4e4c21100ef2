use sea_orm::DatabaseConnection;

use crate::{
    model::{
        blog::{BlogPageDto, BlogPostDto, BlogPostSummaryDto},
        content::ContentType,
    },
    server::{
        data::{blog::post::BlogPostRepository, url_rewrite::UrlRewriteRepository},
        error::{content::ContentError, Error},
    },
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
    page_size: u64,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection, page_size: u64) -> Self {
        Self { db, page_size }
    }

    /// Get a page of the blog listing
    ///
    /// Pages are 1-based. Page 1 of an empty blog is an empty listing; any other page past
    /// the last one is an error.
    pub async fn get_page(&self, page: u64) -> Result<BlogPageDto, Error> {
        if page == 0 {
            return Err(ContentError::InvalidPage(page).into());
        }

        let (posts, total_pages) = BlogPostRepository::new(self.db)
            .get_page(page - 1, self.page_size.max(1))
            .await?;

        if page > total_pages.max(1) {
            return Err(ContentError::PageOutOfRange { page, total_pages }.into());
        }

        let mut paths = UrlRewriteRepository::new(self.db)
            .get_paths_for(ContentType::BlogPost, posts.iter().map(|p| p.id).collect())
            .await?;

        let posts = posts
            .into_iter()
            .map(|post| BlogPostSummaryDto {
                url: paths.remove(&post.id),
                id: post.id,
                title: post.title,
                excerpt: post.excerpt,
                published_at: post.published_at,
            })
            .collect();

        Ok(BlogPageDto {
            posts,
            page,
            total_pages,
        })
    }

    pub async fn get_post(&self, id: i32) -> Result<BlogPostDto, Error> {
        let Some(post) = BlogPostRepository::new(self.db).get_by_id(id).await? else {
            return Err(ContentError::BlogPostNotFound(id).into());
        };

        Ok(BlogPostDto {
            id: post.id,
            title: post.title,
            content: post.content,
            published_at: post.published_at,
        })
    }
}
