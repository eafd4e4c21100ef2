use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BlogPostSummaryDto {
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    pub url: Option<String>,
    pub published_at: NaiveDateTime,
}

/// One page of the blog listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BlogPageDto {
    pub posts: Vec<BlogPostSummaryDto>,
    /// 1-based page number
    pub page: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BlogPostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published_at: NaiveDateTime,
}
