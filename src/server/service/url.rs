use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::UrlDto,
    server::{
        data::url_rewrite::UrlRewriteRepository,
        error::{content::ContentError, Error},
    },
};

pub struct UrlService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UrlService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve a storefront path to the content registered for it
    ///
    /// The path is normalized first so `/gear.html/`, `gear.html` and `/gear.html?p=2` all
    /// resolve like `/gear.html`.
    pub async fn resolve(&self, raw_path: &str) -> Result<UrlDto, Error> {
        let path = normalize_path(raw_path);
        let repo = UrlRewriteRepository::new(self.db);

        let Some(rewrite) = repo.find_by_path(&path).await? else {
            return Err(ContentError::UrlNotFound(path).into());
        };

        tracing::debug!(
            path = %rewrite.path,
            content_type = %rewrite.content_type,
            "resolved dynamic path"
        );

        Ok(UrlDto {
            path: rewrite.path,
            content_type: rewrite.content_type,
            id: rewrite.entity_id,
        })
    }
}

/// Strip query and fragment, force a leading slash and drop trailing slashes
pub fn normalize_path(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or_default().trim();
    let path = path.trim_end_matches('/');

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
