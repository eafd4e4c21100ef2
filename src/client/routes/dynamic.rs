use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Loader,
        error::ViewError,
        routes::{
            blog::BlogPost,
            shop::{Category, Product},
            NotFound,
        },
        util::api::{fetch_url, loaded, Loaded},
    },
    model::content::{ContentType, UrlDto},
};

/// View mounted by the dynamic route for a resolved path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DynamicView {
    BlogPost(i32),
    Category(i32),
    Product(i32),
    NotFound,
}

impl DynamicView {
    pub fn for_content(content_type: ContentType, id: i32) -> Self {
        match content_type {
            ContentType::BlogPost => DynamicView::BlogPost(id),
            ContentType::ShopCategory => DynamicView::Category(id),
            ContentType::ShopProduct => DynamicView::Product(id),
        }
    }

    /// Pick the view for a lookup result; unknown content types are not found
    pub fn resolve(url: &UrlDto) -> Self {
        match url.content_type() {
            Some(content_type) => Self::for_content(content_type, url.id),
            None => {
                tracing::warn!(
                    path = %url.path,
                    content_type = %url.content_type,
                    "no view registered for content type"
                );
                DynamicView::NotFound
            }
        }
    }
}

/// Rebuild the requested path from catch-all segments
pub fn dynamic_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Resolves paths the static route table doesn't know by asking the server for their
/// content type
#[component]
pub fn DynamicRoute(segments: Vec<String>) -> Element {
    let path = dynamic_path(&segments);
    let lookup = use_resource(use_reactive!(|path| async move { fetch_url(&path).await }));

    let view = match loaded((*lookup.read()).as_ref()).map_err(ViewError::load("page"))? {
        Loaded::Pending => return rsx!(Loader {}),
        Loaded::Missing => DynamicView::NotFound,
        Loaded::Ready(url) => DynamicView::resolve(&url),
    };

    tracing::debug!(?view, "resolved dynamic route");

    match view {
        DynamicView::BlogPost(id) => rsx!(BlogPost { id }),
        DynamicView::Category(id) => rsx!(Category { id }),
        DynamicView::Product(id) => rsx!(Product { id }),
        DynamicView::NotFound => rsx!(NotFound {}),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn url(content_type: &str, id: i32) -> UrlDto {
        UrlDto {
            path: "/some-page.html".to_string(),
            content_type: content_type.to_string(),
            id,
        }
    }

    #[test]
    fn resolves_each_content_type_to_its_view() {
        assert_eq!(DynamicView::resolve(&url("blog-post", 1)), DynamicView::BlogPost(1));
        assert_eq!(DynamicView::resolve(&url("shop-category", 2)), DynamicView::Category(2));
        assert_eq!(DynamicView::resolve(&url("shop-product", 3)), DynamicView::Product(3));
    }

    #[test]
    fn only_the_three_content_views_are_reachable() {
        let views: HashSet<DynamicView> = ContentType::ALL
            .into_iter()
            .map(|content_type| DynamicView::resolve(&url(content_type.tag(), 1)))
            .collect();

        assert_eq!(views.len(), 3);
        assert!(!views.contains(&DynamicView::NotFound));
    }

    #[test]
    fn unknown_content_type_is_not_found() {
        assert_eq!(DynamicView::resolve(&url("cms-page", 4)), DynamicView::NotFound);
    }

    #[test]
    fn rebuilds_path_from_segments() {
        assert_eq!(dynamic_path(&["fusion-backpack.html".to_string()]), "/fusion-backpack.html");
        assert_eq!(dynamic_path(&["women".to_string(), "tops".to_string()]), "/women/tops");
        assert_eq!(dynamic_path(&[]), "/");
    }
}
