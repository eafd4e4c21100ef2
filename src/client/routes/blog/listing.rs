use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, Loader, Page},
    error::ViewError,
    router::Route,
    routes::{blog::PUBLISHED_FORMAT, NotFound},
    util::api::{fetch_blog_page, loaded, Loaded},
};

/// Route for a page of the blog listing; the first page lives at `/blog`
pub fn blog_page_route(page: u64) -> Route {
    if page <= 1 {
        Route::Blog {}
    } else {
        Route::BlogPage { page }
    }
}

#[component]
pub fn Blog() -> Element {
    rsx!(BlogListing { page: 1 })
}

/// Numbered blog page; there is no page 0
#[component]
pub fn BlogPage(page: u64) -> Element {
    if page == 0 {
        return rsx!(NotFound {});
    }

    rsx!(BlogListing { page })
}

#[component]
pub fn BlogListing(page: u64) -> Element {
    let listing = use_resource(use_reactive!(|page| async move { fetch_blog_page(page).await }));

    let listing = match loaded((*listing.read()).as_ref()).map_err(ViewError::load("blog"))? {
        Loaded::Pending => return rsx!(Loader {}),
        Loaded::Missing => return rsx!(NotFound {}),
        Loaded::Ready(listing) => listing,
    };

    let title = if listing.page > 1 {
        page_title(&format!("Blog, page {}", listing.page))
    } else {
        page_title("Blog")
    };

    rsx!(
        Title { "{title}" }
        Page { class: "blog",
            h1 { "Blog" }
            if listing.posts.is_empty() {
                p { "No posts yet." }
            }
            for post in listing.posts.iter() {
                article { key: "{post.id}", class: "blog-post-summary",
                    h2 {
                        if let Some(url) = post.url.clone() {
                            Link { to: url, "{post.title}" }
                        } else {
                            "{post.title}"
                        }
                    }
                    time { {post.published_at.format(PUBLISHED_FORMAT).to_string()} }
                    p { "{post.excerpt}" }
                    if let Some(url) = post.url.clone() {
                        Link { to: url, class: "btn", "Read more" }
                    }
                }
            }
            nav { class: "pagination",
                if listing.page > 1 {
                    Link { to: blog_page_route(listing.page - 1), class: "btn", "Newer posts" }
                }
                span { "Page {listing.page} of {listing.total_pages}" }
                if listing.page < listing.total_pages {
                    Link { to: blog_page_route(listing.page + 1), class: "btn", "Older posts" }
                }
            }
        }
    )
}
