use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, Loader, Page},
    error::ViewError,
    router::Route,
    routes::{blog::PUBLISHED_FORMAT, NotFound},
    util::api::{fetch_blog_post, loaded, Loaded},
};

#[component]
pub fn BlogPost(id: i32) -> Element {
    let post = use_resource(use_reactive!(|id| async move { fetch_blog_post(id).await }));

    let post = match loaded((*post.read()).as_ref()).map_err(ViewError::load("blog post"))? {
        Loaded::Pending => return rsx!(Loader {}),
        Loaded::Missing => return rsx!(NotFound {}),
        Loaded::Ready(post) => post,
    };

    let title = page_title(&post.title);

    rsx!(
        Title { "{title}" }
        Page { class: "blog-post",
            article {
                h1 { "{post.title}" }
                time { {post.published_at.format(PUBLISHED_FORMAT).to_string()} }
                for paragraph in post.content.split("\n\n") {
                    p { "{paragraph}" }
                }
            }
            Link { to: Route::Blog {}, class: "btn", "Back to the blog" }
        }
    )
}
