use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, Page},
    router::Route,
};

#[component]
pub fn NotFound() -> Element {
    let title = page_title("Page not found");

    rsx!(
        Title { "{title}" }
        Page { class: "not-found",
            h1 { "Page not found" }
            p { "We couldn't find the page you were looking for." }
            Link { to: Route::Home {}, class: "btn", "Back to the homepage" }
        }
    )
}
