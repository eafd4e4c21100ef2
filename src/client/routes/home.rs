use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{head::STORE_TITLE, Page},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "{STORE_TITLE}" }
        Page { class: "home",
            div { class: "hero",
                h1 { "{STORE_TITLE}" }
                p { "Workout gear, bags and stories from the team behind the shop." }
                ul { class: "hero-links",
                    li {
                        Link { to: "/gear.html", class: "btn btn-primary", "Shop gear" }
                    }
                    li {
                        Link { to: Route::Blog {}, class: "btn", "Read the blog" }
                    }
                }
            }
            a { href: "https://github.com/deity-io/falcon",
                class: "btn",
                Icon { width: 20, height: 20, icon: FaGithub }
                " Powered by Falcon"
            }
        }
    )
}
