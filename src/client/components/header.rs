use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCartShopping, FaUser};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::head::STORE_TITLE,
        router::Route,
        store::{sidebar::SidebarContentType, use_cart, use_sidebar},
        util::api::{fetch_header, loaded, Loaded},
    },
    model::layout::HeaderDto,
};

/// Loads the header data and hands it to `render`
///
/// Until the data arrives (or if it fails to load) `render` receives an empty menu so the
/// header chrome is always present.
#[component]
pub fn HeaderQuery(render: Callback<HeaderDto, Element>) -> Element {
    let header = use_resource(fetch_header);

    let data = match loaded((*header.read()).as_ref()) {
        Ok(Loaded::Ready(data)) => data,
        Ok(_) => HeaderDto::default(),
        Err(err) => {
            tracing::error!("failed to load header: {err}");
            HeaderDto::default()
        }
    };

    render.call(data)
}

#[component]
pub fn Header(data: HeaderDto) -> Element {
    let mut sidebar = use_sidebar();
    let cart = use_cart();
    let item_count = cart.read().item_count();

    let store_name = if data.store_name.is_empty() {
        STORE_TITLE.to_string()
    } else {
        data.store_name.clone()
    };

    rsx!(
        header { class: "header",
            Link { to: Route::Home {}, class: "header-logo", "{store_name}" }
            nav {
                ul { class: "header-menu",
                    for item in data.menu.iter() {
                        li { key: "{item.url}",
                            Link { to: item.url.clone(), "{item.name}" }
                        }
                    }
                }
            }
            div { class: "header-actions",
                button {
                    class: "btn",
                    title: "Account",
                    onclick: move |_| sidebar.write().toggle(SidebarContentType::Account),
                    Icon { width: 20, height: 20, icon: FaUser }
                }
                button {
                    class: "btn",
                    title: "Cart",
                    onclick: move |_| sidebar.write().toggle(SidebarContentType::Cart),
                    Icon { width: 20, height: 20, icon: FaCartShopping }
                    if item_count > 0 {
                        span { class: "cart-count", "{item_count}" }
                    }
                }
            }
        }
    )
}
