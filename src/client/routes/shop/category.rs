use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSliders;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{page_title, Loader, Page},
    error::ViewError,
    locale::use_locale,
    routes::NotFound,
    store::{sidebar::SidebarContentType, use_sidebar, use_sort_order},
    util::api::{fetch_category, loaded, Loaded},
};

#[component]
pub fn Category(id: i32) -> Element {
    let mut sidebar = use_sidebar();
    let sort_order = use_sort_order();
    let locale = use_locale();
    let category = use_resource(use_reactive!(|id| async move { fetch_category(id).await }));

    let category = match loaded((*category.read()).as_ref()).map_err(ViewError::load("category"))? {
        Loaded::Pending => return rsx!(Loader {}),
        Loaded::Missing => return rsx!(NotFound {}),
        Loaded::Ready(category) => category,
    };

    let mut products = category.products.clone();
    sort_order().apply(&mut products);
    let title = page_title(&category.name);

    rsx!(
        Title { "{title}" }
        Page { class: "category",
            div { class: "category-header",
                h1 { "{category.name}" }
                button {
                    class: "btn",
                    onclick: move |_| sidebar.write().open(SidebarContentType::Filters),
                    Icon { width: 16, height: 16, icon: FaSliders }
                    " Sort"
                }
            }
            if !category.description.is_empty() {
                p { class: "category-description", "{category.description}" }
            }
            if products.is_empty() {
                p { "There are no products in this category yet." }
            }
            ul { class: "product-grid",
                for product in products.iter() {
                    li { key: "{product.id}", class: "product-card",
                        if let Some(url) = product.url.clone() {
                            Link { to: url, "{product.name}" }
                        } else {
                            span { "{product.name}" }
                        }
                        span { class: "price", {locale.format_price(product.price_cents)} }
                    }
                }
            }
        }
    )
}
