use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCartPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{page_title, Loader, Page},
    error::ViewError,
    locale::use_locale,
    routes::NotFound,
    store::{sidebar::SidebarContentType, use_cart, use_sidebar},
    util::api::{fetch_product, loaded, Loaded},
};

#[component]
pub fn Product(id: i32) -> Element {
    let mut cart = use_cart();
    let mut sidebar = use_sidebar();
    let mut quantity = use_signal(|| 1u32);
    let locale = use_locale();
    let product = use_resource(use_reactive!(|id| async move { fetch_product(id).await }));

    let product = match loaded((*product.read()).as_ref()).map_err(ViewError::load("product"))? {
        Loaded::Pending => return rsx!(Loader {}),
        Loaded::Missing => return rsx!(NotFound {}),
        Loaded::Ready(product) => product,
    };

    let title = page_title(&product.name);
    let in_stock = product.in_stock;
    let price = locale.format_price(product.price_cents);

    let added = product.clone();
    let add_to_cart = move |_| {
        cart.write().add(&added, quantity());
        tracing::debug!(product_id = added.id, quantity = quantity(), "added to cart");
        sidebar.write().open(SidebarContentType::Cart);
    };

    rsx!(
        Title { "{title}" }
        Page { class: "product",
            h1 { "{product.name}" }
            p { class: "sku", "SKU: {product.sku}" }
            p { class: "price", "{price}" }
            p { "{product.description}" }
            if in_stock {
                div { class: "add-to-cart",
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{quantity}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<u32>() {
                                quantity.set(value.max(1));
                            }
                        },
                    }
                    button { class: "btn btn-primary", onclick: add_to_cart,
                        Icon { width: 16, height: 16, icon: FaCartPlus }
                        " Add to cart"
                    }
                }
            } else {
                p { class: "out-of-stock", "Out of stock" }
            }
        }
    )
}
