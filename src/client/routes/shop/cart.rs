use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{page_title, Page},
    locale::use_locale,
    router::Route,
    store::use_cart,
};

#[component]
pub fn Cart() -> Element {
    let mut cart = use_cart();
    let locale = use_locale();
    let title = page_title("Cart");
    let lines = cart.read().lines.clone();
    let subtotal = locale.format_price(cart.read().subtotal_cents());

    rsx!(
        Title { "{title}" }
        Page { class: "cart",
            h1 { "Cart" }
            if lines.is_empty() {
                p { "Your cart is empty." }
                Link { to: Route::Home {}, class: "btn", "Continue shopping" }
            } else {
                table { class: "cart-lines",
                    thead {
                        tr {
                            th { "Product" }
                            th { "Price" }
                            th { "Quantity" }
                            th { "Total" }
                            th {}
                        }
                    }
                    tbody {
                        for line in lines.into_iter() {
                            tr { key: "{line.product_id}",
                                td { "{line.name}" }
                                td { {locale.format_price(line.price_cents)} }
                                td {
                                    input {
                                        r#type: "number",
                                        min: "0",
                                        value: "{line.quantity}",
                                        oninput: move |e| {
                                            if let Ok(quantity) = e.value().parse::<u32>() {
                                                cart.write().set_quantity(line.product_id, quantity);
                                            }
                                        },
                                    }
                                }
                                td { {locale.format_price(line.total_cents())} }
                                td {
                                    button {
                                        class: "btn",
                                        title: "Remove",
                                        onclick: move |_| cart.write().remove(line.product_id),
                                        Icon { width: 14, height: 14, icon: FaTrash }
                                    }
                                }
                            }
                        }
                    }
                }
                p { class: "cart-subtotal", "Subtotal: {subtotal}" }
                Link { to: Route::Checkout {}, class: "btn btn-primary", "Proceed to checkout" }
            }
        }
    )
}
