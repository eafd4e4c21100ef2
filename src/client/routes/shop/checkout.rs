use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{page_title, Page},
    locale::use_locale,
    router::Route,
    store::{order::CheckoutForm, use_cart, use_last_order},
};

#[component]
pub fn Checkout() -> Element {
    let mut cart = use_cart();
    let mut last_order = use_last_order();
    let mut form = use_signal(CheckoutForm::default);
    let mut error = use_signal(|| None::<String>);
    let locale = use_locale();
    let title = page_title("Checkout");
    let subtotal = locale.format_price(cart.read().subtotal_cents());
    let item_count = cart.read().item_count();

    let place_order = move |e: FormEvent| {
        e.prevent_default();
        let placed = form.read().place(&cart.read());
        match placed {
            Ok(order) => {
                tracing::info!(number = %order.number, "order placed");
                last_order.set(Some(order));
                cart.write().clear();
                error.set(None);
                navigator().push(Route::CheckoutConfirmation {});
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx!(
        Title { "{title}" }
        Page { class: "checkout",
            h1 { "Checkout" }
            p { class: "checkout-summary", "{item_count} item(s), subtotal {subtotal}" }
            form { onsubmit: place_order,
                label { r#for: "checkout-email", "Email" }
                input {
                    id: "checkout-email",
                    r#type: "email",
                    value: form.read().email.clone(),
                    oninput: move |e| form.write().email = e.value(),
                }
                label { r#for: "checkout-name", "Full name" }
                input {
                    id: "checkout-name",
                    value: form.read().full_name.clone(),
                    oninput: move |e| form.write().full_name = e.value(),
                }
                label { r#for: "checkout-street", "Street" }
                input {
                    id: "checkout-street",
                    value: form.read().street.clone(),
                    oninput: move |e| form.write().street = e.value(),
                }
                label { r#for: "checkout-city", "City" }
                input {
                    id: "checkout-city",
                    value: form.read().city.clone(),
                    oninput: move |e| form.write().city = e.value(),
                }
                label { r#for: "checkout-postcode", "Postcode" }
                input {
                    id: "checkout-postcode",
                    value: form.read().postcode.clone(),
                    oninput: move |e| form.write().postcode = e.value(),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Place order" }
            }
        }
    )
}

#[component]
pub fn CheckoutConfirmation() -> Element {
    let last_order = use_last_order();
    let locale = use_locale();
    let title = page_title("Order confirmation");

    let Some(order) = last_order() else {
        return rsx!(
            Title { "{title}" }
            Page { class: "checkout-confirmation",
                h1 { "No recent order" }
                Link { to: Route::Home {}, class: "btn", "Continue shopping" }
            }
        );
    };

    let total = locale.format_price(order.total_cents);

    rsx!(
        Title { "{title}" }
        Page { class: "checkout-confirmation",
            h1 { "Thank you for your order" }
            p { "Your order number is {order.number}." }
            p { "We sent a confirmation for {order.item_count} item(s) totalling {total} to {order.email}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Continue shopping" }
        }
    )
}
