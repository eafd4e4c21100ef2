use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, Page, ProtectedRoute},
    locale::use_locale,
    router::Route,
    store::{use_last_order, use_session},
};

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        ProtectedRoute { AccountDashboard {} }
    )
}

#[component]
fn AccountDashboard() -> Element {
    let mut session = use_session();
    let last_order = use_last_order();
    let locale = use_locale();
    let title = page_title("My account");
    let email = session.read().email.clone().unwrap_or_default();

    rsx!(
        Title { "{title}" }
        Page { class: "account",
            h1 { "My account" }
            p { "Signed in as {email}" }
            section {
                h2 { "Recent order" }
                if let Some(order) = last_order() {
                    p {
                        "Order {order.number}: {order.item_count} item(s), "
                        {locale.format_price(order.total_cents)}
                    }
                } else {
                    p { "You haven't placed any orders yet." }
                }
            }
            button {
                class: "btn",
                onclick: move |_| {
                    session.write().sign_out();
                    navigator().push(Route::Home {});
                },
                "Sign out"
            }
        }
    )
}
