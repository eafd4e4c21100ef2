use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::{
    locale::use_locale,
    router::Route,
    store::{
        filter::SortOrder,
        sidebar::{SidebarContentType, SidebarState},
        use_cart, use_session, use_sidebar, use_sort_order,
    },
};

/// Reads the sidebar store and hands the current state to `render`
#[component]
pub fn SidebarContainer(render: Callback<SidebarState, Element>) -> Element {
    let state = *use_sidebar().read();

    render.call(state)
}

/// Sliding panel; children are only rendered while it is open
#[component]
pub fn Sidebar(
    open: bool,
    #[props(into)] title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx!();
    }

    rsx!(
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h3 { "{title}" }
                button {
                    class: "btn",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
            }
            {children}
        }
    )
}

#[component]
pub fn SidebarContents(content_type: SidebarContentType) -> Element {
    match content_type {
        SidebarContentType::Cart => rsx!(MiniCart {}),
        SidebarContentType::Filters => rsx!(SortFilters {}),
        SidebarContentType::Account => rsx!(AccountLinks {}),
    }
}

#[component]
fn MiniCart() -> Element {
    let mut sidebar = use_sidebar();
    let cart = use_cart();
    let locale = use_locale();
    let cart = cart.read();

    if cart.is_empty() {
        return rsx!(p { "Your cart is empty." });
    }

    rsx!(
        ul { class: "mini-cart",
            for line in cart.lines.iter() {
                li { key: "{line.product_id}",
                    "{line.quantity} × {line.name} "
                    span { {locale.format_price(line.total_cents())} }
                }
            }
        }
        p { class: "mini-cart-subtotal",
            "Subtotal: "
            {locale.format_price(cart.subtotal_cents())}
        }
        Link {
            to: Route::Cart {},
            class: "btn btn-primary",
            onclick: move |_| sidebar.write().close(),
            "View cart"
        }
    )
}

#[component]
fn SortFilters() -> Element {
    let mut sort_order = use_sort_order();
    let current = sort_order();

    rsx!(
        fieldset { class: "sort-filters",
            legend { "Sort by" }
            for (order, caption) in SortOrder::ALL.into_iter().map(|o| (o, o.label())) {
                label { key: "{caption}",
                    input {
                        r#type: "radio",
                        name: "sort-order",
                        checked: order == current,
                        onchange: move |_| sort_order.set(order),
                    }
                    " {caption}"
                }
            }
        }
    )
}

#[component]
fn AccountLinks() -> Element {
    let mut sidebar = use_sidebar();
    let mut session = use_session();
    let email = session.read().email.clone();

    rsx!(
        if let Some(email) = email {
            p { "Signed in as {email}" }
            ul {
                li {
                    Link {
                        to: Route::Dashboard {},
                        onclick: move |_| sidebar.write().close(),
                        "My account"
                    }
                }
                li {
                    button {
                        class: "btn",
                        onclick: move |_| session.write().sign_out(),
                        "Sign out"
                    }
                }
            }
        } else {
            Link {
                to: Route::SignIn {},
                class: "btn btn-primary",
                onclick: move |_| sidebar.write().close(),
                "Sign in"
            }
        }
    )
}
