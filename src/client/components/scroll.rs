use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;

/// Scrolls the window back to the top whenever the route changes
#[component]
pub fn ScrollToTop() -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive!(|route| {
        tracing::trace!(route = %route, "scrolling to top");
        let _ = document::eval("window.scrollTo(0, 0);");
    }));

    rsx!()
}
