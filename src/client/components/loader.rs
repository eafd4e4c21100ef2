use dioxus::prelude::*;

/// Placeholder shown while content is loading
#[component]
pub fn Loader() -> Element {
    rsx!(
        div {
            class: "loader",
            role: "progressbar",
            "aria-label": "Loading",
        }
    )
}
