//! Server-side rendering of the whole storefront at a given path, for component tests.

use std::rc::Rc;

use dioxus::{history::MemoryHistory, prelude::*};

use crate::client::App;

#[component]
fn AppAt(path: String) -> Element {
    use_context_provider(move || Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>);

    rsx!(App {})
}

/// Render [`App`] with the router starting at `path`
pub fn render_app_at(path: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        AppAt,
        AppAtProps {
            path: path.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
