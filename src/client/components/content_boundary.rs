use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

struct CaughtErrors {
    reset_key: String,
    errors: Option<ErrorContext>,
}

/// Catches rendering errors raised by the routed content
///
/// Only the wrapped subtree is replaced by the fallback; siblings such as the footer and
/// sidebar keep rendering. A new `reset_key` (the current route) clears the caught errors
/// so the next page gets a fresh render.
#[component]
pub fn ContentBoundary(#[props(into)] reset_key: String, children: Element) -> Element {
    let caught = use_hook(|| {
        Rc::new(RefCell::new(CaughtErrors {
            reset_key: reset_key.clone(),
            errors: None,
        }))
    });

    {
        let mut caught = caught.borrow_mut();
        if caught.reset_key != reset_key {
            if let Some(errors) = caught.errors.take() {
                tracing::debug!("clearing content errors for {reset_key}");
                errors.clear_errors();
            }
            caught.reset_key = reset_key;
        }
    }

    rsx!(
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                tracing::error!("content failed to render, showing fallback");
                caught.borrow_mut().errors = Some(errors);
                rsx!(ContentErrorFallback {})
            },
            {children}
        }
    )
}

#[component]
pub fn ContentErrorFallback() -> Element {
    rsx!(
        div { class: "content-error",
            h2 { "Something went wrong" }
            p { "This page could not be displayed. Please try again later." }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::client::{
        components::sidebar::Sidebar,
        error::ViewError,
        util::api::FetchError,
    };

    #[component]
    fn BrokenContent() -> Element {
        let failed: Result<(), ViewError> = Err(ViewError::Load {
            what: "product",
            source: FetchError::Status {
                status: 500,
                message: "Internal server error".to_string(),
            },
        });
        failed?;

        rsx!(p { "product details" })
    }

    fn shell_with_broken_content() -> Element {
        rsx!(
            main {
                ContentBoundary { reset_key: "/gear.html", BrokenContent {} }
            }
            footer { "footer links" }
            Sidebar { open: true, title: "Filters", on_close: move |_| {}, p { "sidebar contents" } }
        )
    }

    #[test]
    fn content_error_does_not_take_down_siblings() {
        let mut dom = VirtualDom::new(shell_with_broken_content);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(!html.contains("product details"));
        assert!(html.contains("footer links"));
        assert!(html.contains("sidebar contents"));
    }

    thread_local! {
        static FAILING: Cell<bool> = const { Cell::new(true) };
        static CURRENT_PATH: RefCell<String> = RefCell::new("/broken.html".to_string());
    }

    #[component]
    fn FlakyContent() -> Element {
        if FAILING.with(Cell::get) {
            let failed: Result<(), ViewError> = Err(ViewError::Load {
                what: "page",
                source: FetchError::Unavailable,
            });
            failed?;
        }

        rsx!(p { "page content" })
    }

    fn shell_with_flaky_content() -> Element {
        let path = CURRENT_PATH.with(|path| path.borrow().clone());

        rsx!(
            main {
                ContentBoundary { reset_key: path, FlakyContent {} }
            }
        )
    }

    fn navigate_to(dom: &mut VirtualDom, path: &str) -> String {
        CURRENT_PATH.with(|current| *current.borrow_mut() = path.to_string());
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    fn render_failed_content() -> VirtualDom {
        FAILING.with(|failing| failing.set(true));
        CURRENT_PATH.with(|current| *current.borrow_mut() = "/broken.html".to_string());

        let mut dom = VirtualDom::new(shell_with_flaky_content);
        dom.rebuild_in_place();
        dom.render_immediate_to_vec();
        dom
    }

    #[test]
    fn route_change_clears_content_error() {
        let mut dom = render_failed_content();
        assert!(dioxus_ssr::render(&dom).contains("Something went wrong"));

        FAILING.with(|failing| failing.set(false));
        let html = navigate_to(&mut dom, "/gear.html");

        assert!(html.contains("page content"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn same_route_keeps_fallback() {
        let mut dom = render_failed_content();

        FAILING.with(|failing| failing.set(false));
        let html = navigate_to(&mut dom, "/broken.html");

        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("page content"));
    }
}
