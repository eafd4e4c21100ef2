use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            ContentBoundary, Footer, FooterQuery, Header, HeaderQuery, OfflineNotice,
            ScrollToTop, Sidebar, SidebarContainer, SidebarContents,
        },
        router::Route,
        store::{online::use_online_status, sidebar::SidebarState, use_sidebar},
    },
    model::layout::{FooterDto, HeaderDto},
};

/// Shared chrome around every route
///
/// The error boundary wraps only the routed content so a failing page leaves the header,
/// footer and sidebar intact, and is reset whenever the route changes.
#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let online = use_online_status();
    let mut sidebar = use_sidebar();

    rsx! {
        ScrollToTop {}
        div { class: "app-layout",
            HeaderQuery { render: move |data: HeaderDto| rsx! { Header { data } } }
            OfflineNotice { online }
            main { class: "app-content",
                ContentBoundary { reset_key: route.to_string(),
                    Outlet::<Route> {}
                }
            }
            FooterQuery { render: move |data: FooterDto| rsx! { Footer { data } } }
            SidebarContainer {
                render: move |state: SidebarState| rsx! {
                    Sidebar {
                        open: state.open,
                        title: state.content_type.title(),
                        on_close: move |_| sidebar.write().close(),
                        SidebarContents { content_type: state.content_type }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::render_app_at;

    #[test]
    fn wraps_routed_page_in_chrome() {
        let html = render_app_at("/cart");

        assert!(html.contains("class=\"app-layout\""));
        assert!(html.contains("class=\"header\""));
        assert!(html.contains("class=\"footer\""));
        assert!(html.contains("class=\"app-content\""));
        assert!(html.contains("Your cart is empty."));
        assert!(!html.contains("you are offline."));
    }

    #[test]
    fn dynamic_paths_wait_for_url_lookup() {
        let html = render_app_at("/fusion-backpack.html");

        assert!(html.contains("class=\"app-content\""));
        assert!(html.contains("class=\"loader\""));
        assert!(!html.contains("Something went wrong"));
    }
}
