//! Client-side state shared through context.
//!
//! Every store is a `Signal` provided once by [`StoreProvider`] and read anywhere below it
//! with the matching `use_*` hook.

pub mod cart;
pub mod filter;
pub mod online;
pub mod order;
pub mod session;
pub mod sidebar;

use dioxus::prelude::*;

use cart::CartState;
use filter::SortOrder;
use order::PlacedOrder;
use session::SessionState;
use sidebar::SidebarState;

#[component]
pub fn StoreProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(CartState::default()));
    use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(SidebarState::default()));
    use_context_provider(|| Signal::new(SortOrder::default()));
    use_context_provider(|| Signal::new(None::<PlacedOrder>));

    rsx! { {children} }
}

pub fn use_cart() -> Signal<CartState> {
    use_context::<Signal<CartState>>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

pub fn use_sort_order() -> Signal<SortOrder> {
    use_context::<Signal<SortOrder>>()
}

pub fn use_last_order() -> Signal<Option<PlacedOrder>> {
    use_context::<Signal<Option<PlacedOrder>>>()
}
