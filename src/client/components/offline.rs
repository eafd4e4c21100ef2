use dioxus::prelude::*;

#[component]
pub fn OfflineNotice(online: bool) -> Element {
    rsx!(
        if !online {
            p { class: "offline-notice", "you are offline." }
        }
    )
}
