use dioxus::prelude::*;

use crate::client::{
    components::HeadMetaTags,
    env::BuildEnv,
    locale::LocaleProvider,
    router::Route,
    store::{online::use_online_status_provider, StoreProvider},
    theme::{deity_green_theme, EditorSide, ThemeEditorSlot, ThemeEditorState, ThemeProvider},
};

/// Storefront root
///
/// Providers wrap the router; the theme editor sits beside the themed tree so it keeps its
/// own look while editing the storefront's theme.
#[component]
pub fn App() -> Element {
    use_online_status_provider();

    rsx! {
        LocaleProvider {
            StoreProvider {
                ThemeEditorState { initial: deity_green_theme(),
                    ThemeProvider {
                        HeadMetaTags {}
                        Router::<Route> {}
                    }
                    ThemeEditorSlot { env: BuildEnv::CURRENT, side: EditorSide::Left }
                }
            }
        }
    }
}
