use dioxus::prelude::*;
#[cfg(debug_assertions)]
use dioxus_logger::tracing;

use crate::client::env::BuildEnv;
#[cfg(debug_assertions)]
use crate::client::theme::{use_theme_state, Theme};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorSide {
    #[default]
    Left,
    Right,
}

#[cfg(debug_assertions)]
impl EditorSide {
    fn class(&self) -> &'static str {
        match self {
            EditorSide::Left => "theme-editor theme-editor-left",
            EditorSide::Right => "theme-editor theme-editor-right",
        }
    }
}

/// Mounts the theme editor only when `env` allows development tooling
///
/// Release builds never compile the editor, so the slot always renders nothing there.
#[component]
pub fn ThemeEditorSlot(env: BuildEnv, side: EditorSide) -> Element {
    if !env.mounts_theme_editor() {
        return rsx! {};
    }

    #[cfg(debug_assertions)]
    {
        rsx! {
            ThemeEditor { side }
        }
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = side;
        rsx! {}
    }
}

/// Development overlay editing the colour tokens of the current theme
#[cfg(debug_assertions)]
#[component]
pub fn ThemeEditor(side: EditorSide) -> Element {
    let mut state = use_theme_state();
    let mut expanded = use_signal(|| false);

    let theme = state.current.read().clone();

    rsx! {
        aside { class: side.class(),
            button {
                class: "btn",
                onclick: move |_| expanded.toggle(),
                if expanded() { "Close theme editor" } else { "Theme editor" }
            }
            if expanded() {
                ul {
                    for key in Theme::COLOR_KEYS {
                        li { key: "{key}",
                            label {
                                "{key} "
                                input {
                                    r#type: "text",
                                    value: theme.color(key).unwrap_or_default().to_string(),
                                    oninput: move |evt: FormEvent| {
                                        let value = evt.value();
                                        if !state.current.write().set_color(key, &value) {
                                            tracing::warn!(key, "ignored unknown theme colour");
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                button {
                    class: "btn",
                    onclick: move |_| state.reset(),
                    "Reset"
                }
            }
        }
    }
}
