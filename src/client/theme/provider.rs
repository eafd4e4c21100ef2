use dioxus::prelude::*;

use crate::client::theme::{Theme, GLOBAL_CSS};

/// Theme signal plus the theme it started from
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub current: Signal<Theme>,
    pub initial: Signal<Theme>,
}

impl ThemeState {
    pub fn reset(&mut self) {
        let initial = self.initial.read().clone();
        self.current.set(initial);
    }
}

/// Owns the mutable theme for everything below it
#[component]
pub fn ThemeEditorState(initial: Theme, children: Element) -> Element {
    use_context_provider(move || ThemeState {
        current: Signal::new(initial.clone()),
        initial: Signal::new(initial),
    });

    rsx! { {children} }
}

pub fn use_theme_state() -> ThemeState {
    use_context::<ThemeState>()
}

/// Renders the current theme as CSS variables around its children
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_theme_state().current;
    let variables = theme.read().css_variables();

    rsx! {
        div {
            class: "theme-root",
            style: "{variables}",
            style { {GLOBAL_CSS} }
            {children}
        }
    }
}
