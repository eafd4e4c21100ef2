//! Storefront theme.
//!
//! A [`Theme`] is a flat set of design tokens rendered as CSS custom properties by
//! [`ThemeProvider`]. [`ThemeEditorState`] owns the theme signal; in development builds the
//! [`ThemeEditor`] overlay is its only writer.

pub mod editor;
pub mod provider;

#[cfg(debug_assertions)]
pub use editor::ThemeEditor;
pub use editor::{EditorSide, ThemeEditorSlot};
pub use provider::{use_theme_state, ThemeEditorState, ThemeProvider, ThemeState};

/// Global stylesheet applied under the theme root
pub const GLOBAL_CSS: &str = r#"
body { margin: 0; }
.theme-root { font-family: var(--font-family); font-size: var(--font-size); color: var(--color-text); background: var(--color-background); min-height: 100vh; }
.theme-root a { color: var(--color-primary-dark); text-decoration: none; }
.btn { border: 1px solid var(--color-border); border-radius: var(--border-radius); padding: calc(var(--spacing) / 2) var(--spacing); background: var(--color-background); cursor: pointer; }
.btn-primary { background: var(--color-primary); border-color: var(--color-primary); color: var(--color-background); }
.app-layout { display: flex; flex-direction: column; min-height: 100vh; }
.app-content { flex: 1; padding: calc(var(--spacing) * 2); }
.offline-notice { margin: 0; padding: var(--spacing); background: var(--color-secondary); color: var(--color-background); text-align: center; }
.loader { margin: calc(var(--spacing) * 4) auto; width: 32px; height: 32px; border: 4px solid var(--color-border); border-top-color: var(--color-primary); border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.sidebar { position: fixed; top: 0; right: 0; bottom: 0; width: 320px; background: var(--color-background); border-left: 1px solid var(--color-border); padding: calc(var(--spacing) * 2); overflow-y: auto; }
.theme-editor { position: fixed; top: var(--spacing); z-index: 10; background: var(--color-background); border: 1px solid var(--color-border); border-radius: var(--border-radius); padding: var(--spacing); }
.theme-editor-left { left: var(--spacing); }
.theme-editor-right { right: var(--spacing); }
"#;

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_dark: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
    pub border: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub colors: ThemeColors,
    pub font_family: String,
    pub font_size_px: u8,
    pub border_radius_px: u8,
    pub spacing_px: u8,
}

impl Theme {
    /// Keys accepted by [`Theme::color`] and [`Theme::set_color`], in display order
    pub const COLOR_KEYS: [&'static str; 6] = [
        "primary",
        "primary_dark",
        "secondary",
        "text",
        "background",
        "border",
    ];

    pub fn color(&self, key: &str) -> Option<&str> {
        let colors = &self.colors;
        let value = match key {
            "primary" => &colors.primary,
            "primary_dark" => &colors.primary_dark,
            "secondary" => &colors.secondary,
            "text" => &colors.text,
            "background" => &colors.background,
            "border" => &colors.border,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Update a colour token, returning `false` for unknown keys
    pub fn set_color(&mut self, key: &str, value: &str) -> bool {
        let colors = &mut self.colors;
        let slot = match key {
            "primary" => &mut colors.primary,
            "primary_dark" => &mut colors.primary_dark,
            "secondary" => &mut colors.secondary,
            "text" => &mut colors.text,
            "background" => &mut colors.background,
            "border" => &mut colors.border,
            _ => return false,
        };
        *slot = value.trim().to_string();
        true
    }

    /// Inline CSS declaring every token as a custom property
    pub fn css_variables(&self) -> String {
        let mut css = String::new();
        for key in Self::COLOR_KEYS {
            if let Some(value) = self.color(key) {
                css.push_str(&format!("--color-{}: {};", key.replace('_', "-"), value));
            }
        }
        css.push_str(&format!("--font-family: {};", self.font_family));
        css.push_str(&format!("--font-size: {}px;", self.font_size_px));
        css.push_str(&format!("--border-radius: {}px;", self.border_radius_px));
        css.push_str(&format!("--spacing: {}px;", self.spacing_px));
        css
    }
}

/// The default green storefront theme
pub fn deity_green_theme() -> Theme {
    Theme {
        colors: ThemeColors {
            primary: "#a9cf38".to_string(),
            primary_dark: "#6f8c1c".to_string(),
            secondary: "#2a2a2a".to_string(),
            text: "#1f1f1f".to_string(),
            background: "#ffffff".to_string(),
            border: "#e0e0e0".to_string(),
        },
        font_family: "\"Helvetica Neue\", Arial, sans-serif".to_string(),
        font_size_px: 16,
        border_radius_px: 4,
        spacing_px: 8,
    }
}
