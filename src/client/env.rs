//! Build environment detection.
//!
//! The environment is fixed at compile time and decides whether development-only tooling
//! (the theme editor) is mounted. Release builds are production builds, and the editor
//! itself is only compiled with `debug_assertions`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildEnv {
    Development,
    Production,
}

impl BuildEnv {
    /// The environment this crate was compiled for
    pub const CURRENT: BuildEnv = if cfg!(debug_assertions) {
        BuildEnv::Development
    } else {
        BuildEnv::Production
    };

    pub const fn mounts_theme_editor(self) -> bool {
        matches!(self, BuildEnv::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_development_mounts_theme_editor() {
        assert!(BuildEnv::Development.mounts_theme_editor());
        assert!(!BuildEnv::Production.mounts_theme_editor());
    }

    #[test]
    fn current_follows_debug_assertions() {
        assert_eq!(
            BuildEnv::CURRENT.mounts_theme_editor(),
            cfg!(debug_assertions)
        );
    }
}
