//! Page theme preference
//!
//! The one value the site persists, in LocalStorage under `theme`. Nothing in
//! the game reads it; the runner always uses its own fixed palette.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Accepts the plain stored value or a JSON string
    pub fn parse(s: &str) -> Option<Self> {
        let plain = match s.trim().to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        };
        plain.or_else(|| serde_json::from_str(s).ok())
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }

    /// Stored value wins; otherwise follow the system preference
    pub fn resolve(stored: Option<&str>, prefers_light: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_light => Theme::Light,
            None => Theme::Dark,
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "theme";

    /// Load the theme from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let stored = window
            .as_ref()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        let prefers_light = window
            .as_ref()
            .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok())
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false);

        let theme = Self::resolve(stored.as_deref(), prefers_light);
        log::info!("Theme: {}", theme.as_str());
        theme
    }

    /// Save the theme to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage.set_item(Self::STORAGE_KEY, self.as_str()).is_err() {
                log::warn!("Could not persist theme");
            }
        }
    }

    /// Reflect the theme as the `light` class on the root element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn apply(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force("light", self.is_light());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply(&self) {}
}
