//! Light/dark visual mode and its persisted preference.
//!
//! The preference lives under [`STORAGE_KEY`] as the literal `"dark"` or
//! `"light"`. Anything else, including a missing key or unavailable
//! storage, reads as [`ThemeMode::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

pub const STORAGE_KEY: &str = "theme";

/// Class on `<body>` that switches the stylesheet to dark colours.
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only the exact string `"dark"` selects dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Owns the applied mode and keeps the store in sync with it.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference. The store is not written until the
    /// first toggle.
    pub fn load(store: S) -> Self {
        let mode = ThemeMode::from_stored(store.get(STORAGE_KEY).as_deref());
        Self { store, mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it. A failed write is logged; the new mode
    /// still applies for this page view.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        if let Err(err) = self.store.set(STORAGE_KEY, self.mode.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
