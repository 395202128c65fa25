//! Persisted light/dark theme preference.
//!
//! Resolution order at startup: stored preference, else the system
//! color-scheme signal, else light. The resolved theme is applied to the
//! page body and persisted immediately, and every toggle re-applies and
//! re-persists, so the stored value always matches the visual state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::{browser, storage};

/// localStorage key for the persisted theme preference.
const STORAGE_KEY: &str = "theme";

/// Visual theme for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable string form used in localStorage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything but the two known values is `None`.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label shown on the toggle control; it advertises the mode a click
    /// switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f} Light Mode",
            Theme::Light => "\u{1f319} Dark Mode",
        }
    }

    /// Value for the toggle control's `aria-pressed` attribute.
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// Effective theme at startup: stored preference, else the system signal,
/// else light.
pub fn resolve(stored: Option<&str>, system_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Read the stored preference, resolve it against the system signal, and
/// apply the result.
pub fn init() -> Theme {
    let stored = storage::get(STORAGE_KEY);
    let theme = resolve(stored.as_deref(), browser::prefers_dark());
    apply(theme);
    theme
}

/// Apply a theme to the page body and persist it.
pub fn apply(theme: Theme) {
    browser::set_body_dark(theme.is_dark());
    storage::set(STORAGE_KEY, theme.as_str());
}
