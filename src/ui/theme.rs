// SPDX-License-Identifier: MPL-2.0
//! Application theme mode.
//!
//! A plain dark/light toggle persisted through the store; the player
//! surface itself is always dark regardless of theme.

use iced::{Color, Theme};

/// Accent color used for the played extent, active toggles, and the
/// current playlist row.
pub const ACCENT: Color = Color::from_rgb(0.02, 0.71, 0.83);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn to_theme(self) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
        }
    }

    /// Label for the theme toggle button (names the mode it switches to).
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light mode",
            Self::Light => "Dark mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_the_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn round_trips_through_the_persisted_flag() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::from_is_dark(mode.is_dark()), mode);
        }
    }

    #[test]
    fn default_is_dark() {
        assert!(ThemeMode::default().is_dark());
    }
}
