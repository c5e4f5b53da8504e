// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type.
//!
//! Rates come from a fixed menu; arbitrary values snap to the nearest
//! preset so the UI and the backend always agree on one of the menu
//! entries.

use crate::config::{DEFAULT_PLAYBACK_RATE, PLAYBACK_RATE_PRESETS};

/// A playback rate from the preset menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a rate snapped to the nearest preset.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        let nearest = PLAYBACK_RATE_PRESETS
            .iter()
            .copied()
            .min_by(|a, b| {
                (a - rate)
                    .abs()
                    .partial_cmp(&(b - rate).abs())
                    .expect("presets are finite")
            })
            .unwrap_or(DEFAULT_PLAYBACK_RATE);
        Self(nearest)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The full preset menu, slowest first.
    #[must_use]
    pub fn presets() -> impl Iterator<Item = PlaybackRate> {
        PLAYBACK_RATE_PRESETS.iter().map(|rate| PlaybackRate(*rate))
    }

    /// Returns true for the normal (1x) rate.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - DEFAULT_PLAYBACK_RATE).abs() < 0.001
    }

    /// Menu label: `Normal` for 1x, `0.5x` style otherwise.
    #[must_use]
    pub fn label(self) -> String {
        if self.is_normal() {
            "Normal".to_string()
        } else {
            format!("{}x", self.0)
        }
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}
