// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for audio playback.
//!
//! Type-safe wrapper for volume values, always within [0.0, 1.0].
//! A volume of zero is the muted state; unmuting restores the backend's
//! last non-zero volume through its own semantics.

use crate::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME, MUTE_EPSILON, VOLUME_STEP};

/// Volume level, guaranteed to be within [0.0, 1.0].
///
/// # Example
///
/// ```
/// use iced_cue::player::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to the valid range. Values
    /// within the silence threshold snap to exactly zero so that a run
    /// of float steps still lands on the muted state.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        let clamped = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        if clamped < MUTE_EPSILON {
            Self(0.0)
        } else {
            Self(clamped)
        }
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this volume means muted (exactly zero).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == 0.0
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + VOLUME_STEP)
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - VOLUME_STEP)
    }

    /// Volume as a whole percentage for display.
    #[must_use]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}
