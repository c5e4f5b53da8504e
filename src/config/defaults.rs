// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for tunable values used across the
//! application, organized by category.

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0, where 1.0 = 100%).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (10%).
pub const VOLUME_STEP: f32 = 0.1;

/// Threshold below which a volume counts as silent/muted. Repeated
/// float steps do not always land on exactly 0.0.
pub const MUTE_EPSILON: f32 = 0.001;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// The rate menu. Rates are snapped to this closed set; there is no
/// free-form rate entry.
pub const PLAYBACK_RATE_PRESETS: &[f64] = &[0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default relative seek step in seconds (skip buttons and arrow keys).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 5.0;

/// Minimum configurable seek step in seconds.
pub const MIN_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum configurable seek step in seconds.
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Maximum number of watch-history entries kept; older entries beyond
/// the cap are evicted from the tail.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Minimum position delta, in seconds, before a time update is written
/// back to the history store. Suppresses per-tick persistence churn.
pub const DEFAULT_HISTORY_WRITE_THRESHOLD_SECS: f64 = 5.0;

// ==========================================================================
// Controls / Notification Defaults
// ==========================================================================

/// Auto-hide timeout for the control overlay while playing (seconds).
pub const DEFAULT_CONTROLS_HIDE_TIMEOUT_SECS: u64 = 3;

/// How long a toast notification stays on screen (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 2000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Seek step validation
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS > MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);

    // History validation
    assert!(DEFAULT_HISTORY_CAP > 0);
    assert!(DEFAULT_HISTORY_WRITE_THRESHOLD_SECS > 0.0);

    // Ensure the rate menu is non-empty and strictly ascending
    assert!(!PLAYBACK_RATE_PRESETS.is_empty());
    let mut i = 1;
    while i < PLAYBACK_RATE_PRESETS.len() {
        assert!(PLAYBACK_RATE_PRESETS[i] > PLAYBACK_RATE_PRESETS[i - 1]);
        i += 1;
    }

    // Ensure the default rate is in the menu
    let mut found_default = false;
    let mut j = 0;
    while j < PLAYBACK_RATE_PRESETS.len() {
        if (PLAYBACK_RATE_PRESETS[j] * 100.0) as i64 == (DEFAULT_PLAYBACK_RATE * 100.0) as i64 {
            found_default = true;
        }
        j += 1;
    }
    assert!(found_default);
};
