// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are simple SVG glyphs embedded at compile time via
//! `include_bytes!`; handles are cached with `OnceLock` so each asset is
//! parsed once. Names describe the icon's appearance, not the action
//! context (`trash`, not `remove_item`).

use super::notifications::Icon;
use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Transport
// =============================================================================

define_icon!(play, "play.svg", "Play: triangle pointing right.");
define_icon!(pause, "pause.svg", "Pause: two vertical bars.");
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Chevron pointing left (skip back)."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right (skip forward)."
);

// =============================================================================
// Audio
// =============================================================================

define_icon!(volume, "volume.svg", "Speaker with sound waves.");
define_icon!(volume_mute, "volume_mute.svg", "Speaker with a cross.");

// =============================================================================
// Modes
// =============================================================================

define_icon!(repeat, "repeat.svg", "Circular repeat arrows.");
define_icon!(captions, "captions.svg", "Captions box.");
define_icon!(theater, "theater.svg", "Wide rectangle (theater layout).");
define_icon!(
    monitor_play,
    "monitor_play.svg",
    "Monitor with a play triangle."
);
define_icon!(
    picture_in_picture,
    "pip.svg",
    "Screen with an inset mini view."
);
define_icon!(maximize, "maximize.svg", "Expanding corner arrows.");
define_icon!(minimize, "minimize.svg", "Collapsing corner arrows.");
define_icon!(settings, "settings.svg", "Gear.");

// =============================================================================
// Lists and feedback
// =============================================================================

define_icon!(plus, "plus.svg", "Plus sign.");
define_icon!(trash, "trash.svg", "Trash can.");
define_icon!(history, "history.svg", "Clock with a rewind arrow.");
define_icon!(check, "check.svg", "Check mark.");
define_icon!(clock, "clock.svg", "Clock face.");
define_icon!(x_circle, "x_circle.svg", "Cross in a circle.");
define_icon!(film, "film.svg", "Film strip.");
define_icon!(
    grip_vertical,
    "grip_vertical.svg",
    "Vertical grip dots (drag handle)."
);

/// Applies a square size to an icon.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}

/// Resolves the asset for a notification icon variant.
#[must_use]
pub fn for_notification(icon: Icon) -> Svg<'static> {
    match icon {
        Icon::Play => play(),
        Icon::Pause => pause(),
        Icon::VolumeOn => volume(),
        Icon::VolumeOff => volume_mute(),
        Icon::Clock => clock(),
        Icon::Repeat => repeat(),
        Icon::Captions => captions(),
        Icon::Theater => monitor_play(),
        Icon::PictureInPicture => picture_in_picture(),
        Icon::SkipForward => chevron_right(),
        Icon::SkipBack => chevron_left(),
        Icon::Plus => plus(),
        Icon::Trash => trash(),
        Icon::History => history(),
        Icon::Check => check(),
        Icon::Settings => settings(),
        Icon::Error => x_circle(),
    }
}
