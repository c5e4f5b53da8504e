// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::player::MediaEvent;
use crate::ui::{controls, sidebar};
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Sidebar(sidebar::Message),
    /// An event from the playback backend for the current item.
    Media(MediaEvent),
    /// Start form (empty state): URL input changed.
    StartUrlChanged(String),
    /// Start form: subtitle URL input changed.
    StartSubtitleChanged(String),
    /// Start form submitted: queue at the front and play immediately.
    StartSubmitted,
    ToggleTheme,
    /// Dismiss the global error banner.
    DismissError,
    /// Periodic tick for toast expiry and control auto-hide repaints.
    Tick(Instant),
    /// Raw window event routed from the subscription (keyboard
    /// shortcuts, pointer activity).
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional media URL to queue and play on startup.
    pub url: Option<String>,
    /// Optional caption-track URL accompanying `url`.
    pub subtitle_url: Option<String>,
    /// Optional data directory override (store files).
    pub data_dir: Option<String>,
    /// Optional config directory override (settings.toml).
    pub config_dir: Option<String>,
}
