// SPDX-License-Identifier: MPL-2.0
//! The command/event seam between the player session and a playback
//! backend.
//!
//! The session never decodes or renders media. It sends [`MediaCommand`]s
//! over an unbounded channel the backend hands it at attach time, and it
//! consumes [`MediaEvent`]s the backend emits. Events are delivered in
//! emission order and are the sole source of truth for playback state;
//! commands are requests, not assertions.

use super::subtitles::{SubtitleTrack, TrackMode};
use tokio::sync::mpsc;

/// Sender half of the backend command channel.
pub type MediaCommandSender = mpsc::UnboundedSender<MediaCommand>;

/// Receiver half, held by the backend.
pub type MediaCommandReceiver = mpsc::UnboundedReceiver<MediaCommand>;

/// Creates a fresh command channel for a backend attach.
#[must_use]
pub fn command_channel() -> (MediaCommandSender, MediaCommandReceiver) {
    mpsc::unbounded_channel()
}

/// Requests sent to the playback backend. Fire-and-forget; outcomes are
/// observed through later [`MediaEvent`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Load a resource and attempt autoplay.
    Load {
        url: String,
        subtitle_url: Option<String>,
    },
    Play,
    Pause,
    /// Absolute seek; the backend clamps to the stream bounds.
    Seek { target_secs: f64 },
    SetVolume(f32),
    SetMuted(bool),
    SetRate(f64),
    SetLoop(bool),
    /// Switch one subtitle track's display mode.
    SetTrackMode { lang: String, mode: TrackMode },
    EnterFullscreen,
    ExitFullscreen,
    EnterPictureInPicture,
    ExitPictureInPicture,
}

/// Events emitted by the playback backend.
#[derive(Debug, Clone)]
pub enum MediaEvent {
    /// The backend is up and hands over its command channel.
    SurfaceReady(MediaCommandSender),
    /// Playback started (play request honored or resumed).
    Playing,
    /// Playback paused.
    Paused,
    /// The autoplay attempt was rejected by the host environment.
    /// Expected and recoverable; the session falls back to a paused
    /// ready state.
    AutoplayRejected,
    /// Volume or mute state changed at the resource.
    VolumeChanged { volume: f32, muted: bool },
    /// Playback rate changed at the resource.
    RateChanged { rate: f64 },
    /// Playback position advanced.
    TimeUpdate { position_secs: f64 },
    /// Stream duration became known or changed.
    DurationChanged { duration_secs: f64 },
    /// Decodable metadata arrived: duration plus any embedded subtitle
    /// tracks.
    MetadataLoaded {
        duration_secs: f64,
        embedded_tracks: Vec<SubtitleTrack>,
    },
    /// Buffered extent grew.
    BufferedChanged { buffered_secs: f64 },
    /// The backend is waiting for data; show the loading indicator.
    Waiting,
    /// Data arrived and playback resumed; clear the loading indicator.
    /// May alternate with [`MediaEvent::Waiting`] arbitrarily.
    Resumed,
    /// Playback reached the end of the stream.
    Ended,
    /// Fatal-for-this-item resource failure. No automatic retry.
    Failed { message: String },
    FullscreenChanged { fullscreen: bool },
    PictureInPictureChanged { active: bool },
    /// A picture-in-picture request could not be honored.
    PictureInPictureFailed,
}
