// SPDX-License-Identifier: MPL-2.0
//! Playback session layer: runtime state for the current item, the
//! control surface, and the command/event seam a playback backend
//! attaches to. Decoding and rendering live behind that seam, not here.

pub mod media;
pub mod progress;
mod rate;
mod session;
mod subtitles;
mod volume;

pub use media::{MediaCommand, MediaCommandSender, MediaEvent};
pub use rate::PlaybackRate;
pub use session::{Effect, Feedback, PlayerSession, SessionState};
pub use subtitles::{SubtitleTrack, TrackList, TrackMode};
pub use volume::Volume;
