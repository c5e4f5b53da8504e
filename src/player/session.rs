// SPDX-License-Identifier: MPL-2.0
//! Per-item playback session.
//!
//! One session exists per current item, keyed by its URL; switching
//! items tears the session down and builds a fresh one, which detaches
//! the old command channel and abandons any events still in flight from
//! the previous resource.
//!
//! The session mirrors backend events into its runtime state and only
//! ever *requests* changes through commands. The two deliberate
//! exceptions are loop (a plain attribute with no change event at the
//! seam) and theater mode (pure presentation, never reaches the
//! backend); both are mirrored locally when toggled.

use super::media::{MediaCommand, MediaCommandSender, MediaEvent};
use super::progress::SeekBar;
use super::rate::PlaybackRate;
use super::subtitles::TrackList;
use super::volume::Volume;
use crate::playlist::PlaylistItem;
use std::time::{Duration, Instant};

/// Lifecycle of the active item. "No item" is represented by the shell
/// holding no session at all.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Resource requested, nothing decodable yet.
    Loading,
    /// Metadata arrived or autoplay was rejected; paused and ready.
    Ready,
    Playing,
    Paused,
    /// Fatal for this item; the user must pick another.
    Failed(String),
}

/// What a handled event means for the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Playback advanced; the shell may fold this into the history.
    PositionChanged(f64),
    /// The stream finished; the shell advances the playlist.
    Ended,
    /// Resource failure to surface as a global error.
    Failed(String),
    /// Picture-in-picture request failed; worth a toast, never fatal.
    PictureInPictureFailed,
}

/// A user-facing mode change produced by a control operation. The shell
/// turns these into toast notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Muted(bool),
    VolumeChanged(Volume),
    RateChanged(PlaybackRate),
    LoopChanged(bool),
    Skipped(f64),
    JumpedTo(f64),
    TheaterChanged(bool),
    SubtitleChanged(Option<String>),
}

/// Live state for the current item.
#[derive(Debug)]
pub struct PlayerSession {
    item: PlaylistItem,
    state: SessionState,

    // Mirrored from backend events.
    volume: Volume,
    muted: bool,
    rate: PlaybackRate,
    position_secs: f64,
    duration_secs: f64,
    buffered_secs: f64,
    fullscreen: bool,
    picture_in_picture: bool,
    /// Waiting-for-data indicator; flips freely with Waiting/Resumed.
    stalled: bool,

    // Mirrored locally on toggle (no backend event exists).
    looping: bool,
    theater: bool,

    tracks: TrackList,
    seek_bar: SeekBar,

    command_sender: Option<MediaCommandSender>,

    // Control-overlay visibility clock.
    last_pointer_activity: Option<Instant>,
    hide_timeout: Duration,
    settings_menu_open: bool,
}

impl PlayerSession {
    /// Starts a session for an item. The backend has not attached yet;
    /// the load request goes out on [`MediaEvent::SurfaceReady`].
    #[must_use]
    pub fn new(item: PlaylistItem, hide_timeout: Duration) -> Self {
        Self {
            item,
            state: SessionState::Loading,
            volume: Volume::default(),
            muted: false,
            rate: PlaybackRate::default(),
            position_secs: 0.0,
            duration_secs: 0.0,
            buffered_secs: 0.0,
            fullscreen: false,
            picture_in_picture: false,
            stalled: false,
            looping: false,
            theater: false,
            tracks: TrackList::new(),
            seek_bar: SeekBar::new(),
            command_sender: None,
            last_pointer_activity: Some(Instant::now()),
            hide_timeout,
            settings_menu_open: false,
        }
    }

    // ----- accessors -----

    #[must_use]
    pub fn item(&self) -> &PlaylistItem {
        &self.item
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.item.url
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.state, SessionState::Playing)
    }

    /// True while the resource is loading or waiting for data; drives
    /// the spinner.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading) || self.stalled
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_theater(&self) -> bool {
        self.theater
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    #[must_use]
    pub fn buffered_secs(&self) -> f64 {
        self.buffered_secs
    }

    #[must_use]
    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    #[must_use]
    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    pub fn seek_bar_mut(&mut self) -> &mut SeekBar {
        &mut self.seek_bar
    }

    #[must_use]
    pub fn settings_menu_open(&self) -> bool {
        self.settings_menu_open
    }

    pub fn toggle_settings_menu(&mut self) {
        self.settings_menu_open = !self.settings_menu_open;
    }

    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.command_sender.is_some()
    }

    // ----- backend events -----

    /// Applies a backend event to the mirrored state and reports what it
    /// means for the shell. Handlers are idempotent: state is re-derived
    /// from the event payloads, so duplicate delivery is harmless.
    pub fn handle_event(&mut self, event: MediaEvent) -> Effect {
        match event {
            MediaEvent::SurfaceReady(sender) => {
                self.command_sender = Some(sender);
                self.send(MediaCommand::Load {
                    url: self.item.url.clone(),
                    subtitle_url: self.item.subtitle_url().map(str::to_string),
                });
                Effect::None
            }
            MediaEvent::Playing => {
                self.state = SessionState::Playing;
                self.touch_pointer();
                Effect::None
            }
            MediaEvent::Paused => {
                self.state = SessionState::Paused;
                self.touch_pointer();
                Effect::None
            }
            MediaEvent::AutoplayRejected => {
                // Expected on hosts that require a user gesture; a
                // normal transition, not an error.
                tracing::debug!(url = %self.item.url, "autoplay rejected; staying paused");
                self.state = SessionState::Ready;
                self.stalled = false;
                Effect::None
            }
            MediaEvent::VolumeChanged { volume, muted } => {
                self.volume = Volume::new(volume);
                self.muted = muted;
                Effect::None
            }
            MediaEvent::RateChanged { rate } => {
                self.rate = PlaybackRate::new(rate);
                Effect::None
            }
            MediaEvent::TimeUpdate { position_secs } => {
                if self.seek_bar.is_seeking() {
                    // The drag preview owns the bar until release.
                    Effect::None
                } else {
                    self.position_secs = position_secs;
                    Effect::PositionChanged(position_secs)
                }
            }
            MediaEvent::DurationChanged { duration_secs } => {
                self.duration_secs = duration_secs;
                Effect::None
            }
            MediaEvent::MetadataLoaded {
                duration_secs,
                embedded_tracks,
            } => {
                self.duration_secs = duration_secs;
                self.register_tracks(embedded_tracks);
                if self.state == SessionState::Loading {
                    self.state = SessionState::Ready;
                }
                Effect::None
            }
            MediaEvent::BufferedChanged { buffered_secs } => {
                self.buffered_secs = buffered_secs;
                Effect::None
            }
            MediaEvent::Waiting => {
                self.stalled = true;
                Effect::None
            }
            MediaEvent::Resumed => {
                self.stalled = false;
                Effect::None
            }
            MediaEvent::Ended => {
                self.state = SessionState::Paused;
                Effect::Ended
            }
            MediaEvent::Failed { message } => {
                self.stalled = false;
                self.state = SessionState::Failed(message.clone());
                Effect::Failed(message)
            }
            MediaEvent::FullscreenChanged { fullscreen } => {
                self.fullscreen = fullscreen;
                Effect::None
            }
            MediaEvent::PictureInPictureChanged { active } => {
                self.picture_in_picture = active;
                Effect::None
            }
            MediaEvent::PictureInPictureFailed => Effect::PictureInPictureFailed,
        }
    }

    /// Registers the merged track set for the item: external caption
    /// first, embedded tracks deduplicated, everything forced hidden,
    /// then the first track auto-activated.
    fn register_tracks(&mut self, embedded: Vec<super::subtitles::SubtitleTrack>) {
        self.tracks = TrackList::merged(self.item.subtitle_url().is_some(), embedded);
        let first_lang = self.tracks.first().map(|track| track.lang.clone());
        self.apply_track_modes(first_lang.as_deref());
    }

    fn apply_track_modes(&mut self, lang: Option<&str>) {
        for (track, mode) in self.tracks.activate(lang) {
            self.send(MediaCommand::SetTrackMode {
                lang: track.lang,
                mode,
            });
        }
    }

    // ----- control surface -----

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.send(MediaCommand::Pause);
        } else {
            self.send(MediaCommand::Play);
        }
    }

    pub fn toggle_mute(&mut self) -> Feedback {
        let muted = !self.muted;
        self.send(MediaCommand::SetMuted(muted));
        Feedback::Muted(muted)
    }

    /// Requests a new volume. Zero volume also requests the muted
    /// state; non-zero requests unmute.
    pub fn set_volume(&mut self, volume: Volume) -> Feedback {
        self.send(MediaCommand::SetVolume(volume.value()));
        self.send(MediaCommand::SetMuted(volume.is_muted()));
        Feedback::VolumeChanged(volume)
    }

    pub fn set_rate(&mut self, rate: PlaybackRate) -> Feedback {
        self.send(MediaCommand::SetRate(rate.value()));
        Feedback::RateChanged(rate)
    }

    pub fn toggle_loop(&mut self) -> Feedback {
        self.looping = !self.looping;
        self.send(MediaCommand::SetLoop(self.looping));
        Feedback::LoopChanged(self.looping)
    }

    /// Relative seek, clamped to [0, duration].
    pub fn skip(&mut self, delta_secs: f64) -> Feedback {
        let target = (self.position_secs + delta_secs).clamp(0.0, self.duration_secs.max(0.0));
        self.send(MediaCommand::Seek {
            target_secs: target,
        });
        Feedback::Skipped(delta_secs)
    }

    /// Absolute seek, clamped to [0, duration].
    pub fn seek_to(&mut self, target_secs: f64) -> Feedback {
        let target = target_secs.clamp(0.0, self.duration_secs.max(0.0));
        self.send(MediaCommand::Seek {
            target_secs: target,
        });
        Feedback::JumpedTo(target)
    }

    /// Commits a finished seek drag, if one was live.
    pub fn commit_seek(&mut self) -> Option<Feedback> {
        let target = self.seek_bar.release()?;
        Some(self.seek_to(target))
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.fullscreen {
            self.send(MediaCommand::ExitFullscreen);
        } else {
            self.send(MediaCommand::EnterFullscreen);
        }
    }

    pub fn toggle_picture_in_picture(&mut self) {
        if self.picture_in_picture {
            self.send(MediaCommand::ExitPictureInPicture);
        } else {
            self.send(MediaCommand::EnterPictureInPicture);
        }
    }

    pub fn toggle_theater(&mut self) -> Feedback {
        self.theater = !self.theater;
        Feedback::TheaterChanged(self.theater)
    }

    /// Activates one subtitle track (or none); all others go hidden.
    pub fn set_active_subtitle(&mut self, lang: Option<&str>) -> Feedback {
        self.apply_track_modes(lang);
        Feedback::SubtitleChanged(self.tracks.active().map(str::to_string))
    }

    // ----- control overlay visibility -----

    /// Records pointer activity over the player pane.
    pub fn touch_pointer(&mut self) {
        self.last_pointer_activity = Some(Instant::now());
    }

    /// Pointer left the pane; while playing this hides the controls
    /// immediately.
    pub fn pointer_left(&mut self) {
        if self.is_playing() {
            self.last_pointer_activity = None;
        }
    }

    /// Controls stay visible while paused; while playing they survive
    /// the configured timeout past the last pointer activity.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible_at(Instant::now())
    }

    #[must_use]
    pub fn controls_visible_at(&self, now: Instant) -> bool {
        if !self.is_playing() {
            return true;
        }
        self.last_pointer_activity
            .map(|at| now.duration_since(at) < self.hide_timeout)
            .unwrap_or(false)
    }

    fn send(&self, command: MediaCommand) {
        if let Some(sender) = &self.command_sender {
            // The backend may already be gone during teardown.
            let _ = sender.send(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::media::{command_channel, MediaCommandReceiver};
    use crate::player::subtitles::{SubtitleTrack, TrackMode, EXTERNAL_LANG};
    use crate::test_utils::assert_abs_diff_eq;

    const HIDE_TIMEOUT: Duration = Duration::from_secs(3);

    fn item_with_subtitle() -> PlaylistItem {
        PlaylistItem::new("https://example.com/a.mp4", "https://example.com/a.vtt", "A")
    }

    fn item_plain() -> PlaylistItem {
        PlaylistItem::new("https://example.com/b.mp4", "", "B")
    }

    fn attached_session(item: PlaylistItem) -> (PlayerSession, MediaCommandReceiver) {
        let mut session = PlayerSession::new(item, HIDE_TIMEOUT);
        let (sender, receiver) = command_channel();
        session.handle_event(MediaEvent::SurfaceReady(sender));
        (session, receiver)
    }

    fn drain(receiver: &mut MediaCommandReceiver) -> Vec<MediaCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = receiver.try_recv() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn attach_requests_load_with_subtitle_url() {
        let (_session, mut receiver) = attached_session(item_with_subtitle());

        let commands = drain(&mut receiver);
        assert_eq!(
            commands,
            vec![MediaCommand::Load {
                url: "https://example.com/a.mp4".into(),
                subtitle_url: Some("https://example.com/a.vtt".into()),
            }]
        );
    }

    #[test]
    fn new_session_starts_loading() {
        let session = PlayerSession::new(item_plain(), HIDE_TIMEOUT);
        assert_eq!(*session.state(), SessionState::Loading);
        assert!(session.is_loading());
        assert!(!session.has_backend());
    }

    #[test]
    fn autoplay_rejection_falls_back_to_ready() {
        let (mut session, _receiver) = attached_session(item_plain());

        let effect = session.handle_event(MediaEvent::AutoplayRejected);

        assert_eq!(effect, Effect::None);
        assert_eq!(*session.state(), SessionState::Ready);
        assert!(!session.is_playing());
        assert!(!session.is_loading());
    }

    #[test]
    fn play_pause_events_drive_state() {
        let (mut session, _receiver) = attached_session(item_plain());

        session.handle_event(MediaEvent::Playing);
        assert!(session.is_playing());

        session.handle_event(MediaEvent::Paused);
        assert_eq!(*session.state(), SessionState::Paused);
    }

    #[test]
    fn metadata_merges_tracks_and_activates_the_first() {
        let (mut session, mut receiver) = attached_session(item_with_subtitle());
        drain(&mut receiver);

        session.handle_event(MediaEvent::MetadataLoaded {
            duration_secs: 120.0,
            embedded_tracks: vec![
                SubtitleTrack::new("en", "English"),
                SubtitleTrack::new("en", "English"),
            ],
        });

        assert_abs_diff_eq!(session.duration_secs(), 120.0);
        assert_eq!(*session.state(), SessionState::Ready);
        assert_eq!(session.tracks().tracks().len(), 2);
        assert_eq!(session.tracks().active(), Some(EXTERNAL_LANG));

        let commands = drain(&mut receiver);
        let showing: Vec<_> = commands
            .iter()
            .filter_map(|command| match command {
                MediaCommand::SetTrackMode {
                    lang,
                    mode: TrackMode::Showing,
                } => Some(lang.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(showing, [EXTERNAL_LANG]);
    }

    #[test]
    fn metadata_without_tracks_activates_nothing() {
        let (mut session, _receiver) = attached_session(item_plain());

        session.handle_event(MediaEvent::MetadataLoaded {
            duration_secs: 60.0,
            embedded_tracks: Vec::new(),
        });

        assert!(session.tracks().is_empty());
        assert_eq!(session.tracks().showing_count(), 0);
    }

    #[test]
    fn selecting_a_subtitle_is_exclusive() {
        let (mut session, mut receiver) = attached_session(item_with_subtitle());
        session.handle_event(MediaEvent::MetadataLoaded {
            duration_secs: 60.0,
            embedded_tracks: vec![SubtitleTrack::new("en", "English")],
        });
        drain(&mut receiver);

        let feedback = session.set_active_subtitle(Some("en"));

        assert_eq!(feedback, Feedback::SubtitleChanged(Some("en".into())));
        assert_eq!(session.tracks().showing_count(), 1);

        let feedback = session.set_active_subtitle(None);
        assert_eq!(feedback, Feedback::SubtitleChanged(None));
        assert_eq!(session.tracks().showing_count(), 0);
    }

    #[test]
    fn volume_and_rate_mirror_backend_events() {
        let (mut session, _receiver) = attached_session(item_plain());

        session.handle_event(MediaEvent::VolumeChanged {
            volume: 0.4,
            muted: false,
        });
        assert_abs_diff_eq!(session.volume().value(), 0.4);
        assert!(!session.is_muted());

        session.handle_event(MediaEvent::VolumeChanged {
            volume: 0.0,
            muted: true,
        });
        assert!(session.is_muted());
        assert!(session.volume().is_muted());

        session.handle_event(MediaEvent::RateChanged { rate: 1.5 });
        assert_abs_diff_eq!(session.rate().value(), 1.5);
    }

    #[test]
    fn set_volume_requests_mute_exactly_at_zero() {
        let (mut session, mut receiver) = attached_session(item_plain());
        drain(&mut receiver);

        session.set_volume(Volume::new(0.0));
        assert!(drain(&mut receiver).contains(&MediaCommand::SetMuted(true)));

        session.set_volume(Volume::new(0.7));
        assert!(drain(&mut receiver).contains(&MediaCommand::SetMuted(false)));
    }

    #[test]
    fn time_updates_are_ignored_while_dragging() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::DurationChanged {
            duration_secs: 100.0,
        });

        let effect = session.handle_event(MediaEvent::TimeUpdate { position_secs: 10.0 });
        assert_eq!(effect, Effect::PositionChanged(10.0));
        assert_abs_diff_eq!(session.position_secs(), 10.0);

        session.seek_bar_mut().begin_drag(50.0);
        let effect = session.handle_event(MediaEvent::TimeUpdate { position_secs: 20.0 });
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(session.position_secs(), 10.0);
    }

    #[test]
    fn commit_seek_sends_single_clamped_seek() {
        let (mut session, mut receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::DurationChanged {
            duration_secs: 100.0,
        });
        drain(&mut receiver);

        session.seek_bar_mut().begin_drag(40.0);
        session.seek_bar_mut().drag_to(500.0);
        let feedback = session.commit_seek().expect("committed");

        assert_eq!(feedback, Feedback::JumpedTo(100.0));
        let commands = drain(&mut receiver);
        assert_eq!(
            commands,
            vec![MediaCommand::Seek {
                target_secs: 100.0
            }]
        );
        assert!(session.commit_seek().is_none());
    }

    #[test]
    fn skip_clamps_to_stream_bounds() {
        let (mut session, mut receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::DurationChanged {
            duration_secs: 100.0,
        });
        session.handle_event(MediaEvent::TimeUpdate { position_secs: 2.0 });
        drain(&mut receiver);

        session.skip(-5.0);
        assert_eq!(
            drain(&mut receiver),
            vec![MediaCommand::Seek { target_secs: 0.0 }]
        );

        session.handle_event(MediaEvent::TimeUpdate { position_secs: 98.0 });
        session.skip(5.0);
        assert_eq!(
            drain(&mut receiver),
            vec![MediaCommand::Seek {
                target_secs: 100.0
            }]
        );
    }

    #[test]
    fn waiting_and_resumed_flip_only_the_stall_flag() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::Playing);

        session.handle_event(MediaEvent::Waiting);
        assert!(session.is_loading());
        assert!(session.is_playing());

        session.handle_event(MediaEvent::Resumed);
        assert!(!session.is_loading());

        // The pair may alternate arbitrarily.
        session.handle_event(MediaEvent::Waiting);
        session.handle_event(MediaEvent::Resumed);
        assert!(!session.is_loading());
        assert!(session.is_playing());
    }

    #[test]
    fn failure_is_terminal_for_the_item() {
        let (mut session, _receiver) = attached_session(item_plain());

        let effect = session.handle_event(MediaEvent::Failed {
            message: "decode error".into(),
        });

        assert_eq!(effect, Effect::Failed("decode error".into()));
        assert!(matches!(session.state(), SessionState::Failed(_)));
        assert!(!session.is_loading());
    }

    #[test]
    fn ended_reports_upward() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::Playing);

        let effect = session.handle_event(MediaEvent::Ended);
        assert_eq!(effect, Effect::Ended);
    }

    #[test]
    fn toggle_play_requests_the_opposite_state() {
        let (mut session, mut receiver) = attached_session(item_plain());
        drain(&mut receiver);

        session.toggle_play();
        assert_eq!(drain(&mut receiver), vec![MediaCommand::Play]);

        session.handle_event(MediaEvent::Playing);
        session.toggle_play();
        assert_eq!(drain(&mut receiver), vec![MediaCommand::Pause]);
    }

    #[test]
    fn loop_and_theater_mirror_locally() {
        let (mut session, mut receiver) = attached_session(item_plain());
        drain(&mut receiver);

        assert_eq!(session.toggle_loop(), Feedback::LoopChanged(true));
        assert!(session.is_looping());
        assert_eq!(drain(&mut receiver), vec![MediaCommand::SetLoop(true)]);

        assert_eq!(session.toggle_theater(), Feedback::TheaterChanged(true));
        assert!(session.is_theater());
        // Theater mode never reaches the backend.
        assert!(drain(&mut receiver).is_empty());
    }

    #[test]
    fn fullscreen_and_pip_wait_for_backend_confirmation() {
        let (mut session, mut receiver) = attached_session(item_plain());
        drain(&mut receiver);

        session.toggle_fullscreen();
        assert!(!session.is_fullscreen());
        assert_eq!(drain(&mut receiver), vec![MediaCommand::EnterFullscreen]);

        session.handle_event(MediaEvent::FullscreenChanged { fullscreen: true });
        assert!(session.is_fullscreen());

        session.toggle_picture_in_picture();
        assert_eq!(
            drain(&mut receiver),
            vec![MediaCommand::EnterPictureInPicture]
        );
        let effect = session.handle_event(MediaEvent::PictureInPictureFailed);
        assert_eq!(effect, Effect::PictureInPictureFailed);
    }

    #[test]
    fn controls_always_visible_while_paused() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::Paused);
        session.pointer_left();

        let later = Instant::now() + Duration::from_secs(60);
        assert!(session.controls_visible_at(later));
    }

    #[test]
    fn controls_hide_after_timeout_while_playing() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::Playing);
        session.touch_pointer();

        let now = Instant::now();
        assert!(session.controls_visible_at(now));
        assert!(!session.controls_visible_at(now + HIDE_TIMEOUT + Duration::from_millis(1)));

        // Pointer movement restores visibility.
        session.touch_pointer();
        assert!(session.controls_visible_at(Instant::now()));
    }

    #[test]
    fn pointer_leaving_hides_controls_while_playing() {
        let (mut session, _receiver) = attached_session(item_plain());
        session.handle_event(MediaEvent::Playing);
        session.pointer_left();
        assert!(!session.controls_visible_at(Instant::now()));
    }
}
