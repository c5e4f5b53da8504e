// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application shell.
//!
//! Control operations run against the live session and fold the
//! returned feedback into toasts; sidebar operations mutate the
//! persisted lists and write them back to the store; backend events are
//! forwarded to the session and their effects (history progress,
//! playlist advance, errors) handled here.

use super::{App, Message};
use crate::player::progress::format_time;
use crate::player::{Effect, Feedback, MediaEvent, Volume};
use crate::ui::notifications::Icon;
use crate::ui::sidebar;
use crate::ui::{controls, seek_bar};
use iced::{keyboard, mouse, Task};

impl App {
    // ----- control bar -----

    pub(super) fn handle_controls(&mut self, message: controls::Message) -> Task<Message> {
        let seek_step = self.config.seek_step_secs();
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };

        let feedback = match message {
            controls::Message::TogglePlayback => {
                session.toggle_play();
                None
            }
            controls::Message::SkipBack => Some(session.skip(-seek_step)),
            controls::Message::SkipForward => Some(session.skip(seek_step)),
            controls::Message::ToggleMute => Some(session.toggle_mute()),
            // Volume slider: no toast, the slider itself is feedback.
            controls::Message::SetVolume(volume) => {
                session.set_volume(Volume::new(volume));
                None
            }
            controls::Message::ToggleLoop => Some(session.toggle_loop()),
            controls::Message::SetRate(rate) => Some(session.set_rate(rate)),
            controls::Message::SelectSubtitle(lang) => {
                Some(session.set_active_subtitle(lang.as_deref()))
            }
            controls::Message::ToggleSubtitles => {
                let target = if session.tracks().active().is_some() {
                    None
                } else {
                    session.tracks().first().map(|track| track.lang.clone())
                };
                Some(session.set_active_subtitle(target.as_deref()))
            }
            controls::Message::ToggleSettingsMenu => {
                session.toggle_settings_menu();
                None
            }
            controls::Message::ToggleTheater => Some(session.toggle_theater()),
            controls::Message::TogglePictureInPicture => {
                session.toggle_picture_in_picture();
                None
            }
            controls::Message::ToggleFullscreen => {
                session.toggle_fullscreen();
                None
            }
            controls::Message::SeekBar(bar_message) => {
                return self.handle_seek_bar(bar_message);
            }
        };

        if let Some(feedback) = feedback {
            self.notify_feedback(feedback);
        }
        Task::none()
    }

    fn handle_seek_bar(&mut self, message: seek_bar::Message) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };
        match message {
            seek_bar::Message::Pressed(time_secs) => {
                session.seek_bar_mut().clear_hover();
                session.seek_bar_mut().begin_drag(time_secs);
            }
            seek_bar::Message::Dragged(time_secs) => {
                session.seek_bar_mut().drag_to(time_secs);
            }
            seek_bar::Message::Released => {
                if let Some(feedback) = session.commit_seek() {
                    self.notify_feedback(feedback);
                }
            }
            seek_bar::Message::Hovered { time_secs, x } => {
                session.seek_bar_mut().hover_preview(time_secs, x);
            }
            seek_bar::Message::HoverCleared => {
                session.seek_bar_mut().clear_hover();
            }
        }
        Task::none()
    }

    // ----- sidebar -----

    pub(super) fn handle_sidebar(&mut self, message: sidebar::Message) -> Task<Message> {
        match message {
            sidebar::Message::TabSelected(tab) => {
                self.tab = tab;
            }
            sidebar::Message::FormUrlChanged(url) => {
                self.add_form.url = url;
            }
            sidebar::Message::FormSubtitleChanged(url) => {
                self.add_form.subtitle_url = url;
            }
            sidebar::Message::FormTitleChanged(title) => {
                self.add_form.title = title;
            }
            sidebar::Message::FormSubmitted => {
                if self.add_form.url.trim().is_empty() {
                    self.notifications
                        .notify("The video URL must not be empty", Icon::Error);
                    return Task::none();
                }
                let form = self.add_form.take();
                let item =
                    crate::playlist::PlaylistItem::new(form.url, form.subtitle_url, form.title);
                self.playlist.push(item.clone());
                self.persist_playlist();
                self.notifications.notify("Added to queue", Icon::Plus);
                // The first item added while idle starts playing.
                if self.session.is_none() {
                    self.play_item(item);
                }
            }
            sidebar::Message::PlayItem(id) => {
                if let Some(item) = self.playlist.get(id).cloned() {
                    self.play_item(item);
                }
            }
            sidebar::Message::RemoveItem(id) => {
                // The current item is a separate pointer; removing its
                // queue entry does not interrupt playback.
                if self.playlist.remove(id).is_some() {
                    self.persist_playlist();
                    self.notifications.notify("Removed from queue", Icon::Trash);
                }
            }
            sidebar::Message::ClearPlaylist => {
                self.playlist.clear();
                self.persist_playlist();
                self.notifications.notify("Playlist cleared", Icon::Trash);
            }
            sidebar::Message::PlayHistoryEntry(id) => {
                self.play_from_history(id);
            }
            sidebar::Message::ClearHistory => {
                self.history.clear();
                self.persist_history();
                self.notifications.notify("History cleared", Icon::Trash);
            }
        }
        Task::none()
    }

    /// Plays a history entry, preferring the live playlist copy when the
    /// URL is still queued so in-playlist edits are respected.
    fn play_from_history(&mut self, id: uuid::Uuid) {
        let Some(entry) = self.history.get(id).cloned() else {
            return;
        };
        let item = self
            .playlist
            .find_by_url(&entry.url)
            .cloned()
            .unwrap_or_else(|| entry.to_item());

        let resume_hint = self.history.resume_position(&entry.url);
        self.play_item(item);
        if let Some(resume_secs) = resume_hint {
            self.notifications.notify(
                format!("Resuming from {}", format_time(resume_secs)),
                Icon::History,
            );
        }
    }

    // ----- backend events -----

    pub(super) fn handle_media_event(&mut self, event: MediaEvent) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            // Events for a torn-down session are stale; drop them.
            return Task::none();
        };

        match session.handle_event(event) {
            Effect::None => {}
            Effect::PositionChanged(position_secs) => {
                let url = session.url().to_string();
                // Write-suppressed: only persisted when the position
                // moved past the configured threshold.
                if self.history.record_position(&url, position_secs) {
                    self.persist_history();
                }
            }
            Effect::Ended => self.handle_playback_ended(),
            Effect::Failed(message) => {
                tracing::error!(%message, "resource failed for the current item");
                self.global_error =
                    Some("Could not load the video. Check the URL or your connection.".to_string());
            }
            Effect::PictureInPictureFailed => {
                self.notifications
                    .notify("Picture-in-picture is unavailable", Icon::Error);
            }
        }
        Task::none()
    }

    /// Advances the playlist when the stream finishes: the entry after
    /// the current URL plays next; past the end, playback stops with a
    /// completion toast.
    fn handle_playback_ended(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let current_url = session.url().to_string();

        match self.playlist.next_after(&current_url).cloned() {
            Some(next) => {
                self.notifications
                    .notify(format!("Up next: {}", next.title), Icon::Play);
                self.play_item(next);
            }
            None => {
                self.notifications.notify("Playlist finished", Icon::Check);
            }
        }
    }

    // ----- keyboard and pointer -----

    pub(super) fn handle_raw_event(&mut self, event: &iced::Event) -> Task<Message> {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if modifiers.command() || modifiers.alt() {
                    return Task::none();
                }
                self.handle_key(key)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(session) = self.session.as_mut() {
                    session.touch_pointer();
                }
                Task::none()
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if let Some(session) = self.session.as_mut() {
                    session.pointer_left();
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    /// The shortcut table. Only reached for key presses no widget
    /// captured, so typing in a text input never triggers shortcuts.
    fn handle_key(&mut self, key: &keyboard::Key) -> Task<Message> {
        use keyboard::key::Named;

        if self.session.is_none() {
            return Task::none();
        }

        match key {
            keyboard::Key::Named(Named::Space) => self.handle_controls(controls::Message::TogglePlayback),
            keyboard::Key::Named(Named::ArrowRight) => {
                self.handle_controls(controls::Message::SkipForward)
            }
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.handle_controls(controls::Message::SkipBack)
            }
            keyboard::Key::Named(Named::ArrowUp) => self.step_volume(true),
            keyboard::Key::Named(Named::ArrowDown) => self.step_volume(false),
            keyboard::Key::Character(c) => match c.as_str() {
                "k" | "K" => self.handle_controls(controls::Message::TogglePlayback),
                "m" | "M" => self.handle_controls(controls::Message::ToggleMute),
                "f" | "F" => self.handle_controls(controls::Message::ToggleFullscreen),
                "p" | "P" => self.handle_controls(controls::Message::TogglePictureInPicture),
                "t" | "T" => self.handle_controls(controls::Message::ToggleTheater),
                "l" | "L" => self.handle_controls(controls::Message::SkipForward),
                "j" | "J" => self.handle_controls(controls::Message::SkipBack),
                digit @ ("0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
                    self.seek_to_percent(digit)
                }
                _ => Task::none(),
            },
            _ => Task::none(),
        }
    }

    /// Digit shortcut: absolute seek to digit x 10% of the duration.
    fn seek_to_percent(&mut self, digit: &str) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };
        if session.duration_secs() <= 0.0 {
            return Task::none();
        }
        let tenths: f64 = digit.parse().unwrap_or(0.0);
        let target = session.duration_secs() * tenths / 10.0;
        let feedback = session.seek_to(target);
        self.notify_feedback(feedback);
        Task::none()
    }

    /// Arrow-key volume step: up unmutes, down mutes when it reaches
    /// zero. Both toast the new level.
    fn step_volume(&mut self, up: bool) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };
        let volume = if up {
            session.volume().increase()
        } else {
            session.volume().decrease()
        };
        session.set_volume(volume);
        let icon = if volume.is_muted() {
            Icon::VolumeOff
        } else {
            Icon::VolumeOn
        };
        self.notifications
            .notify(format!("Volume {}%", volume.percent()), icon);
        Task::none()
    }

    // ----- toasts -----

    /// Maps control feedback to its toast.
    fn notify_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Muted(true) => self.notifications.notify("Muted", Icon::VolumeOff),
            Feedback::Muted(false) => self.notifications.notify("Unmuted", Icon::VolumeOn),
            Feedback::VolumeChanged(volume) => {
                let icon = if volume.is_muted() {
                    Icon::VolumeOff
                } else {
                    Icon::VolumeOn
                };
                self.notifications
                    .notify(format!("Volume {}%", volume.percent()), icon);
            }
            Feedback::RateChanged(rate) => {
                self.notifications
                    .notify(format!("Speed {}", rate.label()), Icon::Settings);
            }
            Feedback::LoopChanged(true) => self.notifications.notify("Loop on", Icon::Repeat),
            Feedback::LoopChanged(false) => self.notifications.notify("Loop off", Icon::Repeat),
            Feedback::Skipped(delta_secs) => {
                let (text, icon) = if delta_secs >= 0.0 {
                    (format!("+{} s", delta_secs.round()), Icon::SkipForward)
                } else {
                    (format!("\u{2212}{} s", delta_secs.abs().round()), Icon::SkipBack)
                };
                self.notifications.notify(text, icon);
            }
            Feedback::JumpedTo(target_secs) => {
                self.notifications
                    .notify(format!("Jumped to {}", format_time(target_secs)), Icon::Clock);
            }
            Feedback::TheaterChanged(true) => {
                self.notifications.notify("Theater mode on", Icon::Theater);
            }
            Feedback::TheaterChanged(false) => {
                self.notifications.notify("Theater mode off", Icon::Theater);
            }
            Feedback::SubtitleChanged(Some(lang)) => {
                self.notifications
                    .notify(format!("Subtitles ({lang}) on"), Icon::Captions);
            }
            Feedback::SubtitleChanged(None) => {
                self.notifications.notify("Subtitles off", Icon::Captions);
            }
        }
    }
}
