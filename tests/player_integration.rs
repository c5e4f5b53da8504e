// SPDX-License-Identifier: MPL-2.0
//! End-to-end shell scenarios: queueing, auto-play, history folding,
//! playlist advance, and persistence across app instances.

use iced_cue::app::{App, Message};
use iced_cue::config::Config;
use iced_cue::player::media::{command_channel, MediaCommandReceiver};
use iced_cue::player::{MediaCommand, MediaEvent, SubtitleTrack, TrackMode};
use iced_cue::storage::Store;
use iced_cue::ui::controls;
use iced_cue::ui::sidebar;
use tempfile::{tempdir, TempDir};

fn app() -> (App, TempDir) {
    let dir = tempdir().expect("temp dir");
    let store = Store::with_dir(dir.path().to_path_buf());
    (App::with_store(Config::default(), store), dir)
}

fn add_via_form(app: &mut App, url: &str, title: &str) {
    let _ = app.update(Message::Sidebar(sidebar::Message::FormUrlChanged(
        url.to_string(),
    )));
    let _ = app.update(Message::Sidebar(sidebar::Message::FormTitleChanged(
        title.to_string(),
    )));
    let _ = app.update(Message::Sidebar(sidebar::Message::FormSubmitted));
}

/// Attaches a fake backend to the current session and returns the
/// command receiver so tests can observe requests.
fn attach_backend(app: &mut App) -> MediaCommandReceiver {
    let (sender, receiver) = command_channel();
    let _ = app.update(Message::Media(MediaEvent::SurfaceReady(sender)));
    receiver
}

fn drain(receiver: &mut MediaCommandReceiver) -> Vec<MediaCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = receiver.try_recv() {
        commands.push(command);
    }
    commands
}

#[test]
fn adding_to_an_empty_playlist_auto_plays_and_records_history() {
    let (mut app, _dir) = app();

    add_via_form(&mut app, "a.mp4", "A");

    let session = app.session().expect("auto-started session");
    assert_eq!(session.url(), "a.mp4");

    assert_eq!(app.history().len(), 1);
    let entry = &app.history().entries()[0];
    assert_eq!(entry.url, "a.mp4");
    assert_eq!(entry.last_position_secs, 0.0);
}

#[test]
fn adding_while_something_plays_only_queues() {
    let (mut app, _dir) = app();

    add_via_form(&mut app, "a.mp4", "A");
    add_via_form(&mut app, "b.mp4", "B");

    assert_eq!(app.playlist().len(), 2);
    assert_eq!(app.session().map(|s| s.url()), Some("a.mp4"));
    assert_eq!(app.history().len(), 1);
}

#[test]
fn submitting_an_empty_url_is_rejected_with_a_toast() {
    let (mut app, _dir) = app();

    let _ = app.update(Message::Sidebar(sidebar::Message::FormSubmitted));

    assert!(app.playlist().is_empty());
    assert!(app.session().is_none());
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("The video URL must not be empty")
    );
}

#[test]
fn time_updates_past_the_threshold_update_history() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let _receiver = attach_backend(&mut app);

    // Below the 5 s threshold: suppressed.
    let _ = app.update(Message::Media(MediaEvent::TimeUpdate { position_secs: 3.0 }));
    assert_eq!(app.history().entries()[0].last_position_secs, 0.0);

    // Past the threshold: recorded.
    let _ = app.update(Message::Media(MediaEvent::TimeUpdate {
        position_secs: 12.0,
    }));
    assert_eq!(app.history().entries()[0].last_position_secs, 12.0);
}

#[test]
fn removing_the_playing_item_does_not_interrupt_playback() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");

    let id = app.playlist().items()[0].id;
    let _ = app.update(Message::Sidebar(sidebar::Message::RemoveItem(id)));

    assert!(app.playlist().is_empty());
    // The current item is a separate pointer; the session survives.
    assert_eq!(app.session().map(|s| s.url()), Some("a.mp4"));
}

#[test]
fn ended_advances_to_the_next_queued_item() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    add_via_form(&mut app, "b.mp4", "B");

    let _ = app.update(Message::Media(MediaEvent::Ended));

    assert_eq!(app.session().map(|s| s.url()), Some("b.mp4"));
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("Up next: B")
    );
    // Both items are now in history, B most recent.
    assert_eq!(app.history().len(), 2);
    assert_eq!(app.history().entries()[0].url, "b.mp4");
}

#[test]
fn ended_on_the_last_item_fires_a_completion_toast() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");

    let _ = app.update(Message::Media(MediaEvent::Ended));

    // Playback stops on the same item; nothing advanced.
    assert_eq!(app.session().map(|s| s.url()), Some("a.mp4"));
    assert!(!app.session().unwrap().is_playing());
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("Playlist finished")
    );
}

#[test]
fn start_form_dedups_by_url_and_plays_immediately() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    add_via_form(&mut app, "b.mp4", "B");

    let _ = app.update(Message::StartUrlChanged("b.mp4".to_string()));
    let _ = app.update(Message::StartSubmitted);

    // Exactly one entry for the URL, moved to the front.
    let urls: Vec<_> = app
        .playlist()
        .items()
        .iter()
        .map(|item| item.url.as_str())
        .collect();
    assert_eq!(urls, ["b.mp4", "a.mp4"]);
    assert_eq!(app.session().map(|s| s.url()), Some("b.mp4"));
}

#[test]
fn switching_items_replaces_the_session() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let mut receiver = attach_backend(&mut app);
    drain(&mut receiver);

    add_via_form(&mut app, "b.mp4", "B");
    let b_id = app.playlist().items()[1].id;
    let _ = app.update(Message::Sidebar(sidebar::Message::PlayItem(b_id)));

    // Fresh session for the new URL; the old command channel is dead.
    assert_eq!(app.session().map(|s| s.url()), Some("b.mp4"));
    assert!(!app.session().unwrap().has_backend());
    assert!(drain(&mut receiver).is_empty());
}

#[test]
fn playing_from_history_offers_a_resume_hint() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let _receiver = attach_backend(&mut app);
    let _ = app.update(Message::Media(MediaEvent::TimeUpdate {
        position_secs: 30.0,
    }));

    // Move on to something else, then come back through history.
    let _ = app.update(Message::StartUrlChanged("b.mp4".to_string()));
    let _ = app.update(Message::StartSubmitted);
    let entry_id = app
        .history()
        .find_by_url("a.mp4")
        .expect("history entry")
        .id;
    let _ = app.update(Message::Sidebar(sidebar::Message::PlayHistoryEntry(
        entry_id,
    )));

    assert_eq!(app.session().map(|s| s.url()), Some("a.mp4"));
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("Resuming from 00:30")
    );
}

#[test]
fn resource_failure_raises_the_global_error_banner() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");

    let _ = app.update(Message::Media(MediaEvent::Failed {
        message: "404".to_string(),
    }));

    assert!(app.global_error().is_some());

    // Picking another item clears the banner.
    add_via_form(&mut app, "b.mp4", "B");
    let b_id = app.playlist().items()[1].id;
    let _ = app.update(Message::Sidebar(sidebar::Message::PlayItem(b_id)));
    assert!(app.global_error().is_none());
}

#[test]
fn subtitle_selection_stays_exclusive_through_the_shell() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let mut receiver = attach_backend(&mut app);
    let _ = app.update(Message::Media(MediaEvent::MetadataLoaded {
        duration_secs: 100.0,
        embedded_tracks: vec![
            SubtitleTrack::new("en", "English"),
            SubtitleTrack::new("fr", "French"),
        ],
    }));
    drain(&mut receiver);

    let _ = app.update(Message::Controls(controls::Message::SelectSubtitle(Some(
        "fr".to_string(),
    ))));

    let session = app.session().unwrap();
    assert_eq!(session.tracks().active(), Some("fr"));
    assert_eq!(session.tracks().showing_count(), 1);

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
    assert_eq!(showing, ["fr"]);
}

#[test]
fn mute_toggle_requests_and_toasts() {
    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let mut receiver = attach_backend(&mut app);
    drain(&mut receiver);

    let _ = app.update(Message::Controls(controls::Message::ToggleMute));

    assert_eq!(drain(&mut receiver), vec![MediaCommand::SetMuted(true)]);
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("Muted")
    );
}

#[test]
fn keyboard_shortcut_toggles_mute() {
    use iced::keyboard;

    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let mut receiver = attach_backend(&mut app);
    drain(&mut receiver);

    let _ = app.update(Message::RawEvent {
        window: iced::window::Id::unique(),
        event: iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character("m".into()),
            modified_key: keyboard::Key::Character("m".into()),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::KeyM),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }),
    });

    assert_eq!(drain(&mut receiver), vec![MediaCommand::SetMuted(true)]);
}

#[test]
fn digit_shortcut_seeks_to_a_percentage() {
    use iced::keyboard;

    let (mut app, _dir) = app();
    add_via_form(&mut app, "a.mp4", "A");
    let mut receiver = attach_backend(&mut app);
    let _ = app.update(Message::Media(MediaEvent::DurationChanged {
        duration_secs: 200.0,
    }));
    drain(&mut receiver);

    let _ = app.update(Message::RawEvent {
        window: iced::window::Id::unique(),
        event: iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character("9".into()),
            modified_key: keyboard::Key::Character("9".into()),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Digit9),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }),
    });

    assert_eq!(
        drain(&mut receiver),
        vec![MediaCommand::Seek { target_secs: 180.0 }]
    );
    assert_eq!(
        app.notifications().current().map(|n| n.text()),
        Some("Jumped to 03:00")
    );
}

#[test]
fn playlist_history_and_theme_survive_a_restart() {
    let dir = tempdir().expect("temp dir");
    {
        let store = Store::with_dir(dir.path().to_path_buf());
        let mut app = App::with_store(Config::default(), store);
        add_via_form(&mut app, "a.mp4", "A");
        add_via_form(&mut app, "b.mp4", "B");
        let _ = app.update(Message::ToggleTheme);
    }

    let store = Store::with_dir(dir.path().to_path_buf());
    let app = App::with_store(Config::default(), store);

    assert_eq!(app.playlist().len(), 2);
    assert_eq!(app.playlist().items()[0].url, "a.mp4");
    assert_eq!(app.history().len(), 1);
    assert_eq!(app.history().entries()[0].url, "a.mp4");
    // Default theme is dark; the toggle flipped it to light.
    assert!(!app.theme_mode().is_dark());
}

#[test]
fn corrupt_store_files_fall_back_to_empty_state() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("playlist.json"), "{{{{not json").expect("write");
    std::fs::write(dir.path().join("history.json"), "42").expect("write");

    let store = Store::with_dir(dir.path().to_path_buf());
    let app = App::with_store(Config::default(), store);

    assert!(app.playlist().is_empty());
    assert!(app.history().is_empty());
}
