// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the current-item pointer, the persisted
//! playlist/history/theme, the live playback session, and the toast
//! channel, and translates messages into side effects like store writes
//! or backend commands. Policy decisions (what auto-plays, how history
//! is folded, when toasts fire) stay close to the update loop so
//! user-facing behavior is easy to audit.

pub mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::player::PlayerSession;
use crate::playlist::{History, Playlist, PlaylistItem};
use crate::storage::{keys, Store};
use crate::ui::notifications::{Channel, Icon};
use crate::ui::sidebar::{AddForm, Tab};
use crate::ui::theme::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub use crate::config::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};

/// Root Iced application state bridging the player, the persisted
/// lists, and the UI components.
pub struct App {
    config: Config,
    store: Store,
    theme_mode: ThemeMode,
    /// Active sidebar tab; ephemeral.
    tab: Tab,
    add_form: AddForm,
    start_url: String,
    start_subtitle_url: String,
    playlist: Playlist,
    history: History,
    /// The live session for the current item; `None` means idle.
    session: Option<PlayerSession>,
    /// Fatal-for-the-current-item error banner.
    global_error: Option<String>,
    notifications: Channel,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("playlist_len", &self.playlist.len())
            .field("history_len", &self.history.len())
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait while
    // only consuming them once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_store(Config::default(), Store::open())
    }
}

impl App {
    /// Initializes application state from the store and config, and
    /// optionally queues a startup URL from `Flags`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_store(config, Store::open());

        if let Some(warning) = config_warning {
            app.notifications.notify(warning, Icon::Error);
        }

        if let Some(url) = flags.url {
            app.play_url_immediately(url, flags.subtitle_url.unwrap_or_default());
        }

        (app, Task::none())
    }

    /// Builds an `App` over an explicit store and config. Also the
    /// entry point for tests, which pass a store rooted in a temp dir.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let theme_mode = ThemeMode::from_is_dark(store.read(keys::THEME, true));
        let playlist = Playlist::from_items(store.read(keys::PLAYLIST, Vec::new()));
        let history = History::from_entries(
            store.read(keys::HISTORY, Vec::new()),
            config.history_cap(),
            config.history_write_threshold_secs(),
        );
        let notifications = Channel::new(config.notification_duration());

        Self {
            config,
            store,
            theme_mode,
            tab: Tab::default(),
            add_form: AddForm::default(),
            start_url: String::new(),
            start_subtitle_url: String::new(),
            playlist,
            history,
            session: None,
            global_error: None,
            notifications,
        }
    }

    // ----- accessors used by the view and tests -----

    #[must_use]
    pub fn session(&self) -> Option<&PlayerSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_deref()
    }

    #[must_use]
    pub fn notifications(&self) -> &Channel {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    fn title(&self) -> String {
        match &self.session {
            Some(session) => format!("{} - IcedCue", session.item().title),
            None => "IcedCue".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.session.is_some(), self.notifications.has_notification())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(controls_message) => self.handle_controls(controls_message),
            Message::Sidebar(sidebar_message) => self.handle_sidebar(sidebar_message),
            Message::Media(event) => self.handle_media_event(event),
            Message::StartUrlChanged(url) => {
                self.start_url = url;
                Task::none()
            }
            Message::StartSubtitleChanged(url) => {
                self.start_subtitle_url = url;
                Task::none()
            }
            Message::StartSubmitted => {
                let url = std::mem::take(&mut self.start_url);
                let subtitle_url = std::mem::take(&mut self.start_subtitle_url);
                if !url.trim().is_empty() {
                    self.play_url_immediately(url, subtitle_url);
                }
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.store.write(keys::THEME, &self.theme_mode.is_dark());
                Task::none()
            }
            Message::DismissError => {
                self.global_error = None;
                Task::none()
            }
            Message::Tick(_instant) => {
                // Toast expiry; the view re-derives control visibility
                // from the clock on each repaint.
                self.notifications.tick();
                Task::none()
            }
            Message::RawEvent { window: _, event } => self.handle_raw_event(&event),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Submits a URL for immediate playback: front of the queue
    /// (deduplicated by URL), then play.
    fn play_url_immediately(&mut self, url: String, subtitle_url: String) {
        let item = PlaylistItem::new(url, subtitle_url, crate::playlist::FROM_URL_TITLE);
        self.playlist.push_front_dedup(item.clone());
        self.persist_playlist();
        self.play_item(item);
    }

    /// Switches the current item: folds the play into history, tears
    /// down the previous session, and starts a fresh one keyed by the
    /// item's URL.
    fn play_item(&mut self, item: PlaylistItem) {
        self.global_error = None;
        self.history.record_played(&item);
        self.persist_history();
        // Dropping the previous session detaches its command channel;
        // any events still in flight for the old resource are ignored.
        self.session = Some(PlayerSession::new(
            item,
            self.config.controls_hide_timeout(),
        ));
    }

    fn persist_playlist(&self) {
        self.store.write(keys::PLAYLIST, &self.playlist.items());
    }

    fn persist_history(&self) {
        self.store.write(keys::HISTORY, &self.history.entries());
    }
}
