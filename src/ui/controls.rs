// SPDX-License-Identifier: MPL-2.0
//! Playback control bar.
//!
//! Seek bar on top, transport and mode toggles below: skip/play/skip,
//! mute + volume slider, time display on the left; loop, settings menu
//! (rate + subtitle selection), captions quick-toggle, theater,
//! picture-in-picture, and fullscreen on the right.

use crate::player::progress::format_time;
use crate::player::{PlaybackRate, PlayerSession};
use crate::ui::seek_bar::{self, SeekBarProgram};
use crate::ui::{icons, theme};
use iced::widget::svg::Svg;
use iced::widget::{button, container, row, slider, text, tooltip, Column, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

const ICON_SIZE: f32 = 18.0;

/// Messages emitted by the control bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    SkipBack,
    SkipForward,
    ToggleMute,
    SetVolume(f32),
    ToggleLoop,
    SetRate(PlaybackRate),
    SelectSubtitle(Option<String>),
    /// Captions button: first track on, or everything off.
    ToggleSubtitles,
    ToggleSettingsMenu,
    ToggleTheater,
    TogglePictureInPicture,
    ToggleFullscreen,
    SeekBar(seek_bar::Message),
}

/// Renders the control bar for the active session.
pub fn view(session: &PlayerSession) -> Element<'_, Message> {
    let timeline = seek_bar::view(SeekBarProgram {
        position_secs: session.seek_bar().display_position(session.position_secs()),
        duration_secs: session.duration_secs(),
        buffered_secs: session.buffered_secs(),
        seeking: session.seek_bar().is_seeking(),
    })
    .map(Message::SeekBar);

    // Floating time label while hovering the bar.
    let hover_label: Element<'_, Message> = match session.seek_bar().hover() {
        Some(preview) => row![
            Space::new().width(Length::Fixed((preview.x - 20.0).max(0.0))),
            container(text(preview.label.clone()).size(12).color(Color::WHITE))
                .padding([2, 6])
                .style(|_theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
                    border: iced::Border::default().rounded(4.0),
                    ..container::Style::default()
                }),
        ]
        .into(),
        None => Space::new().height(Length::Fixed(0.0)).into(),
    };

    let skip_back = icon_button(icons::chevron_left(), false, Message::SkipBack, "Back 5 s");
    let play_pause = if session.is_playing() {
        icon_button(icons::pause(), false, Message::TogglePlayback, "Pause")
    } else {
        icon_button(icons::play(), false, Message::TogglePlayback, "Play")
    };
    let skip_forward = icon_button(
        icons::chevron_right(),
        false,
        Message::SkipForward,
        "Forward 5 s",
    );

    let muted = session.is_muted() || session.volume().is_muted();
    let volume_button = if muted {
        icon_button(icons::volume_mute(), true, Message::ToggleMute, "Unmute")
    } else {
        icon_button(icons::volume(), false, Message::ToggleMute, "Mute")
    };
    let volume_value = if muted { 0.0 } else { session.volume().value() };
    let volume_slider = slider(0.0..=1.0, volume_value, Message::SetVolume)
        .width(Length::Fixed(80.0))
        .step(0.01);

    let time_display = text(format!(
        "{} / {}",
        format_time(session.seek_bar().display_position(session.position_secs())),
        format_time(session.duration_secs())
    ))
    .size(13)
    .color(Color::WHITE);

    let left: Row<'_, Message> = row![
        skip_back,
        play_pause,
        skip_forward,
        volume_button,
        volume_slider,
        time_display,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let loop_button = icon_button(
        icons::repeat(),
        session.is_looping(),
        Message::ToggleLoop,
        "Loop",
    );
    let settings_button = icon_button(
        icons::settings(),
        session.settings_menu_open(),
        Message::ToggleSettingsMenu,
        "Settings",
    );
    let theater_button = icon_button(
        if session.is_theater() {
            icons::monitor_play()
        } else {
            icons::theater()
        },
        session.is_theater(),
        Message::ToggleTheater,
        "Theater mode",
    );
    let pip_button = icon_button(
        icons::picture_in_picture(),
        false,
        Message::TogglePictureInPicture,
        "Picture-in-picture",
    );
    let fullscreen_button = if session.is_fullscreen() {
        icon_button(
            icons::minimize(),
            false,
            Message::ToggleFullscreen,
            "Exit fullscreen",
        )
    } else {
        icon_button(
            icons::maximize(),
            false,
            Message::ToggleFullscreen,
            "Fullscreen",
        )
    };

    let mut right: Row<'_, Message> = row![loop_button, settings_button]
        .spacing(8)
        .align_y(Alignment::Center);
    if !session.tracks().is_empty() {
        right = right.push(icon_button(
            icons::captions(),
            session.tracks().active().is_some(),
            Message::ToggleSubtitles,
            "Subtitles",
        ));
    }
    right = right
        .push(theater_button)
        .push(pip_button)
        .push(fullscreen_button);

    let controls_row: Row<'_, Message> = row![left, Space::new().width(Length::Fill), right]
        .spacing(12)
        .align_y(Alignment::Center);

    let mut bar: Column<'_, Message> = Column::new().spacing(4);
    if session.settings_menu_open() {
        bar = bar.push(settings_menu(session));
    }
    bar = bar.push(hover_label).push(timeline).push(controls_row);

    container(bar)
        .width(Length::Fill)
        .padding([8, 12])
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.65).into()),
            ..container::Style::default()
        })
        .into()
}

/// The settings popup: rate menu plus subtitle selection.
fn settings_menu(session: &PlayerSession) -> Element<'_, Message> {
    let mut menu: Column<'_, Message> = Column::new().spacing(2);

    menu = menu.push(text("Speed").size(11).color(Color::from_rgb(0.6, 0.6, 0.6)));
    for rate in PlaybackRate::presets() {
        let selected = rate == session.rate();
        menu = menu.push(menu_entry(rate.label(), selected, Message::SetRate(rate)));
    }

    if !session.tracks().is_empty() {
        menu = menu.push(
            text("Subtitles")
                .size(11)
                .color(Color::from_rgb(0.6, 0.6, 0.6)),
        );
        menu = menu.push(menu_entry(
            "Off".to_string(),
            session.tracks().active().is_none(),
            Message::SelectSubtitle(None),
        ));
        for track in session.tracks().tracks() {
            let selected = session.tracks().active() == Some(track.lang.as_str());
            menu = menu.push(menu_entry(
                track.label.clone(),
                selected,
                Message::SelectSubtitle(Some(track.lang.clone())),
            ));
        }
    }

    row![
        Space::new().width(Length::Fill),
        container(menu.width(Length::Fixed(160.0)))
            .padding(8)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.05, 0.05, 0.08, 0.92).into()),
                border: iced::Border::default().rounded(8.0),
                ..container::Style::default()
            }),
    ]
    .into()
}

fn menu_entry(label: String, selected: bool, message: Message) -> Element<'static, Message> {
    let color = if selected {
        theme::ACCENT
    } else {
        Color::WHITE
    };
    let mut entry: Row<'static, Message> = row![text(label).size(13).color(color)]
        .spacing(6)
        .align_y(Alignment::Center);
    if selected {
        entry = entry.push(icons::sized(icons::check(), 14.0));
    }
    button(entry)
        .on_press(message)
        .padding([2, 8])
        .width(Length::Fill)
        .style(button::text)
        .into()
}

fn icon_button(
    icon: Svg<'static>,
    active: bool,
    message: Message,
    tip: &'static str,
) -> Element<'static, Message> {
    let base = button(icons::sized(icon, ICON_SIZE))
        .on_press(message)
        .padding(6)
        .style(move |theme, status| {
            let mut style = button::text(theme, status);
            if active {
                style.background = Some(Color::from_rgba(1.0, 1.0, 1.0, 0.18).into());
                style.border = iced::Border::default().rounded(6.0);
            }
            style
        });

    tooltip(base, Text::new(tip).size(12), tooltip::Position::Top)
        .gap(4)
        .into()
}
