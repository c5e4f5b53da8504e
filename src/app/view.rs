// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: header, player column, sidebar.

use super::{App, Message};
use crate::ui::notifications::toast_view;
use crate::ui::sidebar;
use crate::ui::theme::ACCENT;
use crate::ui::{icons, player_pane};
use iced::widget::{button, column, container, row, text, text_input, Column, Row, Space};
use iced::{Alignment, Color, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let header: Row<'_, Message> = row![
        icons::sized(icons::monitor_play(), 24.0),
        text("IcedCue").size(20).color(ACCENT),
        Space::new().width(Length::Fill),
        button(text(app.theme_mode.toggle_label()).size(13))
            .on_press(Message::ToggleTheme)
            .padding([6, 12]),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut main: Column<'_, Message> = Column::new().spacing(12);

    if let Some(error) = app.global_error() {
        main = main.push(error_banner(error));
    }

    let theater = app
        .session()
        .map(|session| session.is_theater())
        .unwrap_or(false);

    let player: Element<'_, Message> = match app.session() {
        Some(session) => {
            let pane = player_pane::view(session, app.notifications.current())
                .map(Message::Controls);
            let height = if theater {
                Length::Fill
            } else {
                Length::Fixed(500.0)
            };
            container(pane).width(Length::Fill).height(height).into()
        }
        None => empty_state(app),
    };
    main = main.push(player);

    let mut content: Row<'_, Message> = Row::new().spacing(16);
    content = content.push(main.width(Length::Fill));
    // Theater mode trades the sidebar for a tall player layout.
    if !theater {
        let sidebar = sidebar::view(sidebar::ViewContext {
            tab: app.tab,
            form: &app.add_form,
            playlist: app.playlist(),
            history: app.history(),
            current_url: app.session().map(|session| session.url()),
        })
        .map(Message::Sidebar);
        content = content.push(sidebar);
    }

    column![header, content.height(Length::Fill)]
        .spacing(12)
        .padding(16)
        .into()
}

/// The idle layout: a placeholder surface, the start form, and the
/// pending toast (the player pane usually hosts it).
fn empty_state(app: &App) -> Element<'_, Message> {
    let placeholder = container(
        column![
            icons::sized(icons::film(), 48.0),
            text("Ready to play").size(18).color(Color::WHITE),
            text("Enter a URL below or pick something from the queue.")
                .size(13)
                .color(Color::from_rgb(0.6, 0.6, 0.6)),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(320.0))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(|_theme| container::Style {
        background: Some(Color::BLACK.into()),
        border: iced::Border::default().rounded(12.0),
        ..container::Style::default()
    });

    let form = column![
        text("Start watching").size(16),
        text_input("Video URL...", &app.start_url)
            .on_input(Message::StartUrlChanged)
            .on_submit(Message::StartSubmitted)
            .padding(10),
        text_input("Subtitle URL (.vtt, optional)", &app.start_subtitle_url)
            .on_input(Message::StartSubtitleChanged)
            .on_submit(Message::StartSubmitted)
            .padding(10),
        button(
            row![icons::sized(icons::play(), 16.0), text("Play").size(14)]
                .spacing(8)
                .align_y(Alignment::Center)
        )
        .on_press(Message::StartSubmitted)
        .padding([10, 16])
        .width(Length::Fill),
    ]
    .spacing(10);

    let mut layout = column![placeholder, form].spacing(16);
    if let Some(notification) = app.notifications.current() {
        layout = layout.push(
            row![
                Space::new().width(Length::Fill),
                toast_view(notification),
                Space::new().width(Length::Fill),
            ]
            .align_y(Alignment::Center),
        );
    }
    layout.into()
}

fn error_banner(error: &str) -> Element<'_, Message> {
    container(
        row![
            text(error).size(14).color(Color::from_rgb(0.9, 0.3, 0.3)),
            Space::new().width(Length::Fill),
            button(text("Dismiss").size(12))
                .on_press(Message::DismissError)
                .padding([4, 8])
                .style(button::text),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.9, 0.2, 0.2, 0.12).into()),
        border: iced::Border::default().rounded(8.0),
        ..container::Style::default()
    })
    .into()
}
