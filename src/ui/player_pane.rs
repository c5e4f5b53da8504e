// SPDX-License-Identifier: MPL-2.0
//! The player pane: video surface, overlays, and the control bar.
//!
//! The surface itself is a black placeholder the playback backend
//! renders into; everything stacked on top belongs to this crate. The
//! title bar and control bar follow the controls-visibility clock; the
//! spinner tracks the loading/stall flag; the large center play button
//! shows whenever playback is paused and nothing is loading.

use crate::player::{PlayerSession, SessionState};
use crate::ui::notifications::{toast_view, Notification};
use crate::ui::{controls, icons};
use iced::widget::{button, container, row, stack, text, Space};
use iced::{Alignment, Color, Element, Length};

/// Renders the pane for an active session, with the pending toast (if
/// any) floating near the bottom.
pub fn view<'a>(
    session: &'a PlayerSession,
    notification: Option<&'a Notification>,
) -> Element<'a, controls::Message> {
    let controls_visible = session.controls_visible();

    let surface = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::BLACK.into()),
            ..container::Style::default()
        });

    let mut layers = stack![surface];

    // Title overlay, top edge.
    if controls_visible {
        layers = layers.push(
            container(
                text(session.item().title.clone())
                    .size(16)
                    .color(Color::WHITE),
            )
            .width(Length::Fill)
            .padding(12)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
                ..container::Style::default()
            }),
        );
    }

    // Center overlay: spinner while loading, large play button while
    // paused, nothing while playing.
    if session.is_loading() {
        layers = layers.push(center(
            container(text("Loading...").size(14).color(Color::WHITE))
                .padding([8, 16])
                .style(|_theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                    border: iced::Border::default().rounded(8.0),
                    ..container::Style::default()
                })
                .into(),
        ));
    } else if !session.is_playing() && !matches!(session.state(), SessionState::Failed(_)) {
        layers = layers.push(center(
            button(icons::sized(icons::play(), 40.0))
                .on_press(controls::Message::TogglePlayback)
                .padding(16)
                .style(|theme, status| {
                    let mut style = iced::widget::button::text(theme, status);
                    style.background = Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into());
                    style.border = iced::Border::default().rounded(50.0);
                    style
                })
                .into(),
        ));
    }

    // Control bar, bottom edge.
    if controls_visible {
        layers = layers.push(
            container(controls::view(session))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Alignment::End),
        );
    }

    // Toast, floating above the control bar.
    if let Some(notification) = notification {
        layers = layers.push(
            container(row![
                Space::new().width(Length::Fill),
                toast_view(notification),
                Space::new().width(Length::Fill),
            ])
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Alignment::End)
            .padding(iced::Padding {
                top: 0.0,
                right: 0.0,
                bottom: 90.0,
                left: 0.0,
            }),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn center<'a>(
    content: Element<'a, controls::Message>,
) -> Element<'a, controls::Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
