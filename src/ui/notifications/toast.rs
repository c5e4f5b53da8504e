// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the pending notification.

use super::notification::Notification;
use crate::ui::icons;
use iced::widget::{container, row, text};
use iced::{Alignment, Color, Element};

/// Renders the toast: icon plus message on a translucent dark pill,
/// readable over both themes.
pub fn view<'a, Message: 'a>(notification: &'a Notification) -> Element<'a, Message> {
    let icon = icons::sized(icons::for_notification(notification.icon()), 18.0);

    container(
        row![icon, text(notification.text()).size(14).color(Color::WHITE)]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding([8, 16])
    .style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.05, 0.05, 0.08, 0.85).into()),
        border: iced::Border::default().rounded(8.0),
        ..container::Style::default()
    })
    .into()
}
