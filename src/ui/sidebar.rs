// SPDX-License-Identifier: MPL-2.0
//! Sidebar with the playlist and history tabs.
//!
//! The playlist tab carries the add-item form and the queue; rows show
//! a drag handle as a visual affordance only (there is no reorder
//! operation). The history tab lists previously played items, newest
//! first, with their resume positions.

use crate::player::progress::format_time;
use crate::playlist::{History, Playlist};
use crate::ui::{icons, theme};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length};
use uuid::Uuid;

/// Active sidebar tab. Ephemeral UI state, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Playlist,
    History,
}

/// Input state for the add-item form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddForm {
    pub url: String,
    pub subtitle_url: String,
    pub title: String,
}

impl AddForm {
    /// Empties the form, returning the previous values.
    pub fn take(&mut self) -> AddForm {
        std::mem::take(self)
    }
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TabSelected(Tab),
    FormUrlChanged(String),
    FormSubtitleChanged(String),
    FormTitleChanged(String),
    FormSubmitted,
    PlayItem(Uuid),
    RemoveItem(Uuid),
    ClearPlaylist,
    PlayHistoryEntry(Uuid),
    ClearHistory,
}

/// Everything the sidebar needs to render.
pub struct ViewContext<'a> {
    pub tab: Tab,
    pub form: &'a AddForm,
    pub playlist: &'a Playlist,
    pub history: &'a History,
    /// URL of the item currently playing, for row highlighting.
    pub current_url: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = row![
        tab_button(
            format!("Playlist ({})", ctx.playlist.len()),
            ctx.tab == Tab::Playlist,
            Message::TabSelected(Tab::Playlist),
        ),
        tab_button(
            format!("History ({})", ctx.history.len()),
            ctx.tab == Tab::History,
            Message::TabSelected(Tab::History),
        ),
    ]
    .spacing(4);

    let body: Element<'_, Message> = match ctx.tab {
        Tab::Playlist => playlist_panel(&ctx),
        Tab::History => history_panel(&ctx),
    };

    container(column![tabs, body].spacing(12))
        .width(Length::Fixed(340.0))
        .height(Length::Fill)
        .padding(16)
        .into()
}

fn playlist_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = column![
        text_input("Video URL...", &ctx.form.url)
            .on_input(Message::FormUrlChanged)
            .on_submit(Message::FormSubmitted)
            .padding(8)
            .size(13),
        text_input("Subtitle URL (.vtt, optional)", &ctx.form.subtitle_url)
            .on_input(Message::FormSubtitleChanged)
            .on_submit(Message::FormSubmitted)
            .padding(8)
            .size(13),
        text_input("Title (optional)", &ctx.form.title)
            .on_input(Message::FormTitleChanged)
            .on_submit(Message::FormSubmitted)
            .padding(8)
            .size(13),
        button(
            row![icons::sized(icons::plus(), 14.0), text("Add to queue").size(13)]
                .spacing(6)
                .align_y(Alignment::Center)
        )
        .on_press(Message::FormSubmitted)
        .padding([8, 12])
        .width(Length::Fill),
    ]
    .spacing(8);

    let mut rows: Column<'_, Message> = Column::new().spacing(4);
    if ctx.playlist.is_empty() {
        rows = rows.push(
            text("The queue is empty.")
                .size(13)
                .width(Length::Fill)
                .center(),
        );
    }
    for item in ctx.playlist.items() {
        let is_current = ctx.current_url == Some(item.url.as_str());
        let title = if is_current {
            text(item.title.clone()).size(13).color(theme::ACCENT)
        } else {
            text(item.title.clone()).size(13)
        };
        let entry: Row<'_, Message> = row![
            button(
                row![
                    icons::sized(icons::grip_vertical(), 14.0),
                    column![title, text(item.url.clone()).size(11)].spacing(2),
                ]
                .spacing(8)
                .align_y(Alignment::Center)
            )
            .on_press(Message::PlayItem(item.id))
            .padding(6)
            .width(Length::Fill)
            .style(button::text),
            button(icons::sized(icons::trash(), 14.0))
                .on_press(Message::RemoveItem(item.id))
                .padding(6)
                .style(button::text),
        ]
        .align_y(Alignment::Center);
        rows = rows.push(entry);
    }

    let mut panel = column![form, scrollable(rows).height(Length::Fill)].spacing(12);
    if !ctx.playlist.is_empty() {
        panel = panel.push(
            button(text("Clear playlist").size(13))
                .on_press(Message::ClearPlaylist)
                .padding([8, 12])
                .width(Length::Fill),
        );
    }
    panel.into()
}

fn history_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows: Column<'_, Message> = Column::new().spacing(4);
    if ctx.history.is_empty() {
        rows = rows.push(
            text("Nothing watched yet.")
                .size(13)
                .width(Length::Fill)
                .center(),
        );
    }
    for entry in ctx.history.entries() {
        let item: Row<'_, Message> = row![
            icons::sized(icons::film(), 16.0),
            column![
                text(entry.title.clone()).size(13),
                text(format!(
                    "Last watched: {}",
                    format_time(entry.last_position_secs)
                ))
                .size(11),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            icons::sized(icons::chevron_right(), 14.0),
        ]
        .spacing(8)
        .align_y(Alignment::Center);
        rows = rows.push(
            button(item)
                .on_press(Message::PlayHistoryEntry(entry.id))
                .padding(6)
                .width(Length::Fill)
                .style(button::text),
        );
    }

    let mut panel = column![scrollable(rows).height(Length::Fill)].spacing(12);
    if !ctx.history.is_empty() {
        panel = panel.push(
            button(text("Clear history").size(13))
                .on_press(Message::ClearHistory)
                .padding([8, 12])
                .width(Length::Fill),
        );
    }
    panel.into()
}

fn tab_button(label: String, active: bool, message: Message) -> Element<'static, Message> {
    let content = if active {
        text(label).size(13).color(theme::ACCENT)
    } else {
        text(label).size(13)
    };
    button(content)
        .on_press(message)
        .padding([6, 10])
        .width(Length::FillPortion(1))
        .style(button::text)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::PlaylistItem;

    #[test]
    fn add_form_take_resets_the_inputs() {
        let mut form = AddForm {
            url: "a.mp4".into(),
            subtitle_url: "a.vtt".into(),
            title: "A".into(),
        };
        let taken = form.take();

        assert_eq!(taken.url, "a.mp4");
        assert_eq!(form, AddForm::default());
    }

    #[test]
    fn view_renders_both_tabs() {
        let mut playlist = Playlist::new();
        playlist.push(PlaylistItem::new("a.mp4", "", "A"));
        let mut history = History::new(20, 5.0);
        history.record_played(&PlaylistItem::new("b.mp4", "", "B"));
        let form = AddForm::default();

        for tab in [Tab::Playlist, Tab::History] {
            let _element = view(ViewContext {
                tab,
                form: &form,
                playlist: &playlist,
                history: &history,
                current_url: Some("a.mp4"),
            });
        }
    }
}
