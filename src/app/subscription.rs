// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and pointer activity arrive through a raw event
//! subscription; a periodic tick drives toast expiry and control
//! auto-hide repaints while anything is on screen that needs them.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn create(has_session: bool, has_notification: bool) -> Subscription<Message> {
    Subscription::batch([
        create_event_subscription(),
        create_tick_subscription(has_session, has_notification),
    ])
}

/// Routes raw window events to the shell. Only events no widget
/// captured are forwarded, so shortcuts stay dead while a text input
/// has focus and the seek bar keeps its drag to itself.
fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match &event {
            iced::Event::Keyboard(..) | iced::Event::Mouse(..) => Some(Message::RawEvent {
                window: window_id,
                event,
            }),
            _ => None,
        }
    })
}

/// Periodic tick for toast expiry and the controls auto-hide clock.
/// Idle with nothing pending, the app stays fully event-driven.
fn create_tick_subscription(has_session: bool, has_notification: bool) -> Subscription<Message> {
    if has_session || has_notification {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
