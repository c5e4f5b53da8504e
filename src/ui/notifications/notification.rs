// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::time::{Duration, Instant};

/// Icon shown next to a toast message. A closed set; the renderer maps
/// each variant to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Play,
    Pause,
    VolumeOn,
    VolumeOff,
    Clock,
    Repeat,
    Captions,
    Theater,
    PictureInPicture,
    SkipForward,
    SkipBack,
    Plus,
    Trash,
    History,
    Check,
    Settings,
    Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    text: String,
    icon: Icon,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(text: impl Into<String>, icon: Icon, duration: Duration) -> Self {
        Self {
            text: text.into(),
            icon,
            shown_at: Instant::now(),
            duration,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_notification_is_not_expired() {
        let notification = Notification::new("Muted", Icon::VolumeOff, Duration::from_secs(2));
        assert!(!notification.is_expired_at(Instant::now()));
    }

    #[test]
    fn notification_expires_after_its_duration() {
        let notification = Notification::new("Muted", Icon::VolumeOff, Duration::from_millis(100));
        let later = Instant::now() + Duration::from_millis(150);
        assert!(notification.is_expired_at(later));
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let notification = Notification::new("gone", Icon::Check, Duration::ZERO);
        assert!(notification.is_expired_at(Instant::now()));
    }
}
