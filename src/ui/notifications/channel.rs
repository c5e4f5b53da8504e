// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! A single pending-message slot: pushing a new toast replaces the
//! current one and resets its expiry, so only the most recent message is
//! ever visible. Last-write-wins, no queueing. A periodic tick clears
//! the slot once the message expires.

use super::notification::{Icon, Notification};
use std::time::{Duration, Instant};

/// The process-wide toast slot.
#[derive(Debug, Clone)]
pub struct Channel {
    current: Option<Notification>,
    default_duration: Duration,
}

impl Channel {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
        }
    }

    /// Shows a toast for the default duration, replacing any pending one.
    pub fn notify(&mut self, text: impl Into<String>, icon: Icon) {
        self.notify_for(text, icon, self.default_duration);
    }

    /// Shows a toast for an explicit duration, replacing any pending one.
    pub fn notify_for(&mut self, text: impl Into<String>, icon: Icon, duration: Duration) {
        self.current = Some(Notification::new(text, icon, duration));
    }

    /// Clears the slot once the pending message has expired. Called from
    /// the periodic tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|notification| notification.is_expired_at(now))
        {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_NOTIFICATION_DURATION_MS,
        ))
    }
}
