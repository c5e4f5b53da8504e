// SPDX-License-Identifier: MPL-2.0
//! Recency-ordered watch history with resume positions.
//!
//! The list is most-recent-first and capped; eviction is pure FIFO over
//! recency, not frequency. Position updates are write-suppressed: a new
//! resume position is only recorded when it moved far enough from the
//! stored one, so routine time ticks do not hammer the store.

use super::item::PlaylistItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A previously played item with its resume position.
///
/// Keyed by `url` for upsert purposes; `id` stays stable across
/// re-plays of the same resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub url: String,
    #[serde(default)]
    pub subtitle_url: String,
    pub title: String,
    /// Last known playback position in seconds.
    #[serde(default)]
    pub last_position_secs: f64,
    /// When the item was last started.
    pub played_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Converts the entry back into a playable item, preserving its id.
    #[must_use]
    pub fn to_item(&self) -> PlaylistItem {
        PlaylistItem {
            id: self.id,
            url: self.url.clone(),
            subtitle_url: self.subtitle_url.clone(),
            title: self.title.clone(),
        }
    }
}

/// The capped, recency-ordered history list.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cap: usize,
    write_threshold_secs: f64,
}

impl History {
    #[must_use]
    pub fn new(cap: usize, write_threshold_secs: f64) -> Self {
        Self {
            entries: Vec::new(),
            cap,
            write_threshold_secs,
        }
    }

    /// Restores a history from persisted entries, trimming past the cap.
    #[must_use]
    pub fn from_entries(
        mut entries: Vec<HistoryEntry>,
        cap: usize,
        write_threshold_secs: f64,
    ) -> Self {
        entries.truncate(cap);
        Self {
            entries,
            cap,
            write_threshold_secs,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.url == url)
    }

    /// Records that an item started playing: upserts it to the front,
    /// carrying the earlier entry's id and resume position forward, and
    /// trims the tail past the cap.
    pub fn record_played(&mut self, item: &PlaylistItem) {
        let existing = self
            .entries
            .iter()
            .position(|entry| entry.url == item.url);

        let (id, last_position_secs) = match existing {
            Some(index) => {
                let previous = self.entries.remove(index);
                (previous.id, previous.last_position_secs)
            }
            None => (item.id, 0.0),
        };

        self.entries.insert(
            0,
            HistoryEntry {
                id,
                url: item.url.clone(),
                subtitle_url: item.subtitle_url.clone(),
                title: item.title.clone(),
                last_position_secs,
                played_at: Utc::now(),
            },
        );
        self.entries.truncate(self.cap);
    }

    /// Records a playback position for the entry with the given URL.
    ///
    /// The position is updated in place (recency does not change) and
    /// only when the delta from the stored position exceeds the write
    /// threshold. Returns whether anything changed, so the caller knows
    /// whether to persist.
    pub fn record_position(&mut self, url: &str, position_secs: f64) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.url == url) else {
            return false;
        };
        if (entry.last_position_secs - position_secs).abs() <= self.write_threshold_secs {
            return false;
        }
        entry.last_position_secs = position_secs;
        true
    }

    /// Whether a stored resume position is far enough in to be worth
    /// offering a resume hint for.
    #[must_use]
    pub fn resume_position(&self, url: &str) -> Option<f64> {
        self.find_by_url(url)
            .map(|entry| entry.last_position_secs)
            .filter(|secs| *secs > self.write_threshold_secs)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
