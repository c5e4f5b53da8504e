// SPDX-License-Identifier: MPL-2.0
//! Queued media items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback titles for items created without one.
pub const UNTITLED: &str = "Untitled video";
pub const FROM_URL_TITLE: &str = "Video from URL";

/// A media item waiting in the playlist.
///
/// Immutable once created except for removal; the URL is the natural
/// deduplication key when the same resource is re-added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: Uuid,
    pub url: String,
    /// Optional external caption-track URL (WebVTT-style, parsed by the
    /// playback backend, not here). Empty string means none.
    #[serde(default)]
    pub subtitle_url: String,
    pub title: String,
}

impl PlaylistItem {
    /// Creates a new item with a fresh id. An empty title falls back to
    /// [`UNTITLED`].
    #[must_use]
    pub fn new(url: impl Into<String>, subtitle_url: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            subtitle_url: subtitle_url.into(),
            title: if title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
        }
    }

    /// Returns the external subtitle URL, if one was given.
    #[must_use]
    pub fn subtitle_url(&self) -> Option<&str> {
        if self.subtitle_url.is_empty() {
            None
        } else {
            Some(&self.subtitle_url)
        }
    }
}
