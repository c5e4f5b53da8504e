// SPDX-License-Identifier: MPL-2.0
//! The ordered playback queue.

use super::item::PlaylistItem;
use uuid::Uuid;

/// Ordered queue of items awaiting playback.
///
/// Reordering has a visual affordance in the UI but no operation here;
/// the queue only appends, front-inserts, removes by id, and clears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
}

impl Playlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_items(items: Vec<PlaylistItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item at the back of the queue.
    pub fn push(&mut self, item: PlaylistItem) {
        self.items.push(item);
    }

    /// Inserts an item at the front, removing any earlier entry with the
    /// same URL so a re-submitted resource appears exactly once.
    pub fn push_front_dedup(&mut self, item: PlaylistItem) {
        self.items.retain(|existing| existing.url != item.url);
        self.items.insert(0, item);
    }

    /// Removes the item with the given id. Returns it when found.
    pub fn remove(&mut self, id: Uuid) -> Option<PlaylistItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&PlaylistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Finds the queued copy of a resource by URL.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&PlaylistItem> {
        self.items.iter().find(|item| item.url == url)
    }

    /// Returns the item after the one with the given URL, used to
    /// advance when playback ends. `None` when the URL is not queued or
    /// is the last entry.
    #[must_use]
    pub fn next_after(&self, url: &str) -> Option<&PlaylistItem> {
        let index = self.items.iter().position(|item| item.url == url)?;
        self.items.get(index + 1)
    }
}
