// SPDX-License-Identifier: MPL-2.0
//! Subtitle track registration and exclusive activation.
//!
//! Tracks come from two places: an optional external caption file given
//! with the item, and tracks embedded in the media resource reported at
//! the metadata milestone. The merged list is deduplicated by
//! (lang, label). At most one track is ever showing; activating one
//! deterministically hides all others.

/// Language code used for an external caption file.
pub const EXTERNAL_LANG: &str = "ext";

/// Label shown for an external caption file.
pub const EXTERNAL_LABEL: &str = "External";

/// A caption stream, external or embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub lang: String,
    pub label: String,
}

impl SubtitleTrack {
    #[must_use]
    pub fn new(lang: impl Into<String>, label: impl Into<String>) -> Self {
        let lang = lang.into();
        let label = label.into();
        Self {
            label: if label.is_empty() { lang.clone() } else { label },
            lang,
        }
    }

    /// The fixed track descriptor used for an external caption file.
    #[must_use]
    pub fn external() -> Self {
        Self::new(EXTERNAL_LANG, EXTERNAL_LABEL)
    }
}

/// Display mode of a single track, mirroring the modes the backend
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Showing,
    Hidden,
}

/// The registered tracks for the current item plus the active selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackList {
    tracks: Vec<SubtitleTrack>,
    active: Option<String>,
}

impl TrackList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the merged track list: the external track first (when an
    /// external caption URL was given), then the embedded tracks,
    /// deduplicated by (lang, label). Nothing is active yet.
    #[must_use]
    pub fn merged(has_external: bool, embedded: Vec<SubtitleTrack>) -> Self {
        let mut tracks: Vec<SubtitleTrack> = Vec::new();
        if has_external {
            tracks.push(SubtitleTrack::external());
        }
        for track in embedded {
            let duplicate = tracks
                .iter()
                .any(|t| t.lang == track.lang && t.label == track.label);
            if !duplicate {
                tracks.push(track);
            }
        }
        Self {
            tracks,
            active: None,
        }
    }

    #[must_use]
    pub fn tracks(&self) -> &[SubtitleTrack] {
        &self.tracks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Language of the showing track, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// First registered track, the auto-activation candidate.
    #[must_use]
    pub fn first(&self) -> Option<&SubtitleTrack> {
        self.tracks.first()
    }

    /// Activates the track with the given language (or none) and returns
    /// the per-track modes the backend must apply. Exactly one track is
    /// `Showing` afterwards when `lang` names a registered track; zero
    /// otherwise.
    pub fn activate(&mut self, lang: Option<&str>) -> Vec<(SubtitleTrack, TrackMode)> {
        let selected = lang.and_then(|lang| {
            self.tracks
                .iter()
                .find(|track| track.lang == lang)
                .map(|track| track.lang.clone())
        });
        self.active = selected;

        self.tracks
            .iter()
            .map(|track| {
                let mode = if Some(track.lang.as_str()) == self.active.as_deref() {
                    TrackMode::Showing
                } else {
                    TrackMode::Hidden
                };
                (track.clone(), mode)
            })
            .collect()
    }

    /// Number of tracks currently in showing mode (0 or 1).
    #[must_use]
    pub fn showing_count(&self) -> usize {
        usize::from(self.active.is_some())
    }
}
