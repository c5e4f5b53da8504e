// SPDX-License-Identifier: MPL-2.0
//! Seek-bar geometry, time formatting, and interaction state.
//!
//! Two interaction modes share the bar:
//!
//! - **Drag seek**: pointer down enters the seeking state; every move
//!   updates a preview position without committing playback; release
//!   commits once and leaves the seeking state.
//! - **Hover preview**: a floating time label tracks the cursor without
//!   touching playback, cleared when the pointer leaves the bar.

/// Converts a horizontal coordinate over the bar into a completion
/// fraction clamped to [0, 1]. A degenerate width yields 0.
#[must_use]
pub fn completion_fraction(x: f32, width: f32) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (f64::from(x) / f64::from(width)).clamp(0.0, 1.0)
}

/// Converts a horizontal coordinate into an absolute time offset.
#[must_use]
pub fn time_at(x: f32, width: f32, duration_secs: f64) -> f64 {
    completion_fraction(x, width) * duration_secs.max(0.0)
}

/// Formats a duration in seconds as zero-padded `MM:SS`, or `HH:MM:SS`
/// once the value reaches an hour. Non-finite and negative inputs read
/// as zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Floating preview label shown while hovering the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPreview {
    /// Formatted time under the cursor.
    pub label: String,
    /// Horizontal offset of the label within the bar.
    pub x: f32,
}

/// Interaction state for the seek bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekBar {
    /// Live drag in progress; playback position updates are held off
    /// while set so the handle does not fight the stream.
    seeking: bool,
    /// Preview position during a drag, in seconds.
    preview_secs: Option<f64>,
    /// Hover label, pointer devices only.
    hover: Option<HoverPreview>,
}

impl SeekBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Position the bar should render: the drag preview while seeking,
    /// otherwise the committed playback position.
    #[must_use]
    pub fn display_position(&self, playback_secs: f64) -> f64 {
        self.preview_secs.unwrap_or(playback_secs)
    }

    #[must_use]
    pub fn hover(&self) -> Option<&HoverPreview> {
        self.hover.as_ref()
    }

    /// Enters the seeking state at the given preview position.
    pub fn begin_drag(&mut self, preview_secs: f64) {
        self.seeking = true;
        self.preview_secs = Some(preview_secs);
    }

    /// Updates the preview while a drag is live. Ignored otherwise, so a
    /// stray move event cannot start a phantom seek.
    pub fn drag_to(&mut self, preview_secs: f64) {
        if self.seeking {
            self.preview_secs = Some(preview_secs);
        }
    }

    /// Leaves the seeking state and returns the position to commit.
    pub fn release(&mut self) -> Option<f64> {
        self.seeking = false;
        self.preview_secs.take()
    }

    /// Shows the hover label for the given cursor offset.
    pub fn hover_at(&mut self, x: f32, width: f32, duration_secs: f64) {
        if duration_secs <= 0.0 {
            self.hover = None;
            return;
        }
        self.hover_preview(time_at(x, width, duration_secs), x);
    }

    /// Shows the hover label for an already-resolved time offset.
    pub fn hover_preview(&mut self, time_secs: f64, x: f32) {
        self.hover = Some(HoverPreview {
            label: format_time(time_secs),
            x,
        });
    }

    /// Clears the hover label (pointer left the bar).
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_clamps_to_unit_interval() {
        assert_abs_diff_eq!(completion_fraction(-10.0, 100.0), 0.0);
        assert_abs_diff_eq!(completion_fraction(50.0, 100.0), 0.5);
        assert_abs_diff_eq!(completion_fraction(250.0, 100.0), 1.0);
    }

    #[test]
    fn fraction_of_degenerate_width_is_zero() {
        assert_abs_diff_eq!(completion_fraction(50.0, 0.0), 0.0);
        assert_abs_diff_eq!(completion_fraction(50.0, -5.0), 0.0);
    }

    #[test]
    fn time_at_scales_by_duration() {
        assert_abs_diff_eq!(time_at(50.0, 100.0, 120.0), 60.0);
        assert_abs_diff_eq!(time_at(0.0, 100.0, 120.0), 0.0);
        assert_abs_diff_eq!(time_at(100.0, 100.0, 120.0), 120.0);
        // Clamped past the right edge
        assert_abs_diff_eq!(time_at(400.0, 100.0, 120.0), 120.0);
    }

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_zero_pads_minutes() {
        assert_eq!(format_time(65.0), "01:05");
    }

    #[test]
    fn format_time_shows_hours_past_sixty_minutes() {
        assert_eq!(format_time(3661.0), "01:01:01");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "01:00:00");
    }

    #[test]
    fn format_time_handles_garbage_input() {
        assert_eq!(format_time(-10.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
    }

    #[test]
    fn drag_preview_masks_playback_position() {
        let mut bar = SeekBar::new();
        assert_abs_diff_eq!(bar.display_position(30.0), 30.0);

        bar.begin_drag(90.0);
        assert!(bar.is_seeking());
        assert_abs_diff_eq!(bar.display_position(30.0), 90.0);

        bar.drag_to(95.0);
        assert_abs_diff_eq!(bar.display_position(30.0), 95.0);
    }

    #[test]
    fn release_commits_final_preview_and_exits_seeking() {
        let mut bar = SeekBar::new();
        bar.begin_drag(10.0);
        bar.drag_to(42.0);

        let committed = bar.release();

        assert_abs_diff_eq!(committed.unwrap(), 42.0);
        assert!(!bar.is_seeking());
        assert_abs_diff_eq!(bar.display_position(30.0), 30.0);
    }

    #[test]
    fn drag_to_without_begin_is_ignored() {
        let mut bar = SeekBar::new();
        bar.drag_to(50.0);
        assert!(!bar.is_seeking());
        assert!(bar.release().is_none());
    }

    #[test]
    fn hover_preview_tracks_cursor() {
        let mut bar = SeekBar::new();
        bar.hover_at(50.0, 100.0, 120.0);

        let hover = bar.hover().expect("hover preview");
        assert_eq!(hover.label, "01:00");
        assert_abs_diff_eq!(hover.x, 50.0);

        bar.clear_hover();
        assert!(bar.hover().is_none());
    }

    #[test]
    fn hover_without_duration_shows_nothing() {
        let mut bar = SeekBar::new();
        bar.hover_at(50.0, 100.0, 0.0);
        assert!(bar.hover().is_none());
    }
}
