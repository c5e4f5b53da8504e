// SPDX-License-Identifier: MPL-2.0
//! Interactive seek bar.
//!
//! A canvas widget drawing the buffered extent under the played extent,
//! with a drag handle that appears on hover or during a drag. Pressing
//! enters the seeking state; moves keep updating the preview even when
//! the cursor wanders off the bar (the drag is captured globally);
//! release commits. Plain hovering publishes a floating time label
//! without touching playback.

use crate::player::progress;
use crate::ui::theme::ACCENT;
use iced::widget::canvas::{self, Canvas, Path};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle};

/// Bar height in logical pixels; the canvas is a little taller to give
/// the handle room.
const TRACK_HEIGHT: f32 = 4.0;
const CANVAS_HEIGHT: f32 = 16.0;
const HANDLE_RADIUS: f32 = 6.0;

/// Interaction events published by the bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer went down on the bar at this time offset.
    Pressed(f64),
    /// Pointer moved during a live drag; preview only.
    Dragged(f64),
    /// Pointer released; commit the previewed position.
    Released,
    /// Pointer hovers the bar (no drag); show a time label at `x`.
    Hovered { time_secs: f64, x: f32 },
    /// Pointer left the bar; clear the hover label.
    HoverCleared,
}

/// Snapshot of playback state the bar renders from.
#[derive(Debug, Clone, Copy)]
pub struct SeekBarProgram {
    pub position_secs: f64,
    pub duration_secs: f64,
    pub buffered_secs: f64,
    pub seeking: bool,
}

impl SeekBarProgram {
    fn time_at(&self, x: f32, width: f32) -> f64 {
        progress::time_at(x, width, self.duration_secs)
    }

    fn fraction(&self, secs: f64) -> f32 {
        if self.duration_secs > 0.0 {
            (secs / self.duration_secs).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}

impl canvas::Program<Message> for SeekBarProgram {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if self.duration_secs <= 0.0 {
            return None;
        }

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Pressed(self.time_at(position.x, bounds.width)))
                        .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if self.seeking {
                    // Drag is captured globally: keep following the
                    // pointer even outside the bar.
                    let position = cursor.position()?;
                    let x = position.x - bounds.x;
                    Some(
                        Action::publish(Message::Dragged(self.time_at(x, bounds.width)))
                            .and_capture(),
                    )
                } else if let Some(position) = cursor.position_in(bounds) {
                    Some(Action::publish(Message::Hovered {
                        time_secs: self.time_at(position.x, bounds.width),
                        x: position.x,
                    }))
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.seeking {
                    Some(Action::publish(Message::Released).and_capture())
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if self.seeking {
                    None
                } else {
                    Some(Action::publish(Message::HoverCleared))
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let track_y = (CANVAS_HEIGHT - TRACK_HEIGHT) / 2.0;

        // Track
        frame.fill_rectangle(
            Point::new(0.0, track_y),
            iced::Size::new(bounds.width, TRACK_HEIGHT),
            Color::from_rgba(1.0, 1.0, 1.0, 0.2),
        );

        // Buffered extent
        let buffered_width = bounds.width * self.fraction(self.buffered_secs);
        frame.fill_rectangle(
            Point::new(0.0, track_y),
            iced::Size::new(buffered_width, TRACK_HEIGHT),
            Color::from_rgba(1.0, 1.0, 1.0, 0.4),
        );

        // Played extent
        let played_width = bounds.width * self.fraction(self.position_secs);
        frame.fill_rectangle(
            Point::new(0.0, track_y),
            iced::Size::new(played_width, TRACK_HEIGHT),
            ACCENT,
        );

        // Handle, only while hovering or dragging
        if self.seeking || cursor.is_over(bounds) {
            let handle = Path::circle(
                Point::new(played_width, CANVAS_HEIGHT / 2.0),
                HANDLE_RADIUS,
            );
            frame.fill(&handle, Color::WHITE);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.seeking || cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Builds the seek bar element for the given playback snapshot.
pub fn view<'a>(program: SeekBarProgram) -> Element<'a, Message> {
    Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fixed(CANVAS_HEIGHT))
        .into()
}
