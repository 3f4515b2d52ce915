// SPDX-License-Identifier: MPL-2.0
//! Remaining-time ring drawn with Canvas.
//!
//! Auto-expiring toasts show a small ring that empties clockwise as the
//! notification's time-to-live runs out.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Ring showing the fraction of time left, from full (1.0) to empty (0.0).
pub struct CountdownRing {
    cache: Cache,
    fraction: f32,
    color: Color,
    size: f32,
}

impl CountdownRing {
    /// Creates a ring at `fraction` remaining, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(color: Color, fraction: f32) -> Self {
        Self {
            cache: Cache::default(),
            fraction: fraction.clamp(0.0, 1.0),
            color,
            size: sizing::COUNTDOWN_RING,
        }
    }

    /// Creates a Canvas widget from this ring.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for CountdownRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                // Full track underneath, faint
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                if self.fraction <= 0.0 {
                    return;
                }

                // Remaining-time arc, from 12 o'clock, clockwise
                let start_angle = -PI / 2.0;
                let sweep = 2.0 * PI * self.fraction;

                let mut arc_path = canvas::path::Builder::new();
                let start_x = center.x + radius * start_angle.cos();
                let start_y = center.y + radius * start_angle.sin();
                arc_path.move_to(Point::new(start_x, start_y));

                // Approximate the arc with short segments for a smooth stroke
                let segments = 40;
                #[allow(clippy::cast_precision_loss)]
                // segments=40, i∈[1,40] - well within f32 precision
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + sweep * t;
                    let x = center.x + radius * angle.cos();
                    let y = center.y + radius * angle.sin();
                    arc_path.line_to(Point::new(x, y));
                }

                let arc = arc_path.build();
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        let over = CountdownRing::new(Color::WHITE, 1.7);
        let under = CountdownRing::new(Color::WHITE, -0.3);
        assert_eq!(over.fraction, 1.0);
        assert_eq!(under.fraction, 0.0);
    }
}
