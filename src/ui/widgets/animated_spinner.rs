// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas: a faint ring with a rotating
//! quarter-turn arc.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

const STROKE_WIDTH: f32 = 4.0;

/// Spinner at a given rotation; the caller advances the angle on each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Start and end angles of the arc at the current rotation.
    fn arc_angles(&self) -> (f32, f32) {
        let start = self.rotation - FRAC_PI_2;
        (start, start + PI * 0.75)
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.2, ..self.color }),
        );

        let (start, end) = self.arc_angles();
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
