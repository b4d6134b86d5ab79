// SPDX-License-Identifier: MPL-2.0
//! Canvas that draws the two faces of a calendar page with the flip layout,
//! the zoom transform and the navigation fade applied.
//!
//! The canvas also captures pointer input inside its bounds and publishes it
//! as [`pointer::Message`]s, so gestures never start on the header or the
//! control bar.

use crate::media::ImageData;
use crate::ui::viewer::subcomponents::flip::FaceLayout;
use crate::ui::viewer::subcomponents::pointer;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

/// One face ready to draw.
#[derive(Debug, Clone)]
pub struct Face {
    pub image: Option<ImageData>,
    pub layout: FaceLayout,
}

/// Everything the canvas needs for one frame.
pub struct CalendarCanvas<Message> {
    front: Face,
    back: Face,
    /// Draw the back face above the front one.
    back_on_top: bool,
    scale: f32,
    pan: Vector,
    opacity: f32,
    /// Show the broken-image glyph when the active face has no image.
    broken: bool,
    glyph_color: Color,
    on_pointer: fn(pointer::Message) -> Message,
}

impl<Message> CalendarCanvas<Message> {
    #[must_use]
    pub fn new(front: Face, back: Face, on_pointer: fn(pointer::Message) -> Message) -> Self {
        Self {
            front,
            back,
            back_on_top: false,
            scale: 1.0,
            pan: Vector::ZERO,
            opacity: 1.0,
            broken: false,
            glyph_color: Color::from_rgb(0.5, 0.5, 0.5),
            on_pointer,
        }
    }

    #[must_use]
    pub fn back_on_top(mut self, back_on_top: bool) -> Self {
        self.back_on_top = back_on_top;
        self
    }

    #[must_use]
    pub fn zoom(mut self, scale: f32, pan: Vector) -> Self {
        self.scale = scale;
        self.pan = pan;
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn broken(mut self, broken: bool, glyph_color: Color) -> Self {
        self.broken = broken;
        self.glyph_color = glyph_color;
        self
    }

    pub fn into_element<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn draw_face(&self, frame: &mut Frame, face: &Face, area: Size) {
        let Some(image) = &face.image else {
            return;
        };
        let alpha = face.layout.opacity * self.opacity;
        if alpha <= 0.0 {
            return;
        }
        let rect = face_rect(
            Size::new(image.width as f32, image.height as f32),
            area,
            face.layout,
            self.scale,
            self.pan,
        );
        frame.draw_image(
            rect,
            canvas::Image::new(image.handle.clone()).opacity(alpha),
        );
    }

    fn draw_broken_glyph(&self, frame: &mut Frame) {
        let center = frame.center();
        let side = frame.width().min(frame.height()).min(96.0) * 0.6;
        let origin = Point::new(center.x - side / 2.0, center.y - side / 2.0);
        let stroke = Stroke::default()
            .with_width(3.0)
            .with_color(Color { a: 0.8 * self.opacity, ..self.glyph_color });

        frame.stroke(&Path::rectangle(origin, Size::new(side, side)), stroke);
        let crack = Path::new(|builder| {
            builder.move_to(Point::new(origin.x + side * 0.55, origin.y));
            builder.line_to(Point::new(origin.x + side * 0.4, origin.y + side * 0.35));
            builder.line_to(Point::new(origin.x + side * 0.6, origin.y + side * 0.6));
            builder.line_to(Point::new(origin.x + side * 0.45, origin.y + side));
        });
        frame.stroke(&crack, stroke);
        frame.fill(
            &Path::circle(Point::new(origin.x + side * 0.25, origin.y + side * 0.25), side * 0.08),
            Color { a: 0.8 * self.opacity, ..self.glyph_color },
        );
    }
}

impl<Message> canvas::Program<Message> for CalendarCanvas<Message> {
    /// Whether the left button went down inside the canvas and is still held.
    type State = bool;

    fn update(
        &self,
        mouse_held: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                pointer::Message::FingerPressed {
                    id: *id,
                    position: *position,
                    now: Instant::now(),
                }
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                pointer::Message::FingerMoved {
                    id: *id,
                    position: *position,
                    now: Instant::now(),
                }
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                pointer::Message::FingerLifted {
                    id: *id,
                    position: *position,
                    now: Instant::now(),
                }
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                pointer::Message::FingerLost { id: *id }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !*mouse_held && !bounds.contains(*position) {
                    return None;
                }
                // Not captured so hover states elsewhere keep working.
                return Some(Action::publish((self.on_pointer)(
                    pointer::Message::CursorMoved {
                        position: *position,
                        now: Instant::now(),
                    },
                )));
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?;
                *mouse_held = true;
                pointer::Message::MousePressed { now: Instant::now() }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !*mouse_held {
                    return None;
                }
                *mouse_held = false;
                pointer::Message::MouseReleased { now: Instant::now() }
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                pointer::Message::Wheel(*delta)
            }
            _ => return None,
        };

        Some(Action::publish((self.on_pointer)(message)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = bounds.size();

        let (bottom, top) = if self.back_on_top {
            (&self.front, &self.back)
        } else {
            (&self.back, &self.front)
        };
        self.draw_face(&mut frame, bottom, area);
        self.draw_face(&mut frame, top, area);

        if self.broken {
            self.draw_broken_glyph(&mut frame);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) && self.scale > 1.0 {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Size of `image` scaled to fit inside `area` without cropping.
#[must_use]
pub fn fit_contain(image: Size, area: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Size::ZERO;
    }
    let ratio = (area.width / image.width).min(area.height / image.height);
    Size::new(image.width * ratio, image.height * ratio)
}

/// Rectangle, relative to the canvas, where a face is drawn.
///
/// The face is fitted to `area`, scaled about the center by its flip layout
/// and the zoom scale, then shifted by the flip offset and the zoom pan.
#[must_use]
pub fn face_rect(image: Size, area: Size, layout: FaceLayout, scale: f32, pan: Vector) -> Rectangle {
    let fitted = fit_contain(image, area);
    let factor = layout.scale * scale;
    let size = Size::new(fitted.width * factor, fitted.height * factor);
    let center = Point::new(
        area.width / 2.0 + layout.translate_x + pan.x,
        area.height / 2.0 + pan.y,
    );
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
