// SPDX-License-Identifier: MPL-2.0
//! Pointer sub-component: turns raw touch and mouse input into gesture
//! events and remembers which kind of input the user has.

use crate::ui::state::GestureEvent;
use iced::touch::Finger;
use iced::{mouse, Point};
use std::time::Instant;

/// Wheel distance in pixels that counts as one notch.
const PIXELS_PER_NOTCH: f32 = 120.0;

/// The most recent kind of input, used to word the usage hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Pointer,
    Touch,
}

/// Pointer sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Up to two tracked fingers, in press order.
    fingers: Vec<(Finger, Point)>,
    cursor: Option<Point>,
    mouse_down: bool,
    input_mode: InputMode,
}

/// Raw input relevant to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    FingerPressed { id: Finger, position: Point, now: Instant },
    FingerMoved { id: Finger, position: Point, now: Instant },
    FingerLifted { id: Finger, position: Point, now: Instant },
    FingerLost { id: Finger },
    CursorMoved { position: Point, now: Instant },
    MousePressed { now: Instant },
    MouseReleased { now: Instant },
    Wheel(mouse::ScrollDelta),
}

impl State {
    /// Handle raw input, returning the gesture event it amounts to.
    pub fn handle(&mut self, msg: Message) -> Option<GestureEvent> {
        match msg {
            Message::FingerPressed { id, position, now } => {
                self.input_mode = InputMode::Touch;
                if self.fingers.len() >= 2 || self.fingers.iter().any(|(f, _)| *f == id) {
                    return None;
                }
                self.fingers.push((id, position));
                match self.fingers.len() {
                    1 => Some(GestureEvent::Press { position, at: now }),
                    _ => Some(GestureEvent::PinchStart {
                        distance: self.finger_distance(),
                    }),
                }
            }
            Message::FingerMoved { id, position, now } => {
                let finger = self.fingers.iter_mut().find(|(f, _)| *f == id)?;
                finger.1 = position;
                match self.fingers.len() {
                    1 => Some(GestureEvent::DragMove { position, at: now }),
                    _ => Some(GestureEvent::PinchMove {
                        distance: self.finger_distance(),
                    }),
                }
            }
            Message::FingerLifted { id, position, now } => {
                let index = self.fingers.iter().position(|(f, _)| *f == id)?;
                let was_pinching = self.fingers.len() == 2;
                self.fingers.remove(index);
                if was_pinching {
                    Some(GestureEvent::PinchEnd)
                } else {
                    Some(GestureEvent::Release { position, at: now })
                }
            }
            Message::FingerLost { id } => {
                if !self.fingers.iter().any(|(f, _)| *f == id) {
                    return None;
                }
                self.fingers.clear();
                Some(GestureEvent::Cancel)
            }
            Message::CursorMoved { position, now } => {
                self.cursor = Some(position);
                if self.mouse_down && self.fingers.is_empty() {
                    Some(GestureEvent::DragMove { position, at: now })
                } else {
                    None
                }
            }
            Message::MousePressed { now } => {
                // Some platforms mirror touches as mouse clicks.
                if !self.fingers.is_empty() {
                    return None;
                }
                let position = self.cursor?;
                self.mouse_down = true;
                self.input_mode = InputMode::Pointer;
                Some(GestureEvent::Press { position, at: now })
            }
            Message::MouseReleased { now } => {
                if !self.mouse_down {
                    return None;
                }
                self.mouse_down = false;
                let position = self.cursor?;
                Some(GestureEvent::Release { position, at: now })
            }
            Message::Wheel(delta) => {
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
                };
                if notches.abs() < f32::EPSILON {
                    return None;
                }
                self.input_mode = InputMode::Pointer;
                Some(GestureEvent::Wheel { notches })
            }
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Drops all tracked pointers (e.g. when an overlay opens).
    pub fn clear(&mut self) {
        self.fingers.clear();
        self.mouse_down = false;
    }

    fn finger_distance(&self) -> f32 {
        match self.fingers.as_slice() {
            [(_, a), (_, b), ..] => a.distance(*b),
            _ => 0.0,
        }
    }
}
