// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component wrapping the gesture state machine and the springs
//! that ease the drawn transform.

use crate::ui::animation::SpringTransform;
use crate::ui::state::{
    apply_gesture, GestureContext, GestureEvent, GestureOutcome, GestureState, SwipeDirection,
    Transform, ViewportState, ZoomScale, ZoomStep,
};
use iced::{Size, Vector};
use std::time::Instant;

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    gesture: GestureState,
    springs: SpringTransform,
    context: GestureContext,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Gesture { event: GestureEvent, now: Instant },
    /// Whether the shown page has a back face.
    SetCanFlip(bool),
    WindowResized(Size),
    /// Jump back to the un-zoomed state without animating (after navigation).
    ResetImmediately,
    Tick(Instant),
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ZoomChanged,
    Flip(SwipeDirection),
}

impl State {
    #[must_use]
    pub fn new(zoom_step: f32, wheel_step: f32, double_tap_scale: f32) -> Self {
        Self {
            context: GestureContext {
                zoom_step: ZoomStep::new(zoom_step),
                wheel_step,
                double_tap_scale: ZoomScale::new(double_tap_scale),
                ..GestureContext::default()
            },
            ..Self::default()
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Gesture { event, now } => {
                let (gesture, outcome) = apply_gesture(self.gesture, event, &self.context);
                self.gesture = gesture;
                match outcome {
                    GestureOutcome::None => Effect::None,
                    GestureOutcome::Track => {
                        self.springs.snap_to(self.gesture.live);
                        Effect::ZoomChanged
                    }
                    GestureOutcome::Animate => {
                        self.springs.animate_to(self.gesture.live, now);
                        tracing::debug!(
                            scale = self.gesture.committed.scale.value(),
                            "Zoom changed"
                        );
                        Effect::ZoomChanged
                    }
                    GestureOutcome::Flip(direction) => Effect::Flip(direction),
                }
            }
            Message::SetCanFlip(can_flip) => {
                self.context.can_flip = can_flip;
                Effect::None
            }
            Message::WindowResized(size) => {
                self.context.viewport = ViewportState::from_window(size);
                let transform = self.gesture.committed;
                let pan = self.context.viewport.clamp_pan(transform.pan, transform.scale);
                if pan == transform.pan {
                    return Effect::None;
                }
                let clamped = Transform { pan, ..transform };
                self.gesture.committed = clamped;
                self.gesture.live = clamped;
                self.springs.snap_to(clamped);
                Effect::ZoomChanged
            }
            Message::ResetImmediately => {
                self.gesture = GestureState::default();
                self.springs.snap_to(Transform::IDENTITY);
                Effect::None
            }
            Message::Tick(now) => {
                if self.springs.is_at_rest() {
                    return Effect::None;
                }
                self.springs.tick(now);
                Effect::ZoomChanged
            }
        }
    }

    /// The transform the state machine settled on.
    #[must_use]
    pub fn committed(&self) -> Transform {
        self.gesture.committed
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.gesture.is_zoomed()
    }

    /// Returns whether a pointer gesture is in progress.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.springs.is_at_rest()
    }

    /// Scale to draw this frame.
    #[must_use]
    pub fn drawn_scale(&self) -> f32 {
        self.springs.scale()
    }

    /// Pan to draw this frame.
    #[must_use]
    pub fn drawn_pan(&self) -> Vector {
        self.springs.pan()
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.context.viewport
    }
}
