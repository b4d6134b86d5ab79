// SPDX-License-Identifier: MPL-2.0
//! Zoom, pan and swipe recognition as a pure state machine.
//!
//! [`apply_gesture`] folds one pointer event into a [`GestureState`] and
//! reports what the viewer should do about it. The state machine never
//! touches the clock or the window; timestamps and the viewport arrive with
//! the event and its [`GestureContext`].
//!
//! Two transforms are kept: the *committed* one is the baseline a new pinch
//! starts from, the *live* one is what the page should currently show. They
//! only differ while a pinch or drag is in progress.

use crate::ui::state::drag::DragState;
use crate::ui::state::swipe::{classify_swipe, SwipeDirection};
use crate::ui::state::tap::TapDetector;
use crate::ui::state::viewport::ViewportState;
use crate::ui::state::zoom::{ZoomScale, ZoomStep, SNAP_BACK_SCALE};
use iced::{Point, Vector};
use std::time::Instant;

/// Scale and pan of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: ZoomScale,
    pub pan: Vector,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: ZoomScale::IDENTITY,
        pan: Vector::new(0.0, 0.0),
    };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min() && self.pan == Vector::new(0.0, 0.0)
    }

    /// Returns whether the page is magnified.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.scale.is_min()
    }

    /// Sets the scale, resetting pan at identity and re-clamping it otherwise.
    fn rescaled(self, scale: ZoomScale, viewport: &ViewportState) -> Self {
        if scale.is_min() {
            Self::IDENTITY
        } else {
            Self {
                scale,
                pan: viewport.clamp_pan(self.pan, scale),
            }
        }
    }

    /// Applies the release rule: nearly un-zoomed snaps back to identity.
    fn settled(self) -> Self {
        if self.scale.below_snap_threshold() {
            Self::IDENTITY
        } else {
            self
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// One pointer is down.
    Dragging(DragState),
    /// Two pointers are down.
    Pinching {
        initial_distance: f32,
        base_scale: ZoomScale,
    },
    /// A double tap was recognised; the rest of the press is ignored.
    Consumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub committed: Transform,
    pub live: Transform,
    pub phase: Phase,
    taps: TapDetector,
}

impl GestureState {
    /// Returns whether the page is considered zoomed (live scale above 1).
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.live.is_zoomed()
    }

    /// Returns whether a pointer gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    fn with_transform(self, transform: Transform) -> Self {
        Self {
            committed: transform,
            live: transform,
            ..self
        }
    }
}

/// Input for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A single pointer went down.
    Press { position: Point, at: Instant },
    /// The single pointer moved.
    DragMove { position: Point, at: Instant },
    /// The single pointer went up.
    Release { position: Point, at: Instant },
    /// A second pointer went down; `distance` is between the two.
    PinchStart { distance: f32 },
    PinchMove { distance: f32 },
    /// One of the two pinch pointers went up.
    PinchEnd,
    /// The platform cancelled the pointer sequence.
    Cancel,
    ZoomIn,
    ZoomOut,
    /// Mouse wheel; positive notches zoom in.
    Wheel { notches: f32 },
    Reset,
}

/// Environment the state machine needs but does not own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub viewport: ViewportState,
    /// Whether the current page has a back face.
    pub can_flip: bool,
    pub zoom_step: ZoomStep,
    pub wheel_step: f32,
    pub double_tap_scale: ZoomScale,
}

impl Default for GestureContext {
    fn default() -> Self {
        Self {
            viewport: ViewportState::default(),
            can_flip: true,
            zoom_step: ZoomStep::default(),
            wheel_step: crate::config::DEFAULT_WHEEL_ZOOM_STEP,
            double_tap_scale: ZoomScale::new(crate::config::DEFAULT_DOUBLE_TAP_SCALE),
        }
    }
}

/// What the viewer should do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing visible changed.
    None,
    /// The live transform changed under the pointer; draw it directly.
    Track,
    /// The transform jumped; animate towards it.
    Animate,
    /// A horizontal swipe was released on an un-zoomed, flippable page.
    Flip(SwipeDirection),
}

/// Folds one event into the gesture state.
#[must_use]
pub fn apply_gesture(
    state: GestureState,
    event: GestureEvent,
    ctx: &GestureContext,
) -> (GestureState, GestureOutcome) {
    let mut state = state;
    let viewport = &ctx.viewport;

    match event {
        GestureEvent::Press { position, at } => {
            if state.taps.press(at) {
                let target = if state.live.is_zoomed() {
                    Transform::IDENTITY
                } else {
                    Transform {
                        scale: ctx.double_tap_scale,
                        pan: Vector::new(0.0, 0.0),
                    }
                };
                state = state.with_transform(target);
                state.phase = Phase::Consumed;
                return (state, GestureOutcome::Animate);
            }
            state.phase = Phase::Dragging(DragState::start(position, at));
            (state, GestureOutcome::None)
        }

        GestureEvent::DragMove { position, at } => {
            let Phase::Dragging(mut drag) = state.phase else {
                return (state, GestureOutcome::None);
            };
            let delta = drag.move_to(position, at);
            state.phase = Phase::Dragging(drag);

            if !state.live.is_zoomed() {
                return (state, GestureOutcome::None);
            }
            let pan = viewport.clamp_pan(state.live.pan + delta, state.live.scale);
            if pan == state.live.pan {
                return (state, GestureOutcome::None);
            }
            state.live.pan = pan;
            (state, GestureOutcome::Track)
        }

        GestureEvent::Release { position, at } => match state.phase {
            Phase::Dragging(drag) => {
                let swipe = if state.live.scale.value() <= SNAP_BACK_SCALE && ctx.can_flip {
                    classify_swipe(drag.travel(position), drag.release_velocity(position, at))
                } else {
                    None
                };
                let settled = state.live.settled();
                let snapped = settled != state.live;
                state = state.with_transform(settled);
                state.phase = Phase::Idle;

                let outcome = match swipe {
                    Some(direction) => GestureOutcome::Flip(direction),
                    None if snapped => GestureOutcome::Animate,
                    None => GestureOutcome::None,
                };
                (state, outcome)
            }
            Phase::Consumed => {
                state.phase = Phase::Idle;
                (state, GestureOutcome::None)
            }
            Phase::Idle | Phase::Pinching { .. } => (state, GestureOutcome::None),
        },

        GestureEvent::PinchStart { distance } => {
            state.taps.cancel();
            state.phase = Phase::Pinching {
                initial_distance: distance.max(1.0),
                base_scale: state.committed.scale,
            };
            (state, GestureOutcome::None)
        }

        GestureEvent::PinchMove { distance } => {
            let Phase::Pinching {
                initial_distance,
                base_scale,
            } = state.phase
            else {
                return (state, GestureOutcome::None);
            };
            let scale = base_scale.scaled_by(distance.max(0.0) / initial_distance);
            state.live = Transform {
                scale,
                pan: viewport.clamp_pan(state.live.pan, scale),
            };
            (state, GestureOutcome::Track)
        }

        GestureEvent::PinchEnd => {
            if !matches!(state.phase, Phase::Pinching { .. }) {
                return (state, GestureOutcome::None);
            }
            let settled = state.live.settled();
            let outcome = if settled == state.live {
                GestureOutcome::None
            } else {
                GestureOutcome::Animate
            };
            state = state.with_transform(settled);
            // The remaining finger is ignored until it lifts.
            state.phase = Phase::Consumed;
            (state, outcome)
        }

        GestureEvent::Cancel => {
            let outcome = if state.live == state.committed {
                GestureOutcome::None
            } else {
                GestureOutcome::Animate
            };
            state.live = state.committed;
            state.phase = Phase::Idle;
            (state, outcome)
        }

        GestureEvent::ZoomIn => {
            let scale = state.live.scale.zoom_in(ctx.zoom_step);
            step_to(state, scale, viewport)
        }

        GestureEvent::ZoomOut => {
            let scale = state.live.scale.zoom_out(ctx.zoom_step);
            step_to(state, scale, viewport)
        }

        GestureEvent::Wheel { notches } => {
            if notches == 0.0 || notches.is_nan() {
                return (state, GestureOutcome::None);
            }
            let step = ZoomStep::raw(ctx.wheel_step * notches);
            let scale = if notches > 0.0 {
                state.live.scale.zoom_in(step)
            } else {
                state.live.scale.zoom_out(step)
            };
            let scale = if scale.below_snap_threshold() {
                ZoomScale::IDENTITY
            } else {
                scale
            };
            step_to(state, scale, viewport)
        }

        GestureEvent::Reset => {
            let changed = state.live != Transform::IDENTITY;
            state = state.with_transform(Transform::IDENTITY);
            state.phase = Phase::Idle;
            let outcome = if changed {
                GestureOutcome::Animate
            } else {
                GestureOutcome::None
            };
            (state, outcome)
        }
    }
}

fn step_to(
    state: GestureState,
    scale: ZoomScale,
    viewport: &ViewportState,
) -> (GestureState, GestureOutcome) {
    let target = state.live.rescaled(scale, viewport);
    if target == state.live {
        return (state, GestureOutcome::None);
    }
    (state.with_transform(target), GestureOutcome::Animate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn ctx() -> GestureContext {
        GestureContext {
            viewport: ViewportState::new(400.0, 600.0),
            ..GestureContext::default()
        }
    }

    fn run(state: GestureState, events: &[GestureEvent]) -> (GestureState, GestureOutcome) {
        let ctx = ctx();
        events
            .iter()
            .fold((state, GestureOutcome::None), |(state, _), event| {
                apply_gesture(state, *event, &ctx)
            })
    }

    fn zoomed(scale: f32) -> GestureState {
        GestureState::default().with_transform(Transform {
            scale: ZoomScale::new(scale),
            pan: Vector::new(0.0, 0.0),
        })
    }

    #[test]
    fn pinch_scales_from_committed_baseline() {
        let (state, outcome) = run(
            zoomed(2.0),
            &[
                GestureEvent::PinchStart { distance: 100.0 },
                GestureEvent::PinchMove { distance: 150.0 },
            ],
        );
        assert_eq!(outcome, GestureOutcome::Track);
        assert_abs_diff_eq!(state.live.scale.value(), 3.0);
        assert_abs_diff_eq!(state.committed.scale.value(), 2.0);

        let (state, _) = run(state, &[GestureEvent::PinchEnd]);
        assert_abs_diff_eq!(state.committed.scale.value(), 3.0);
    }

    #[test]
    fn pinch_is_clamped_to_four() {
        let (state, _) = run(
            zoomed(2.0),
            &[
                GestureEvent::PinchStart { distance: 100.0 },
                GestureEvent::PinchMove { distance: 400.0 },
            ],
        );
        assert_abs_diff_eq!(state.live.scale.value(), 4.0);
    }

    #[test]
    fn pinch_below_snap_threshold_returns_to_identity() {
        let (state, outcome) = run(
            GestureState::default(),
            &[
                GestureEvent::PinchStart { distance: 100.0 },
                GestureEvent::PinchMove { distance: 100.5 },
                GestureEvent::PinchEnd,
            ],
        );
        assert_eq!(outcome, GestureOutcome::Animate);
        assert_eq!(state.committed, Transform::IDENTITY);
        assert_eq!(state.live, Transform::IDENTITY);
    }

    #[test]
    fn pinch_out_reclamps_pan_to_live_scale() {
        let mut start = zoomed(3.0);
        start.committed.pan = Vector::new(400.0, 600.0);
        start.live.pan = Vector::new(400.0, 600.0);

        let (state, _) = run(
            start,
            &[
                GestureEvent::PinchStart { distance: 300.0 },
                GestureEvent::PinchMove { distance: 200.0 },
            ],
        );
        // Live scale is 2, so the bound is (200, 300).
        assert_abs_diff_eq!(state.live.pan.x, 200.0);
        assert_abs_diff_eq!(state.live.pan.y, 300.0);
    }

    #[test]
    fn drag_pans_only_when_zoomed() {
        let now = Instant::now();
        let (state, outcome) = run(
            GestureState::default(),
            &[
                GestureEvent::Press { position: Point::new(100.0, 100.0), at: now },
                GestureEvent::DragMove { position: Point::new(150.0, 100.0), at: now },
            ],
        );
        assert_eq!(outcome, GestureOutcome::None);
        assert_eq!(state.live.pan, Vector::new(0.0, 0.0));

        let (state, outcome) = run(
            zoomed(2.0),
            &[
                GestureEvent::Press { position: Point::new(100.0, 100.0), at: now },
                GestureEvent::DragMove { position: Point::new(150.0, 80.0), at: now },
            ],
        );
        assert_eq!(outcome, GestureOutcome::Track);
        assert_eq!(state.live.pan, Vector::new(50.0, -20.0));
    }

    #[test]
    fn drag_pan_is_bounded_per_axis() {
        let now = Instant::now();
        let (state, _) = run(
            zoomed(2.0),
            &[
                GestureEvent::Press { position: Point::ORIGIN, at: now },
                GestureEvent::DragMove {
                    position: Point::new(1000.0, -1000.0),
                    at: now + Duration::from_millis(300),
                },
                GestureEvent::Release {
                    position: Point::new(1000.0, -1000.0),
                    at: now + Duration::from_millis(400),
                },
            ],
        );
        assert_eq!(state.committed.pan, Vector::new(200.0, -300.0));
        assert_eq!(state.committed, state.live);
    }

    #[test]
    fn double_tap_toggles_between_identity_and_double_tap_scale() {
        let now = Instant::now();
        let tap = |offset: u64| GestureEvent::Press {
            position: Point::new(10.0, 10.0),
            at: now + Duration::from_millis(offset),
        };
        let release = |offset: u64| GestureEvent::Release {
            position: Point::new(10.0, 10.0),
            at: now + Duration::from_millis(offset),
        };

        let (state, outcome) = run(GestureState::default(), &[tap(0), release(50), tap(150)]);
        assert_eq!(outcome, GestureOutcome::Animate);
        assert_abs_diff_eq!(state.committed.scale.value(), 2.5);
        assert_eq!(state.phase, Phase::Consumed);

        let (state, _) = run(state, &[release(200), tap(1000), release(1050), tap(1100)]);
        assert_eq!(state.committed, Transform::IDENTITY);
    }

    #[test]
    fn double_tap_out_resets_pan() {
        let now = Instant::now();
        let mut start = zoomed(3.0);
        start.committed.pan = Vector::new(50.0, 50.0);
        start.live.pan = Vector::new(50.0, 50.0);

        let (state, _) = run(
            start,
            &[
                GestureEvent::Press { position: Point::ORIGIN, at: now },
                GestureEvent::Release { position: Point::ORIGIN, at: now + Duration::from_millis(40) },
                GestureEvent::Press { position: Point::ORIGIN, at: now + Duration::from_millis(120) },
            ],
        );
        assert_eq!(state.live, Transform::IDENTITY);
    }

    #[test]
    fn swipe_flips_when_not_zoomed() {
        let now = Instant::now();
        let (_, outcome) = run(
            GestureState::default(),
            &[
                GestureEvent::Press { position: Point::new(300.0, 200.0), at: now },
                GestureEvent::DragMove {
                    position: Point::new(200.0, 205.0),
                    at: now + Duration::from_millis(150),
                },
                GestureEvent::Release {
                    position: Point::new(200.0, 205.0),
                    at: now + Duration::from_millis(200),
                },
            ],
        );
        assert_eq!(outcome, GestureOutcome::Flip(SwipeDirection::Left));
    }

    #[test]
    fn quick_flick_after_long_hold_flips() {
        let now = Instant::now();
        let at = |offset: u64| now + Duration::from_millis(offset);
        let (_, outcome) = run(
            GestureState::default(),
            &[
                GestureEvent::Press { position: Point::new(300.0, 200.0), at: now },
                GestureEvent::DragMove { position: Point::new(280.0, 200.0), at: at(2000) },
                GestureEvent::Release { position: Point::new(280.0, 200.0), at: at(2030) },
            ],
        );
        assert_eq!(outcome, GestureOutcome::Flip(SwipeDirection::Left));
    }

    #[test]
    fn short_drag_that_stops_before_release_does_not_flip() {
        let now = Instant::now();
        let at = |offset: u64| now + Duration::from_millis(offset);
        let (_, outcome) = run(
            GestureState::default(),
            &[
                GestureEvent::Press { position: Point::new(300.0, 200.0), at: now },
                GestureEvent::DragMove { position: Point::new(280.0, 200.0), at: at(40) },
                GestureEvent::Release { position: Point::new(280.0, 200.0), at: at(600) },
            ],
        );
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn swipe_is_ignored_on_index_page_or_when_zoomed() {
        let now = Instant::now();
        let swipe = [
            GestureEvent::Press { position: Point::new(300.0, 200.0), at: now },
            GestureEvent::Release {
                position: Point::new(100.0, 200.0),
                at: now + Duration::from_millis(200),
            },
        ];

        let index_ctx = GestureContext {
            can_flip: false,
            ..ctx()
        };
        let (state, _) = apply_gesture(GestureState::default(), swipe[0], &index_ctx);
        let (_, outcome) = apply_gesture(state, swipe[1], &index_ctx);
        assert_eq!(outcome, GestureOutcome::None);

        let (_, outcome) = run(zoomed(2.0), &swipe);
        assert_ne!(outcome, GestureOutcome::Flip(SwipeDirection::Left));
    }

    #[test]
    fn zoom_buttons_step_and_clamp() {
        let (state, outcome) = run(GestureState::default(), &[GestureEvent::ZoomIn]);
        assert_eq!(outcome, GestureOutcome::Animate);
        assert_abs_diff_eq!(state.committed.scale.value(), 1.5);

        let (state, _) = run(
            state,
            &[
                GestureEvent::ZoomIn,
                GestureEvent::ZoomIn,
                GestureEvent::ZoomIn,
                GestureEvent::ZoomIn,
                GestureEvent::ZoomIn,
                GestureEvent::ZoomIn,
            ],
        );
        assert_abs_diff_eq!(state.committed.scale.value(), 4.0);

        let (_, outcome) = run(state, &[GestureEvent::ZoomIn]);
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn zoom_out_to_one_resets_pan() {
        let mut start = zoomed(1.5);
        start.committed.pan = Vector::new(40.0, 40.0);
        start.live.pan = Vector::new(40.0, 40.0);

        let (state, _) = run(start, &[GestureEvent::ZoomOut]);
        assert_eq!(state.committed, Transform::IDENTITY);
    }

    #[test]
    fn zoom_out_reclamps_pan() {
        let mut start = zoomed(3.0);
        start.committed.pan = Vector::new(400.0, 0.0);
        start.live.pan = Vector::new(400.0, 0.0);

        let (state, _) = run(start, &[GestureEvent::ZoomOut]);
        // Scale 2.5 allows 300 px horizontally.
        assert_abs_diff_eq!(state.committed.pan.x, 300.0);
    }

    #[test]
    fn wheel_steps_by_wheel_step() {
        let (state, _) = run(GestureState::default(), &[GestureEvent::Wheel { notches: 1.0 }]);
        assert_abs_diff_eq!(state.committed.scale.value(), 1.2, epsilon = 1e-5);

        let (state, _) = run(state, &[GestureEvent::Wheel { notches: -1.0 }]);
        assert_eq!(state.committed, Transform::IDENTITY);
    }

    #[test]
    fn reset_returns_to_identity() {
        let (state, outcome) = run(zoomed(3.0), &[GestureEvent::Reset]);
        assert_eq!(outcome, GestureOutcome::Animate);
        assert_eq!(state.committed, Transform::IDENTITY);

        let (_, outcome) = run(state, &[GestureEvent::Reset]);
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn cancel_restores_committed_transform() {
        let (state, _) = run(
            zoomed(2.0),
            &[
                GestureEvent::PinchStart { distance: 100.0 },
                GestureEvent::PinchMove { distance: 180.0 },
                GestureEvent::Cancel,
            ],
        );
        assert_abs_diff_eq!(state.live.scale.value(), 2.0);
        assert!(!state.is_active());
    }
}
