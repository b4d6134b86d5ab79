// SPDX-License-Identifier: MPL-2.0
//! Flip sub-component: which face of the month is shown and the slide
//! animation between the two.

use crate::config::FLIP_DURATION_MS;
use crate::ui::animation::{Easing, Tween};
use std::time::{Duration, Instant};

/// Placement of one face while drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    /// Horizontal offset in logical pixels.
    pub translate_x: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl FaceLayout {
    /// Front face at flip progress `p` (0 = front shown, 1 = back shown).
    #[must_use]
    pub fn front(width: f32, p: f32) -> Self {
        Self {
            translate_x: -width * p,
            scale: 1.0 - 0.1 * p,
            opacity: 1.0 - p,
        }
    }

    /// Back face at flip progress `p`.
    #[must_use]
    pub fn back(width: f32, p: f32) -> Self {
        Self {
            translate_x: width * (1.0 - p),
            scale: 0.9 + 0.1 * p,
            opacity: p,
        }
    }
}

/// Flip sub-component state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    is_flipped: bool,
    animation: Option<Tween>,
}

/// Messages for the flip sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggle { now: Instant },
    /// Show the front face immediately (after navigation).
    Reset,
    Tick(Instant),
}

/// Effects produced by the flip sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The shown face changed; the animation ends at `settles_at`.
    Flipped {
        is_flipped: bool,
        settles_at: Instant,
    },
    AnimationFinished,
}

impl State {
    /// Handle a flip message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle { now } => {
                let from = self.progress(now);
                self.is_flipped = !self.is_flipped;
                let to = if self.is_flipped { 1.0 } else { 0.0 };
                let tween = Tween::new(
                    from,
                    to,
                    now,
                    Duration::from_millis(FLIP_DURATION_MS),
                    Easing::FLIP,
                );
                self.animation = Some(tween);
                Effect::Flipped {
                    is_flipped: self.is_flipped,
                    settles_at: tween.ends_at(),
                }
            }
            Message::Reset => {
                self.is_flipped = false;
                self.animation = None;
                Effect::None
            }
            Message::Tick(now) => match self.animation {
                Some(tween) if tween.is_finished(now) => {
                    self.animation = None;
                    Effect::AnimationFinished
                }
                _ => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Eased flip progress at `now`: 0 shows the front, 1 the back.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.animation {
            Some(tween) => tween.value(now),
            None if self.is_flipped => 1.0,
            None => 0.0,
        }
    }

    /// Layouts of (front, back) for a pane of `width`.
    #[must_use]
    pub fn layouts(&self, width: f32, now: Instant) -> (FaceLayout, FaceLayout) {
        let p = self.progress(now);
        (FaceLayout::front(width, p), FaceLayout::back(width, p))
    }
}
