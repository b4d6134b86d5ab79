// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to ease the drawn zoom and pan towards their targets.
//!
//! Springs are configured in the friction/tension units of Facebook's
//! origami tool and converted to physical stiffness and damping with the
//! same formulas React Native's `Animated.spring` uses.

use crate::config::{SPRING_FRICTION, SPRING_TENSION};
use crate::ui::state::Transform;
use iced::Vector;
use std::time::{Duration, Instant};

/// Integration step; smaller than any frame so the spring stays stable.
const STEP: Duration = Duration::from_millis(1);

/// Frames further apart than this are treated as a stall and not replayed.
const MAX_CATCH_UP: Duration = Duration::from_millis(64);

const REST_DISPLACEMENT: f32 = 0.001;
const REST_SPEED: f32 = 0.001;

/// Physical spring parameters (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    /// Converts origami friction and tension.
    #[must_use]
    pub fn from_origami(friction: f32, tension: f32) -> Self {
        let stiffness = if tension == 0.0 { 0.0 } else { (tension - 30.0) * 3.62 + 194.0 };
        let damping = if friction == 0.0 { 0.0 } else { (friction - 8.0) * 3.0 + 25.0 };
        Self { stiffness, damping }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_origami(SPRING_FRICTION, SPRING_TENSION)
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    config: SpringConfig,
}

impl Spring {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config: SpringConfig::default(),
        }
    }

    /// Jumps to `value` with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.is_at_rest() {
            return;
        }
        let dt = STEP.as_secs_f32();
        let steps = (elapsed.as_secs_f64() / STEP.as_secs_f64()).round() as u32;
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let acceleration =
                -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += acceleration * dt;
            self.value += self.velocity * dt;
        }
        if (self.value - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
        {
            self.snap_to(self.target);
        }
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

/// Springs for scale and both pan axes, advanced together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTransform {
    scale: Spring,
    pan_x: Spring,
    pan_y: Spring,
    last_tick: Option<Instant>,
}

impl Default for SpringTransform {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl SpringTransform {
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self {
            scale: Spring::new(transform.scale.value()),
            pan_x: Spring::new(transform.pan.x),
            pan_y: Spring::new(transform.pan.y),
            last_tick: None,
        }
    }

    /// Starts moving towards `transform` from wherever the springs are now.
    pub fn animate_to(&mut self, transform: Transform, now: Instant) {
        self.scale.target = transform.scale.value();
        self.pan_x.target = transform.pan.x;
        self.pan_y.target = transform.pan.y;
        self.last_tick = Some(now);
    }

    /// Follows `transform` directly (pointer tracking).
    pub fn snap_to(&mut self, transform: Transform) {
        self.scale.snap_to(transform.scale.value());
        self.pan_x.snap_to(transform.pan.x);
        self.pan_y.snap_to(transform.pan.y);
        self.last_tick = None;
    }

    /// Advances all springs to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(last) = self.last_tick else {
            return;
        };
        let elapsed = now.saturating_duration_since(last).min(MAX_CATCH_UP);
        self.scale.advance(elapsed);
        self.pan_x.advance(elapsed);
        self.pan_y.advance(elapsed);
        self.last_tick = if self.is_at_rest() { None } else { Some(now) };
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.scale.is_at_rest() && self.pan_x.is_at_rest() && self.pan_y.is_at_rest()
    }

    /// Scale to draw. May briefly overshoot the zoom range.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        Vector::new(self.pan_x.value, self.pan_y.value)
    }
}
