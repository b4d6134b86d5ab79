// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration tweens with CSS-style easing curves.

use std::time::{Duration, Instant};

/// Easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curve used by the page flip.
    pub const FLIP: Self = Self::CubicBezier(0.33, 1.0, 0.68, 1.0);

    /// Eased progress for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    // Endpoints fixed at 0 and 1.
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solves the curve for `x = t` and returns its `y`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let mut s = t;
    for _ in 0..8 {
        let error = bezier_component(x1, x2, s) - t;
        if error.abs() < 1e-5 {
            return bezier_component(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    // Newton did not converge; bisect instead.
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_component(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    bezier_component(y1, y2, s)
}

/// A value moving from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }
}
