// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation used by the viewer.
//!
//! Nothing in here owns a timer. Callers pass `Instant`s in (from the tick
//! subscription in the app, or fabricated ones in tests) and read values out.

pub mod spring;
pub mod tween;

pub use spring::{Spring, SpringConfig, SpringTransform};
pub use tween::{Easing, Tween};

/// Identifies one run of an animation so that a superseded run's completion
/// can be recognised and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Advances to a new generation and returns it.
    pub fn bump(&mut self) -> Self {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_yields_distinct_generations() {
        let mut generation = Generation::default();
        let first = generation.bump();
        let second = generation.bump();
        assert_ne!(first, second);
        assert_eq!(generation, second);
        assert_eq!(second.value(), 2);
    }
}
