// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe classification.

use crate::config::{SWIPE_DOMINANCE_RATIO, SWIPE_MIN_DISTANCE, SWIPE_MIN_VELOCITY};
use iced::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Classifies a released drag.
///
/// A swipe needs enough horizontal travel or enough horizontal speed at
/// release (`velocity` in px/ms), and the horizontal travel must dominate
/// the vertical travel.
#[must_use]
pub fn classify_swipe(travel: Vector, velocity: Vector) -> Option<SwipeDirection> {
    let dx = travel.x.abs();
    let dy = travel.y.abs();
    let velocity = velocity.x.abs();

    let far_or_fast = dx > SWIPE_MIN_DISTANCE || velocity > SWIPE_MIN_VELOCITY;
    let horizontal = dx > SWIPE_DOMINANCE_RATIO * dy;

    if far_or_fast && horizontal {
        Some(if travel.x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_horizontal_drag_is_a_swipe() {
        assert_eq!(
            classify_swipe(Vector::new(-80.0, 10.0), Vector::new(-0.2, 0.0)),
            Some(SwipeDirection::Left)
        );
        assert_eq!(
            classify_swipe(Vector::new(30.0, 0.0), Vector::new(0.0, 0.0)),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn short_fast_flick_is_a_swipe() {
        assert_eq!(
            classify_swipe(Vector::new(20.0, 2.0), Vector::new(0.4, 0.0)),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn short_slow_drag_is_not() {
        assert_eq!(classify_swipe(Vector::new(20.0, 0.0), Vector::new(0.04, 0.0)), None);
        // Fast vertical motion at release does not count.
        assert_eq!(classify_swipe(Vector::new(20.0, 0.0), Vector::new(0.0, 1.5)), None);
    }

    #[test]
    fn diagonal_drag_is_not() {
        // 60 is not more than 1.3 × 50
        assert_eq!(classify_swipe(Vector::new(60.0, 50.0), Vector::new(0.6, 0.5)), None);
        assert_eq!(classify_swipe(Vector::new(0.0, 0.0), Vector::new(0.0, 0.0)), None);
    }
}
