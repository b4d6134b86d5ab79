// SPDX-License-Identifier: MPL-2.0
//! Double-tap recognition.

use crate::config::DOUBLE_TAP_WINDOW_MS;
use std::time::{Duration, Instant};

/// Remembers the previous press to pair it with the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapDetector {
    last_press: Option<Instant>,
}

impl TapDetector {
    /// Registers a press and returns whether it completes a double tap.
    ///
    /// A recognised double tap consumes both presses, so a third quick press
    /// starts a new pair.
    pub fn press(&mut self, now: Instant) -> bool {
        let window = Duration::from_millis(DOUBLE_TAP_WINDOW_MS);
        match self.last_press {
            Some(previous) if now.saturating_duration_since(previous) < window => {
                self.last_press = None;
                true
            }
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }

    /// Forgets the pending press (e.g. when a pinch begins).
    pub fn cancel(&mut self) {
        self.last_press = None;
    }
}
