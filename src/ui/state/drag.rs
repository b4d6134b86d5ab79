// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a single pressed pointer: where it went down, where it was last
//! seen, and the last few timestamped positions so a release can be
//! classified by how fast the pointer was moving at the end of the drag.

use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Release velocity is measured over this trailing window.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(50);

const SAMPLE_CAPACITY: usize = 8;

/// Manages single-pointer drag state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Position where the drag started
    pub start_position: Point,

    /// Most recent pointer position
    pub last_position: Point,

    /// When the pointer went down
    pub started_at: Instant,

    /// Oldest first; never empty.
    samples: [(Point, Instant); SAMPLE_CAPACITY],
    len: usize,
}

impl DragState {
    #[must_use]
    pub fn start(position: Point, at: Instant) -> Self {
        Self {
            start_position: position,
            last_position: position,
            started_at: at,
            samples: [(position, at); SAMPLE_CAPACITY],
            len: 1,
        }
    }

    /// Records a new position and returns the movement since the last one.
    pub fn move_to(&mut self, position: Point, at: Instant) -> Vector {
        let delta = position - self.last_position;
        self.last_position = position;

        if self.len == SAMPLE_CAPACITY {
            self.samples.copy_within(1.., 0);
            self.len -= 1;
        }
        self.samples[self.len] = (position, at);
        self.len += 1;

        delta
    }

    /// Total travel since the drag started.
    #[must_use]
    pub fn travel(&self, position: Point) -> Vector {
        position - self.start_position
    }

    /// Pointer velocity in px/ms over the last [`VELOCITY_WINDOW`] before
    /// `at`.
    ///
    /// The pointer is assumed to rest at the last sample seen before the
    /// window opened, so a long hold followed by a quick flick still
    /// reports the speed of the flick.
    #[must_use]
    pub fn release_velocity(&self, position: Point, at: Instant) -> Vector {
        let samples = &self.samples[..self.len];
        let window_start = at.checked_sub(VELOCITY_WINDOW);

        let anchor = window_start
            .and_then(|start| samples.iter().rev().find(|(_, seen)| *seen <= start))
            .or_else(|| samples.first())
            .copied()
            .unwrap_or((self.start_position, self.started_at));

        let since = match window_start {
            Some(start) => anchor.1.max(start),
            None => anchor.1,
        };
        let elapsed_ms = (at.saturating_duration_since(since).as_secs_f32() * 1000.0).max(1.0);

        (position - anchor.0) * (1.0 / elapsed_ms)
    }
}
