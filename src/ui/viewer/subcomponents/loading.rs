// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.
//!
//! Loading is tied to one image URL. Results for any other URL are stale and
//! never end the loading state. A flip additionally keeps the indicator up
//! until its animation has settled.

use crate::config::FLIP_SETTLE_MS;
use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Loading state for the calendar viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Image the viewer is waiting for.
    awaiting: Option<String>,
    /// The indicator stays visible at least until this instant.
    hold_until: Option<Instant>,
    /// i18n key of the last failure for the active image.
    failure: Option<&'static str>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The active image changed; `ready` tells whether it is already available.
    Start { url: String, ready: bool },
    /// Keep the indicator up until a flip animation has settled.
    HoldForFlip { settles_at: Instant },
    ImageReady { url: String },
    ImageFailed { url: String, key: &'static str },
    /// Animate the spinner and release an expired hold.
    SpinnerTick(Instant),
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Loading finished (successfully or not).
    Finished,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let was_loading = self.is_loading();
        match msg {
            Message::Start { url, ready } => {
                self.failure = None;
                self.hold_until = None;
                self.awaiting = if ready { None } else { Some(url) };
            }
            Message::HoldForFlip { settles_at } => {
                let until = settles_at + Duration::from_millis(FLIP_SETTLE_MS);
                self.hold_until = Some(self.hold_until.map_or(until, |held| held.max(until)));
            }
            Message::ImageReady { url } => {
                if self.awaiting.as_deref() != Some(url.as_str()) {
                    return Effect::None;
                }
                self.awaiting = None;
            }
            Message::ImageFailed { url, key } => {
                if self.awaiting.as_deref() != Some(url.as_str()) {
                    return Effect::None;
                }
                self.awaiting = None;
                self.failure = Some(key);
            }
            Message::SpinnerTick(now) => {
                if self.hold_until.is_some_and(|until| now >= until) {
                    self.hold_until = None;
                }
                if self.is_loading() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                    return Effect::None;
                }
            }
        }

        if was_loading && !self.is_loading() {
            self.spinner_rotation = 0.0;
            Effect::Finished
        } else {
            Effect::None
        }
    }

    /// Check if currently loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some() || self.hold_until.is_some()
    }

    /// URL of the image being waited for.
    #[must_use]
    pub fn awaiting(&self) -> Option<&str> {
        self.awaiting.as_deref()
    }

    /// i18n key describing why the active image failed.
    #[must_use]
    pub fn failure(&self) -> Option<&'static str> {
        self.failure
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org/calender-2025/jan-2025-front.jpg";
    const OTHER: &str = "https://example.org/calender-2025/feb-2025-front.jpg";

    fn start(state: &mut State, url: &str) {
        state.handle(Message::Start {
            url: url.to_string(),
            ready: false,
        });
    }

    #[test]
    fn start_loading_sets_state() {
        let mut state = State::default();
        assert!(!state.is_loading());

        start(&mut state, URL);
        assert!(state.is_loading());
        assert_eq!(state.awaiting(), Some(URL));
    }

    #[test]
    fn ready_image_does_not_load() {
        let mut state = State::default();
        state.handle(Message::Start {
            url: URL.to_string(),
            ready: true,
        });
        assert!(!state.is_loading());
    }

    #[test]
    fn matching_result_finishes_loading() {
        let mut state = State::default();
        start(&mut state, URL);

        let effect = state.handle(Message::ImageReady { url: URL.to_string() });
        assert_eq!(effect, Effect::Finished);
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut state = State::default();
        start(&mut state, URL);

        let effect = state.handle(Message::ImageReady { url: OTHER.to_string() });
        assert_eq!(effect, Effect::None);
        assert!(state.is_loading());

        state.handle(Message::ImageFailed {
            url: OTHER.to_string(),
            key: "error-image-network",
        });
        assert!(state.is_loading());
        assert_eq!(state.failure(), None);
    }

    #[test]
    fn failure_ends_loading_and_records_key() {
        let mut state = State::default();
        start(&mut state, URL);

        let effect = state.handle(Message::ImageFailed {
            url: URL.to_string(),
            key: "error-image-timeout",
        });
        assert_eq!(effect, Effect::Finished);
        assert_eq!(state.failure(), Some("error-image-timeout"));

        start(&mut state, OTHER);
        assert_eq!(state.failure(), None);
    }

    #[test]
    fn flip_hold_outlasts_cached_image() {
        let now = Instant::now();
        let settles_at = now + Duration::from_millis(350);
        let mut state = State::default();

        state.handle(Message::Start {
            url: URL.to_string(),
            ready: true,
        });
        state.handle(Message::HoldForFlip { settles_at });
        assert!(state.is_loading());

        state.handle(Message::SpinnerTick(settles_at));
        assert!(state.is_loading());
        assert!(state.spinner_rotation() > 0.0);

        let effect = state.handle(Message::SpinnerTick(
            settles_at + Duration::from_millis(FLIP_SETTLE_MS),
        ));
        assert_eq!(effect, Effect::Finished);
        assert!(!state.is_loading());
    }

    #[test]
    fn hold_and_download_must_both_finish() {
        let now = Instant::now();
        let mut state = State::default();
        start(&mut state, URL);
        state.handle(Message::HoldForFlip { settles_at: now });

        state.handle(Message::SpinnerTick(now + Duration::from_secs(1)));
        assert!(state.is_loading());

        let effect = state.handle(Message::ImageReady { url: URL.to_string() });
        assert_eq!(effect, Effect::Finished);
    }
}
