// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: fade-out, page swap, fade-in.
//!
//! Requests arriving while a fade is running are coalesced into the pending
//! target instead of queueing another fade. Relative requests accumulate
//! from the pending target, so three quick "next" presses land three pages
//! ahead after a single fade.

use crate::calendar::CalendarPosition;
use crate::config::FADE_DURATION_MS;
use crate::ui::animation::{Easing, Generation, Tween};
use std::time::{Duration, Instant};

/// Where a navigation request wants to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Next,
    Previous,
    /// An absolute page (today, or January of a selected year).
    Jump(CalendarPosition),
}

impl Request {
    fn resolve(self, from: CalendarPosition) -> CalendarPosition {
        match self {
            Request::Next => from.next(),
            Request::Previous => from.previous(),
            Request::Jump(target) => target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    Idle,
    Out { tween: Tween, generation: Generation },
    In { tween: Tween, generation: Generation },
}

/// Navigation sub-component state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    position: CalendarPosition,
    pending: Option<CalendarPosition>,
    fade: Fade,
    generation: Generation,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navigate { request: Request, now: Instant },
    Tick(Instant),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The page is fully faded out and the position changed; the caller
    /// resets zoom and flip and starts loading the new page.
    Swapped {
        position: CalendarPosition,
        generation: Generation,
    },
    /// The new page finished fading in.
    Settled,
}

impl State {
    #[must_use]
    pub fn new(position: CalendarPosition) -> Self {
        Self {
            position,
            pending: None,
            fade: Fade::Idle,
            generation: Generation::default(),
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Navigate { request, now } => {
                self.request(request, now);
                Effect::None
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    fn request(&mut self, request: Request, now: Instant) {
        let base = self.pending.unwrap_or(self.position);
        let target = request.resolve(base);

        match self.fade {
            Fade::Out { .. } => {
                // Keep fading from wherever the opacity is.
                self.pending = Some(target);
            }
            Fade::In { .. } | Fade::Idle => {
                if target == self.position {
                    return;
                }
                let opacity = self.opacity(now);
                let generation = self.generation.bump();
                self.pending = Some(target);
                self.fade = Fade::Out {
                    tween: fade_tween(opacity, 0.0, now),
                    generation,
                };
                tracing::debug!(
                    year = target.year,
                    month_index = target.month_index,
                    generation = generation.value(),
                    "Navigation started"
                );
            }
        }
    }

    fn tick(&mut self, now: Instant) -> Effect {
        match self.fade {
            Fade::Idle => Effect::None,
            Fade::Out { tween, generation } => {
                if generation != self.generation || !tween.is_finished(now) {
                    return Effect::None;
                }
                let Some(target) = self.pending.take() else {
                    self.fade = Fade::In {
                        tween: fade_tween(0.0, 1.0, now),
                        generation,
                    };
                    return Effect::None;
                };
                self.position = target;
                self.fade = Fade::In {
                    tween: fade_tween(0.0, 1.0, now),
                    generation,
                };
                tracing::info!(
                    year = target.year,
                    month_index = target.month_index,
                    "Showing calendar page"
                );
                Effect::Swapped {
                    position: target,
                    generation,
                }
            }
            Fade::In { tween, generation } => {
                if generation != self.generation || !tween.is_finished(now) {
                    return Effect::None;
                }
                self.fade = Fade::Idle;
                Effect::Settled
            }
        }
    }

    /// The page currently on screen.
    #[must_use]
    pub fn position(&self) -> CalendarPosition {
        self.position
    }

    /// Where the running fade is heading, if it has not swapped yet.
    #[must_use]
    pub fn pending(&self) -> Option<CalendarPosition> {
        self.pending
    }

    /// Opacity of the page at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.fade {
            Fade::Idle => 1.0,
            Fade::Out { tween, .. } | Fade::In { tween, .. } => tween.value(now),
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.fade, Fade::Idle)
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// A fade covering `from → to`; partial fades take proportionally less time.
fn fade_tween(from: f32, to: f32, now: Instant) -> Tween {
    let full = Duration::from_millis(FADE_DURATION_MS);
    let span = (to - from).abs();
    let duration = if span >= 1.0 {
        full
    } else {
        full.mul_f32(span)
    };
    Tween::new(from, to, now, duration, Easing::Ease)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::INDEX_PAGE_POSITION;
    use crate::test_utils::assert_abs_diff_eq;

    const FADE: Duration = Duration::from_millis(FADE_DURATION_MS);

    fn navigate(state: &mut State, request: Request, now: Instant) {
        state.handle(Message::Navigate { request, now });
    }

    #[test]
    fn next_fades_out_swaps_and_fades_in() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::new(2025, 3));

        navigate(&mut state, Request::Next, start);
        assert!(state.is_animating());
        assert_eq!(state.position(), CalendarPosition::new(2025, 3));

        let effect = state.handle(Message::Tick(start + FADE));
        assert!(matches!(
            effect,
            Effect::Swapped { position, .. } if position == CalendarPosition::new(2025, 4)
        ));
        assert_abs_diff_eq!(state.opacity(start + FADE), 0.0);

        let effect = state.handle(Message::Tick(start + FADE * 2));
        assert_eq!(effect, Effect::Settled);
        assert!(!state.is_animating());
        assert_abs_diff_eq!(state.opacity(start + FADE * 2), 1.0);
    }

    #[test]
    fn rapid_requests_accumulate_into_one_fade() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::new(2025, 10));

        navigate(&mut state, Request::Next, start);
        let generation = state.generation();
        navigate(&mut state, Request::Next, start + Duration::from_millis(20));
        navigate(&mut state, Request::Next, start + Duration::from_millis(40));

        assert_eq!(state.generation(), generation);
        assert_eq!(state.pending(), Some(CalendarPosition::start_of(2026)));

        let effect = state.handle(Message::Tick(start + FADE));
        assert!(matches!(
            effect,
            Effect::Swapped { position, .. } if position == CalendarPosition::start_of(2026)
        ));
    }

    #[test]
    fn request_during_fade_in_resumes_from_current_opacity() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::new(2025, 0));

        navigate(&mut state, Request::Next, start);
        state.handle(Message::Tick(start + FADE));

        let midway = start + FADE + FADE / 2;
        let opacity = state.opacity(midway);
        assert!(opacity > 0.0 && opacity < 1.0);

        navigate(&mut state, Request::Next, midway);
        assert_abs_diff_eq!(state.opacity(midway), opacity, epsilon = 1e-4);

        // The shorter fade-out completes before a full fade would.
        let effect = state.handle(Message::Tick(midway + FADE.mul_f32(opacity)));
        assert!(matches!(
            effect,
            Effect::Swapped { position, .. } if position == CalendarPosition::new(2025, 2)
        ));
    }

    #[test]
    fn superseded_fade_in_does_not_settle() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::new(2025, 0));

        navigate(&mut state, Request::Next, start);
        state.handle(Message::Tick(start + FADE));
        navigate(&mut state, Request::Previous, start + FADE + Duration::from_millis(10));

        // The old fade-in would have ended here; the new fade-out is running.
        let effect = state.handle(Message::Tick(start + FADE * 2));
        assert_ne!(effect, Effect::Settled);
        assert!(state.is_animating());
    }

    #[test]
    fn previous_from_january_wraps_to_prior_index_page() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::start_of(2025));

        navigate(&mut state, Request::Previous, start);
        state.handle(Message::Tick(start + FADE));
        assert_eq!(
            state.position(),
            CalendarPosition::new(2024, INDEX_PAGE_POSITION)
        );
    }

    #[test]
    fn jump_to_current_page_is_a_no_op() {
        let start = Instant::now();
        let position = CalendarPosition::new(2025, 5);
        let mut state = State::new(position);

        navigate(&mut state, Request::Jump(position), start);
        assert!(!state.is_animating());
    }

    #[test]
    fn jump_after_relative_requests_wins() {
        let start = Instant::now();
        let mut state = State::new(CalendarPosition::new(2025, 5));

        navigate(&mut state, Request::Next, start);
        navigate(&mut state, Request::Jump(CalendarPosition::start_of(2022)), start);
        state.handle(Message::Tick(start + FADE));
        assert_eq!(state.position(), CalendarPosition::start_of(2022));
    }
}
