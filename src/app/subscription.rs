// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the viewer through the page canvas; this module
//! forwards the remaining native events (keyboard shortcuts, window size)
//! and drives the animation clock.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use crate::ui::viewer::component;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Toast expiry does not need frame-rate precision.
const IDLE_TICK_MS: u64 = 100;

/// Routes window size changes and uncaptured key presses to the viewer.
///
/// Keys captured by a focused widget never become shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => {
            Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            })),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the periodic tick: frame rate while something animates or loads,
/// a slow clock while only toasts are showing, nothing otherwise.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(IDLE_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
