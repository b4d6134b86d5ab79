// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - Calendar page viewer with header, year picker and info panel
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Gesture state machine, zoom scale and viewport clamping
//! - [`animation`] - Tweens, easing curves and springs
//! - [`widgets`] - Custom Iced widgets (spinner, calendar canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod animation;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
