// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds and step sizes
//! - **Gestures**: Tap and swipe recognition thresholds
//! - **Animation**: Durations and spring constants
//! - **Network**: Download timeout and cache budget

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of an un-zoomed page.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum zoom scale.
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Releasing a gesture below this scale snaps back to the un-zoomed state.
pub const SNAP_BACK_SCALE: f32 = 1.01;

/// Default step for the zoom in/out controls.
pub const DEFAULT_ZOOM_STEP: f32 = 0.5;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.1;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.5;

/// Default scale change per mouse wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.2;

/// Minimum wheel zoom step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.05;

/// Maximum wheel zoom step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 1.0;

/// Scale reached by a double tap on an un-zoomed page.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 2.5;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two presses closer together than this form a double tap (milliseconds).
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Horizontal travel that qualifies a release as a swipe (logical pixels).
pub const SWIPE_MIN_DISTANCE: f32 = 25.0;

/// Horizontal speed that qualifies a release as a swipe (pixels per ms).
pub const SWIPE_MIN_VELOCITY: f32 = 0.2;

/// Horizontal travel must exceed vertical travel by this factor.
pub const SWIPE_DOMINANCE_RATIO: f32 = 1.3;

/// Share of the window height used by the image area for pan bounds.
pub const IMAGE_AREA_HEIGHT_RATIO: f32 = 0.6;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of each half of the navigation fade (milliseconds).
pub const FADE_DURATION_MS: u64 = 150;

/// Duration of the front/back flip animation (milliseconds).
pub const FLIP_DURATION_MS: u64 = 350;

/// Extra time the loading indicator stays up after a flip (milliseconds).
pub const FLIP_SETTLE_MS: u64 = 100;

/// Spring friction in origami units.
pub const SPRING_FRICTION: f32 = 7.0;

/// Spring tension in origami units.
pub const SPRING_TENSION: f32 = 40.0;

/// Tick interval of the animation subscription (milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout for a single image download (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum download timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum download timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default in-memory image cache budget (megabytes).
pub const DEFAULT_CACHE_SIZE_MB: u32 = 192;

/// Minimum image cache budget (megabytes).
pub const MIN_CACHE_SIZE_MB: u32 = 64;

/// Maximum image cache budget (megabytes).
pub const MAX_CACHE_SIZE_MB: u32 = 1024;

/// Downloads larger than this are aborted.
pub const MAX_DOWNLOAD_BYTES: u64 = 32 * 1024 * 1024;

/// User agent sent with every download.
pub const USER_AGENT: &str = concat!("TithiLens/", env!("CARGO_PKG_VERSION"));
