// SPDX-License-Identifier: MPL-2.0
//! Zoom scale and step newtypes.

pub use crate::config::{
    DEFAULT_ZOOM_STEP, MAX_ZOOM_SCALE, MAX_ZOOM_STEP, MIN_ZOOM_SCALE, MIN_ZOOM_STEP,
    SNAP_BACK_SCALE,
};

/// Zoom scale, guaranteed to be within the valid range (1×–4×).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The un-zoomed scale.
    pub const IDENTITY: Self = Self(MIN_ZOOM_SCALE);

    /// Creates a new scale, clamping the value to the valid range.
    /// NaN maps to the identity scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::IDENTITY;
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Returns whether a released gesture at this scale should snap back.
    #[must_use]
    pub fn below_snap_threshold(self) -> bool {
        self.0 < SNAP_BACK_SCALE
    }

    /// Increases the scale by the given step.
    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 + step.value())
    }

    /// Decreases the scale by the given step.
    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 - step.value())
    }

    /// Scales the value by a pinch ratio.
    #[must_use]
    pub fn scaled_by(self, ratio: f32) -> Self {
        Self::new(self.0 * ratio)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom step, guaranteed to be within the valid range (0.1–1.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    /// Creates a step without the control-step bounds (used for wheel notches).
    #[must_use]
    pub(crate) fn raw(step: f32) -> Self {
        Self(step.abs().min(MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}
