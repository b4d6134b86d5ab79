// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Holds the size of the image area and clamps pan offsets to it. A page
//! zoomed by `s` overflows the area by `axis · (s − 1)`, so each axis may be
//! panned by half of that in either direction.

use crate::config::IMAGE_AREA_HEIGHT_RATIO;
use crate::ui::state::zoom::ZoomScale;
use iced::{Size, Vector};

/// Size of the area the page is panned within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::from_window(Size::new(1024.0, 768.0))
    }
}

impl ViewportState {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Image area of a window: the full width and a fixed share of the height.
    #[must_use]
    pub fn from_window(size: Size) -> Self {
        Self::new(size.width, size.height * IMAGE_AREA_HEIGHT_RATIO)
    }

    /// Largest pan offset per axis at `scale`.
    #[must_use]
    pub fn pan_bound(&self, scale: ZoomScale) -> Vector {
        let overflow = scale.value() - 1.0;
        Vector::new(self.width * overflow / 2.0, self.height * overflow / 2.0)
    }

    /// Clamps each axis of `pan` into `±pan_bound(scale)`.
    #[must_use]
    pub fn clamp_pan(&self, pan: Vector, scale: ZoomScale) -> Vector {
        let bound = self.pan_bound(scale);
        Vector::new(pan.x.clamp(-bound.x, bound.x), pan.y.clamp(-bound.y, bound.y))
    }
}
