// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure pointer and transform logic, kept apart from the iced widgets so it
//! can be tested without a window.

pub mod drag;
pub mod gesture;
pub mod swipe;
pub mod tap;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use gesture::{apply_gesture, GestureContext, GestureEvent, GestureOutcome, GestureState, Transform};
pub use swipe::{classify_swipe, SwipeDirection};
pub use tap::TapDetector;
pub use viewport::ViewportState;
pub use zoom::{ZoomScale, ZoomStep};
