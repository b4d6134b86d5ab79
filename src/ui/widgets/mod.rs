// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod calendar_canvas;

pub use animated_spinner::AnimatedSpinner;
pub use calendar_canvas::CalendarCanvas;
