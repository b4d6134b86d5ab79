// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect (where it reports
//! back), and handle() method. The main component.rs orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Fade-out, page swap, fade-in
//!     ├── flip       - Front/back face and its slide animation
//!     ├── zoom       - Gesture state machine + spring-eased transform
//!     ├── pointer    - Raw touch/mouse input to gesture events
//!     └── loading    - Active image tracking and spinner
//! ```

pub mod flip;
pub mod loading;
pub mod navigation;
pub mod pointer;
pub mod zoom;
