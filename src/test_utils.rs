// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Scales, opacities and spring positions are all `f32`; compare them with
//! `approx` rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
