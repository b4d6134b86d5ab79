// SPDX-License-Identifier: MPL-2.0
//! Fetching, probing and caching of the calendar artwork.
//!
//! Downloads run as async tasks on the iced runtime. Results come back
//! tagged with their URL and are kept in an [`ImageCache`] so that flipping
//! back and forth never downloads the same page twice.

pub mod cache;
pub mod fetch;
pub mod image;

pub use cache::{CacheConfig, CacheStats, ImageCache};
pub use fetch::{build_client, load_image};
pub use image::ImageData;
