// SPDX-License-Identifier: MPL-2.0
//! `tithi_lens` shows the yearly Amar Granthalaya calendar artwork, built with
//! the Iced GUI framework.
//!
//! Each year has thirteen pages (January to December plus an index page),
//! and every month page has a front and a back face. Pages can be zoomed with
//! pinch, wheel or buttons, panned while zoomed, and flipped with a swipe.
//! Images are downloaded from a static archive and kept in an in-memory LRU
//! cache.

#![doc(html_root_url = "https://docs.rs/tithi_lens/0.1.0")]

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
