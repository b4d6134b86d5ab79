// SPDX-License-Identifier: MPL-2.0
//! Calendar data: the per-year page list and navigation arithmetic.
//!
//! Everything here is pure. Building a page list only formats URL strings;
//! downloading the images is the job of [`crate::media`].
//!
//! # Examples
//!
//! ```
//! use tithi_lens::calendar::{months_for_year, CalendarPosition};
//!
//! let pages = months_for_year(2024);
//! assert_eq!(pages.len(), 13);
//! assert!(pages[12].back_image_url.is_none());
//!
//! let after_index = CalendarPosition::new(2024, 12).next();
//! assert_eq!(after_index, CalendarPosition::start_of(2025));
//! ```

pub mod catalog;
pub mod month;
pub mod position;

pub use catalog::{
    is_supported_year, Catalog, Face, DEFAULT_ARCHIVE_ROOT, DEFAULT_FALLBACK_YEAR,
    SUPPORTED_YEARS,
};
pub use month::{MonthDescriptor, INDEX_PAGE_POSITION, PAGES_PER_YEAR};
pub use position::CalendarPosition;

/// Returns the 13 pages of `year` from the default archive.
///
/// See [`Catalog::months_for_year`].
#[must_use]
pub fn months_for_year(year: i32) -> Vec<MonthDescriptor> {
    Catalog::default().months_for_year(year)
}
