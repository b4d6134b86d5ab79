// SPDX-License-Identifier: MPL-2.0
//! Position arithmetic over the endless sequence of calendar pages.
//!
//! Pages of consecutive years are chained: the index page (last entry) of a
//! year is followed by January of the next year.

use super::catalog::Catalog;
use super::month::{INDEX_PAGE_POSITION, PAGES_PER_YEAR};
use chrono::Datelike;

/// A page in the calendar: a year plus an index into its 13 pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPosition {
    pub year: i32,
    /// Index in `[0, 12]`; 12 is the index page.
    pub month_index: usize,
}

impl CalendarPosition {
    /// Creates a position, clamping the index into the page range.
    #[must_use]
    pub fn new(year: i32, month_index: usize) -> Self {
        Self {
            year,
            month_index: month_index.min(INDEX_PAGE_POSITION),
        }
    }

    /// First page (January) of `year`.
    #[must_use]
    pub fn start_of(year: i32) -> Self {
        Self {
            year,
            month_index: 0,
        }
    }

    /// The page after this one, rolling into the next year after the index page.
    ///
    /// Years saturate at the ends of `i32`.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month_index + 1 < PAGES_PER_YEAR {
            Self {
                month_index: self.month_index + 1,
                ..self
            }
        } else {
            Self::start_of(self.year.saturating_add(1))
        }
    }

    /// The page before this one, rolling into the previous year's index page.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month_index > 0 {
            Self {
                month_index: self.month_index - 1,
                ..self
            }
        } else {
            Self {
                year: self.year.saturating_sub(1),
                month_index: INDEX_PAGE_POSITION,
            }
        }
    }

    /// Moves `steps` pages forward (positive) or backward (negative).
    #[must_use]
    pub fn offset(self, steps: i32) -> Self {
        let mut position = self;
        if steps >= 0 {
            for _ in 0..steps {
                position = position.next();
            }
        } else {
            for _ in 0..steps.unsigned_abs() {
                position = position.previous();
            }
        }
        position
    }

    /// Returns whether this position shows the single-faced index page.
    #[must_use]
    pub fn is_index_page(self) -> bool {
        self.month_index == INDEX_PAGE_POSITION
    }

    /// Default position for a given date: the date's month in its year when
    /// artwork exists, otherwise the same month in the catalog's fallback year.
    #[must_use]
    pub fn for_date(catalog: &Catalog, date: impl Datelike) -> Self {
        Self {
            year: catalog.resolve_year(date.year()),
            month_index: date.month0() as usize,
        }
    }

    /// Default position for the current local date.
    #[must_use]
    pub fn today(catalog: &Catalog) -> Self {
        Self::for_date(catalog, chrono::Local::now().date_naive())
    }
}
