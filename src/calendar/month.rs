// SPDX-License-Identifier: MPL-2.0
//! Month descriptors and the fixed month table shared by every year.

/// Id of the 13th entry, the "Tithi Darpan" index page.
pub const INDEX_PAGE_ID: u8 = 13;

/// Number of pages per calendar year (12 months + the index page).
pub const PAGES_PER_YEAR: usize = 13;

/// Position of the index page inside a year's page list.
pub const INDEX_PAGE_POSITION: usize = PAGES_PER_YEAR - 1;

/// Static naming data for one calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    pub id: u8,
    pub name: &'static str,
    pub localized_name: &'static str,
    /// File-name code used by the image archive.
    pub short_code: &'static str,
}

impl MonthInfo {
    /// Returns whether this entry is the single-image index page.
    #[must_use]
    pub fn is_index_page(&self) -> bool {
        self.id == INDEX_PAGE_ID
    }
}

/// Pages in display order: January to December, then the index page.
pub const MONTHS: [MonthInfo; PAGES_PER_YEAR] = [
    MonthInfo { id: 1, name: "January", localized_name: "जनवरी", short_code: "jan" },
    MonthInfo { id: 2, name: "February", localized_name: "फरवरी", short_code: "feb" },
    MonthInfo { id: 3, name: "March", localized_name: "मार्च", short_code: "march" },
    MonthInfo { id: 4, name: "April", localized_name: "अप्रैल", short_code: "april" },
    MonthInfo { id: 5, name: "May", localized_name: "मई", short_code: "may" },
    MonthInfo { id: 6, name: "June", localized_name: "जून", short_code: "june" },
    MonthInfo { id: 7, name: "July", localized_name: "जुलाई", short_code: "july" },
    MonthInfo { id: 8, name: "August", localized_name: "अगस्त", short_code: "aug" },
    MonthInfo { id: 9, name: "September", localized_name: "सितंबर", short_code: "sep" },
    MonthInfo { id: 10, name: "October", localized_name: "अक्टूबर", short_code: "oct" },
    MonthInfo { id: 11, name: "November", localized_name: "नवंबर", short_code: "nov" },
    MonthInfo { id: 12, name: "December", localized_name: "दिसंबर", short_code: "dec" },
    MonthInfo {
        id: INDEX_PAGE_ID,
        name: "Tithi Darpan",
        localized_name: "तिथि दर्पण",
        short_code: "tithi-darpan",
    },
];

/// One calendar page of a given year with its image references.
///
/// Built fresh by [`crate::calendar::months_for_year`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDescriptor {
    pub id: u8,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub image_url: String,
    /// Absent for the index page.
    pub back_image_url: Option<String>,
}

impl MonthDescriptor {
    /// URL to render for the back face. Falls back to the front image when
    /// the page has no back side.
    #[must_use]
    pub fn back_or_front_url(&self) -> &str {
        self.back_image_url.as_deref().unwrap_or(&self.image_url)
    }

    /// Returns whether this page can be flipped to a back face.
    #[must_use]
    pub fn has_back(&self) -> bool {
        self.back_image_url.is_some()
    }

    #[must_use]
    pub fn is_index_page(&self) -> bool {
        self.id == INDEX_PAGE_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_is_in_calendar_order() {
        for (position, month) in MONTHS.iter().enumerate() {
            assert_eq!(usize::from(month.id), position + 1);
        }
        assert!(MONTHS[INDEX_PAGE_POSITION].is_index_page());
    }

    #[test]
    fn back_url_falls_back_to_front() {
        let descriptor = MonthDescriptor {
            id: INDEX_PAGE_ID,
            name: "Tithi Darpan",
            localized_name: "तिथि दर्पण",
            image_url: "front.jpg".to_string(),
            back_image_url: None,
        };
        assert_eq!(descriptor.back_or_front_url(), "front.jpg");
        assert!(!descriptor.has_back());
    }
}
