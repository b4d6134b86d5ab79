// SPDX-License-Identifier: MPL-2.0
//! Year catalog: which years have artwork and where their images live.
//!
//! Each supported year maps to one archive folder; every page URL is built
//! from that folder plus the shared month table. Years outside the catalog
//! resolve to placeholder-service URLs instead of failing.

use super::month::{MonthDescriptor, MonthInfo, MONTHS};

/// Root of the image archive that hosts the per-year folders.
pub const DEFAULT_ARCHIVE_ROOT: &str = "https://ik.imagekit.io/amargranthalya";

/// Year shown when the current calendar year has no artwork.
pub const DEFAULT_FALLBACK_YEAR: i32 = 2026;

/// Placeholder service used for years without artwork.
pub const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/800x1200/FEF3C7/D97706";

/// Years with published artwork, in ascending order.
pub const SUPPORTED_YEARS: [i32; 6] = [2021, 2022, 2023, 2024, 2025, 2026];

/// Archive folder per year. Folders up to 2023 carry the historical
/// "calander" spelling.
const YEAR_FOLDERS: [(i32, &str); 6] = [
    (2021, "calander-2021"),
    (2022, "calander-2022"),
    (2023, "calander-2023"),
    (2024, "calender-2024"),
    (2025, "calender-2025"),
    (2026, "calender-2026"),
];

/// Returns whether artwork exists for `year`.
#[must_use]
pub fn is_supported_year(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

/// Which face of a month page an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    fn file_suffix(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }
}

/// Resolves page descriptors for any year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    archive_root: String,
    fallback_year: i32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            archive_root: DEFAULT_ARCHIVE_ROOT.to_string(),
            fallback_year: DEFAULT_FALLBACK_YEAR,
        }
    }
}

impl Catalog {
    /// Creates a catalog reading from `archive_root` (for mirrors).
    ///
    /// A trailing slash on the root is ignored. An unsupported fallback year
    /// is replaced by [`DEFAULT_FALLBACK_YEAR`].
    #[must_use]
    pub fn new(archive_root: impl Into<String>, fallback_year: i32) -> Self {
        let root: String = archive_root.into();
        let fallback_year = if is_supported_year(fallback_year) {
            fallback_year
        } else {
            DEFAULT_FALLBACK_YEAR
        };
        Self {
            archive_root: root.trim_end_matches('/').to_string(),
            fallback_year,
        }
    }

    #[must_use]
    pub fn archive_root(&self) -> &str {
        &self.archive_root
    }

    #[must_use]
    pub fn fallback_year(&self) -> i32 {
        self.fallback_year
    }

    /// Base URL of the folder holding `year`'s images, if the year is known.
    #[must_use]
    pub fn year_base_url(&self, year: i32) -> Option<String> {
        YEAR_FOLDERS
            .iter()
            .find(|(known, _)| *known == year)
            .map(|(_, folder)| format!("{}/{}", self.archive_root, folder))
    }

    /// Returns the 13 pages of `year`: January to December, then the index
    /// page. Never fails; unknown years get placeholder URLs.
    #[must_use]
    pub fn months_for_year(&self, year: i32) -> Vec<MonthDescriptor> {
        match self.year_base_url(year) {
            Some(base) => MONTHS
                .iter()
                .map(|month| archived_descriptor(&base, month, year))
                .collect(),
            None => MONTHS
                .iter()
                .map(|month| placeholder_descriptor(month, year))
                .collect(),
        }
    }

    /// Picks the year to show at start-up for the given calendar year.
    #[must_use]
    pub fn resolve_year(&self, year: i32) -> i32 {
        if is_supported_year(year) {
            year
        } else {
            self.fallback_year
        }
    }
}

fn archived_descriptor(base: &str, month: &MonthInfo, year: i32) -> MonthDescriptor {
    if month.is_index_page() {
        return MonthDescriptor {
            id: month.id,
            name: month.name,
            localized_name: month.localized_name,
            image_url: format!("{base}/{}-{year}.jpg", month.short_code),
            back_image_url: None,
        };
    }

    MonthDescriptor {
        id: month.id,
        name: month.name,
        localized_name: month.localized_name,
        image_url: face_url(base, month, year, Face::Front),
        back_image_url: Some(face_url(base, month, year, Face::Back)),
    }
}

fn face_url(base: &str, month: &MonthInfo, year: i32, face: Face) -> String {
    format!(
        "{base}/{}-{year}-{}.jpg",
        month.short_code,
        face.file_suffix()
    )
}

fn placeholder_descriptor(month: &MonthInfo, year: i32) -> MonthDescriptor {
    let back_image_url = if month.is_index_page() {
        None
    } else {
        Some(placeholder_url(month, year, Face::Back))
    };

    MonthDescriptor {
        id: month.id,
        name: month.name,
        localized_name: month.localized_name,
        image_url: placeholder_url(month, year, Face::Front),
        back_image_url,
    }
}

/// Placeholder image URL whose caption names the page, year and face.
#[must_use]
pub fn placeholder_url(month: &MonthInfo, year: i32, face: Face) -> String {
    let label = format!("{} {} {}", month.name, year, face.label());
    format!("{PLACEHOLDER_BASE}?text={}", urlencoding::encode(&label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::month::{INDEX_PAGE_POSITION, PAGES_PER_YEAR};

    #[test]
    fn supported_year_uses_archive_urls() {
        let months = Catalog::default().months_for_year(2024);
        assert_eq!(months.len(), PAGES_PER_YEAR);
        assert_eq!(
            months[0].image_url,
            "https://ik.imagekit.io/amargranthalya/calender-2024/jan-2024-front.jpg"
        );
        assert_eq!(
            months[0].back_image_url.as_deref(),
            Some("https://ik.imagekit.io/amargranthalya/calender-2024/jan-2024-back.jpg")
        );
    }

    #[test]
    fn index_page_has_single_image() {
        let months = Catalog::default().months_for_year(2024);
        let index = &months[INDEX_PAGE_POSITION];
        assert_eq!(
            index.image_url,
            "https://ik.imagekit.io/amargranthalya/calender-2024/tithi-darpan-2024.jpg"
        );
        assert!(index.back_image_url.is_none());
    }

    #[test]
    fn early_years_keep_historical_folder_spelling() {
        let catalog = Catalog::default();
        for year in [2021, 2022, 2023] {
            let base = catalog.year_base_url(year).unwrap();
            assert!(base.ends_with(&format!("calander-{year}")), "{base}");
        }
        for year in [2024, 2025, 2026] {
            let base = catalog.year_base_url(year).unwrap();
            assert!(base.ends_with(&format!("calender-{year}")), "{base}");
        }
    }

    #[test]
    fn month_short_codes_are_used_verbatim() {
        let months = Catalog::default().months_for_year(2022);
        assert!(months[2].image_url.ends_with("/march-2022-front.jpg"));
        assert!(months[7].image_url.ends_with("/aug-2022-front.jpg"));
        assert!(months[8]
            .back_image_url
            .as_deref()
            .unwrap()
            .ends_with("/sep-2022-back.jpg"));
    }

    #[test]
    fn unsupported_year_yields_placeholders() {
        let months = Catalog::default().months_for_year(2030);
        assert_eq!(months.len(), PAGES_PER_YEAR);
        for month in &months {
            assert!(month.image_url.starts_with(PLACEHOLDER_BASE));
            assert!(month.image_url.contains("2030"));
            let first_word = month.name.split(' ').next().unwrap();
            assert!(month.image_url.contains(first_word));
        }
        for month in &months[..INDEX_PAGE_POSITION] {
            assert!(month.back_image_url.is_some());
        }
        assert!(months[INDEX_PAGE_POSITION].back_image_url.is_none());
    }

    #[test]
    fn placeholder_label_is_percent_encoded() {
        let url = placeholder_url(&MONTHS[0], 2019, Face::Back);
        assert_eq!(
            url,
            "https://via.placeholder.com/800x1200/FEF3C7/D97706?text=January%202019%20Back"
        );
    }

    #[test]
    fn mirror_root_replaces_archive_host() {
        let catalog = Catalog::new("https://mirror.example.org/cal/", 2025);
        let months = catalog.months_for_year(2025);
        assert_eq!(
            months[11].image_url,
            "https://mirror.example.org/cal/calender-2025/dec-2025-front.jpg"
        );
    }

    #[test]
    fn unsupported_fallback_year_is_replaced() {
        let catalog = Catalog::new(DEFAULT_ARCHIVE_ROOT, 1999);
        assert_eq!(catalog.fallback_year(), DEFAULT_FALLBACK_YEAR);
        assert_eq!(catalog.resolve_year(2031), DEFAULT_FALLBACK_YEAR);
        assert_eq!(catalog.resolve_year(2022), 2022);
    }
}
