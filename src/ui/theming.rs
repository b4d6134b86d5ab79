// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    /// Background behind the calendar page.
    pub page_background: Color,
    pub error: Color,

    pub overlay_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::AMBER_50,
            surface_secondary: palette::AMBER_100,

            text_primary: palette::AMBER_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::AMBER_500,
            brand_secondary: palette::AMBER_600,

            page_background: palette::AMBER_100,
            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_700,

            text_primary: palette::AMBER_100,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::AMBER_400,
            brand_secondary: palette::AMBER_500,

            page_background: palette::GRAY_900,
            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection failures fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// i18n key of the mode's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// The iced theme for this mode, tinted with the amber brand colors.
    #[must_use]
    pub fn theme(self) -> Theme {
        let colors = self.colors();
        let name = if self.is_dark() {
            "Tithi Dark"
        } else {
            "Tithi Light"
        };
        Theme::custom(
            name.to_string(),
            Palette {
                background: colors.surface_primary,
                text: colors.text_primary,
                primary: colors.brand_secondary,
                success: palette::SUCCESS_500,
                warning: palette::WARNING_500,
                danger: colors.error,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_schemes_use_warm_brand() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.r > scheme.brand_primary.b);
        }
    }

    #[test]
    fn explicit_modes_ignore_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper { mode: ThemeMode::Dark }).expect("serialize");
        assert_eq!(text.trim(), "mode = \"dark\"");
        let parsed: Wrapper = toml::from_str("mode = \"system\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::System);
    }
}
