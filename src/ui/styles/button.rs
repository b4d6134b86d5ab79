// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled amber button used for the main header and control actions.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let base = button::Style {
        background: Some(Background::Color(brand)),
        text_color: palette::WHITE,
        border: Border {
            color: brand,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::AMBER_500)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::AMBER_700)),
            shadow: shadow::NONE,
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..brand
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            shadow: shadow::NONE,
            ..base
        },
    }
}

/// Style for the selected entry of a choice group (year, language, theme).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let style = primary(theme, status);
    button::Style {
        border: Border {
            color: palette::AMBER_900,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..style
    }
}

/// Style for unselected entries of a choice group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let (background, text_color) = match status {
        button::Status::Hovered => (extended.primary.weak.color, extended.primary.weak.text),
        button::Status::Pressed => (extended.primary.base.color, extended.primary.base.text),
        button::Status::Active | button::Status::Disabled => (
            extended.background.weak.color,
            extended.background.weak.text,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button (phone numbers, close buttons).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::AMBER_700,
        _ => brand,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible button covering the area behind an open panel.
pub fn backdrop(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
