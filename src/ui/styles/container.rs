// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::notifications::Severity;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Floating panel surface (year picker, info panel).
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: theme.palette().primary,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Header bar along the top of the window.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Area behind the calendar page.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        ..Default::default()
    }
}

/// Small pill showing which face is displayed.
pub fn badge(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().primary)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast notification with a colored accent border.
pub fn toast(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: Some(palette.background.strong.text),
            border: Border {
                color: severity.color(),
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}
