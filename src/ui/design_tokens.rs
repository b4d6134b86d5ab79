// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the calendar viewer.

## Organization

- **Palette**: Base colors (warm amber brand scale plus neutrals)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use tithi_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.1, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.25, 0.23);
    pub const GRAY_400: Color = Color::from_rgb(0.47, 0.44, 0.42);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.8, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.9);

    // Brand colors (amber scale)
    pub const AMBER_50: Color = Color::from_rgb(1.0, 0.984, 0.922); // #FFFBEB
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.78); // #FEF3C7
    pub const AMBER_200: Color = Color::from_rgb(0.992, 0.902, 0.541); // #FDE68A
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141); // #FBBF24
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.62, 0.043); // #F59E0B
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024); // #D97706
    pub const AMBER_700: Color = Color::from_rgb(0.706, 0.325, 0.035); // #B45309
    pub const AMBER_900: Color = Color::from_rgb(0.471, 0.208, 0.059); // #78350F

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Panels floating over the page.
    pub const SURFACE: f32 = 0.96;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Square header and control buttons.
    pub const BUTTON_SIZE: f32 = 40.0;

    /// Width of the floating year picker and info panel.
    pub const PANEL_WIDTH: f32 = 340.0;

    /// Width of a toast notification.
    pub const TOAST_WIDTH: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Month title.
    pub const TITLE_LG: f32 = 26.0;

    /// Localized month name under the title, panel headings.
    pub const TITLE_SM: f32 = 18.0;

    /// Buttons and panel text.
    pub const BODY: f32 = 14.0;

    /// Hint line and badges.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn amber_scale_darkens() {
        assert!(palette::AMBER_100.b > palette::AMBER_500.b);
        assert!(palette::AMBER_500.g > palette::AMBER_600.g);
        assert!(palette::AMBER_600.r > palette::AMBER_900.r);
    }
}
