// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the per-kind alert accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use grid_sentry::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim the screen behind the confirmation dialog
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.29, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.44, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.74, 0.76, 0.79);
    pub const GRAY_100: Color = Color::from_rgb(0.86, 0.87, 0.89);

    // Brand colors (utility blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.84, 0.91, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.68, 0.83, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.67, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.26, 0.56, 0.88);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.46, 0.78);
    pub const PRIMARY_700: Color = Color::from_rgb(0.13, 0.37, 0.66);
    pub const PRIMARY_800: Color = Color::from_rgb(0.09, 0.28, 0.55);

    // Alert accents, one per notification kind
    pub const SUCCESS_500: Color = Color::from_rgb(0.25, 0.69, 0.41);
    pub const ERROR_500: Color = Color::from_rgb(0.88, 0.23, 0.21);
    pub const WARNING_500: Color = Color::from_rgb(0.94, 0.65, 0.13);
    pub const INFO_500: Color = Color::from_rgb(0.39, 0.59, 0.98);
    /// Grid incidents: the "live wire" violet of the network map legend.
    pub const GRID_500: Color = Color::from_rgb(0.55, 0.36, 0.96);
    /// Fraud alerts: deliberately distinct from plain errors.
    pub const FRAUD_500: Color = Color::from_rgb(0.85, 0.21, 0.53);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Screen dim behind the confirmation dialog.
    pub const BACKDROP: f32 = 0.55;

    /// Surface background - semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Glyph bubble sizes
    pub const GLYPH_SM: f32 = 16.0;
    pub const GLYPH_MD: f32 = 24.0;
    pub const GLYPH_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const SETTINGS_INPUT_WIDTH: f32 = 120.0;

    /// Diameter of the remaining-time ring on auto-expiring toasts.
    pub const COUNTDOWN_RING: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Titles: Large headings (pages, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Main page headings (Operations, Journal, Settings)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, dialog headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers, toast titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
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
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::GLYPH_LG > sizing::GLYPH_MD);
    assert!(sizing::GLYPH_MD > sizing::GLYPH_SM);
    assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);
    assert!(sizing::COUNTDOWN_RING < sizing::GLYPH_LG);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
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
    fn alert_accents_are_distinct() {
        let accents = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::WARNING_500,
            palette::INFO_500,
            palette::GRID_500,
            palette::FRAUD_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
