// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the banner themes and the toast renderer.

## Organization

- **Palette**: Base and per-severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Inner paddings of the banner layout
- **Sizing**: Fixed component sizes
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{palette, opacity};
use iced::Color;

let shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};
assert!(shadow.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(244, 67, 54);
    pub const WARNING_500: Color = Color::from_rgb8(255, 193, 7);
    pub const SUCCESS_500: Color = Color::from_rgb8(76, 175, 80);
    pub const INFO_500: Color = Color::from_rgb8(33, 150, 243);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Drop shadow under a banner (50/255).
    pub const SHADOW: f32 = 50.0 / 255.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    use iced::Padding;

    /// Room between the icon column and the banner's leading edge.
    pub const ICON_GUTTER: f32 = 20.0;

    /// Padding around the message label.
    pub const MESSAGE: Padding = Padding {
        top: 5.0,
        right: 15.0,
        bottom: 5.0,
        left: 10.0,
    };
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the close affordance column.
    pub const CLOSE_WIDTH: f32 = 30.0;

    /// Glyph size of the close affordance.
    pub const CLOSE_GLYPH: f32 = 14.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    /// Hard offset shadow painted under enabled themes.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector::new(2.0, 2.0),
        blur_radius: 2.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_palette_is_distinct() {
        let colors = [
            palette::ERROR_500,
            palette::WARNING_500,
            palette::SUCCESS_500,
            palette::INFO_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn banner_shadow_is_translucent() {
        assert!(shadow::BANNER.color.a > 0.0 && shadow::BANNER.color.a < 1.0);
        assert_eq!(shadow::NONE.color.a, 0.0);
    }
}
