//! Fonts and text styles for each [`FontClass`].
//!
//! Styles are `const` so the renderer only swaps the color per op.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X14_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_9_POINT;

use crate::draw::{FontClass, TextAlign};

// =============================================================================
// Fonts
// =============================================================================

/// Digital banner. 17 glyphs fit inside the banner's inner panel.
pub const BANNER_FONT: &MonoFont = &FONT_7X14_BOLD;

/// Bubble labels. Two glyphs fit inside the bubble fill.
pub const BUBBLE_FONT: &MonoFont = &PROFONT_9_POINT;

/// Status text (heart rate).
pub const STATUS_FONT: &MonoFont = &FONT_6X10;

/// Font for a font class.
pub const fn font_for(class: FontClass) -> &'static MonoFont<'static> {
    match class {
        FontClass::Banner => BANNER_FONT,
        FontClass::Bubble => BUBBLE_FONT,
        FontClass::Status => STATUS_FONT,
    }
}

/// Character style for a font class in the given color.
pub const fn char_style(
    class: FontClass,
    color: Rgb565,
) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(font_for(class), color)
}

// =============================================================================
// Text Layout Styles
// =============================================================================

/// Centered on a point. Used for the banner and bubbles.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).baseline(Baseline::Middle).build();

/// Hanging from a top-left corner. Used for status text.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).baseline(Baseline::Top).build();

/// Layout style for an alignment.
pub const fn text_style(align: TextAlign) -> TextStyle {
    match align {
        TextAlign::Left => TOP_LEFT,
        TextAlign::Center => CENTERED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BANNER_TEXT_LEN, BUBBLE_DIGITS, BUBBLE_FILL_RADIUS, SCREEN_WIDTH};

    #[test]
    fn test_banner_fits_screen() {
        let width = BANNER_FONT.character_size.width * (BANNER_TEXT_LEN as u32 - 5);
        assert!(width <= SCREEN_WIDTH - 8, "17-glyph banner fits the inner panel");
    }

    #[test]
    fn test_bubble_label_fits_fill() {
        let width = BUBBLE_FONT.character_size.width * BUBBLE_DIGITS as u32;
        assert!(width <= BUBBLE_FILL_RADIUS * 2);
    }

    #[test]
    fn test_font_classes_map() {
        assert_eq!(font_for(FontClass::Banner).character_size, BANNER_FONT.character_size);
        assert_eq!(font_for(FontClass::Bubble).character_size, BUBBLE_FONT.character_size);
        assert_eq!(font_for(FontClass::Status).character_size, STATUS_FONT.character_size);
    }
}
