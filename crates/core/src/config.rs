//! Defaults and pixel-to-unit constants for width derivation.

use std::ops::RangeInclusive;

/// Cell height assumed for bitmap providers that omit `height`.
pub const DEFAULT_BITMAP_HEIGHT: f64 = 8.0;

/// Rendering size assumed for outline providers that omit `size`.
pub const DEFAULT_OUTLINE_SIZE: f64 = 11.0;

/// Oversample factor assumed for outline providers that omit `oversample`.
pub const DEFAULT_OUTLINE_OVERSAMPLE: f64 = 1.0;

/// Number of rows in every unihex glyph bitmap.
pub const UNIHEX_ROWS: usize = 16;

/// Row widths, in pixels, a unihex glyph may use.
pub const UNIHEX_ROW_WIDTHS: [usize; 4] = [8, 16, 24, 32];

/// Codepoints included by the `ascii` unihex mode.
pub const PRINTABLE_ASCII: RangeInclusive<char> = ' '..='~';

/// Highest codepoint treated as named by the `all_named` unihex mode
/// without an explicit size override. Latin-1 plus U+0100.
pub const NAMED_LIMIT: char = '\u{100}';

/// How a fractional halved unihex width is turned into whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Drop the fraction, as the game's renderer does.
    #[default]
    Floor,
    /// Round halves away from zero.
    HalfUp,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::HalfUp => (value + 0.5).floor(),
        }
    }
}

/// Constants converting glyph pixels into advance units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Pixels added after the ink of a bitmap glyph.
    pub bitmap_spacing: f64,
    /// Pixels added after the halved width of a unihex glyph.
    pub unihex_spacing: f64,
    /// Unihex glyphs are drawn at this multiple of the font's unit.
    pub unihex_divisor: f64,
    /// Rounding used after dividing unihex widths.
    pub unihex_rounding: Rounding,
}

impl GlyphMetrics {
    /// The values the game's font renderer uses.
    pub const DEFAULT: Self = Self {
        bitmap_spacing: 1.0,
        unihex_spacing: 1.0,
        unihex_divisor: 2.0,
        unihex_rounding: Rounding::Floor,
    };

    /// Advances equal to the raw ink width, with no spacing added.
    pub const INK_ONLY: Self = Self { bitmap_spacing: 0.0, unihex_spacing: 0.0, ..Self::DEFAULT };

    pub fn unihex_advance(&self, pixel_width: u32) -> f64 {
        self.unihex_rounding.apply(f64::from(pixel_width) / self.unihex_divisor)
            + self.unihex_spacing
    }

    pub fn bitmap_advance(&self, ink_width: u32, height: f64, cell_height: u32) -> f64 {
        let scaled = f64::from(ink_width) * height / f64::from(cell_height);
        Rounding::HalfUp.apply(scaled) + self.bitmap_spacing
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}
