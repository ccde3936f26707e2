//! Glyph sources: one parser per provider kind behind a single `resolve`.

mod bitmap;
mod outline;
mod table;
mod unihex;

pub use bitmap::{BitmapSheet, Cell, ink_width};
pub use outline::OutlineFont;
pub use table::AdvanceTable;
pub use unihex::{HexGlyphs, HexRange, pixel_width};

use log::info;

use crate::{ConvertContext, GlyphMetrics, Provider, Result, UnihexFilter};

/// A loaded provider that can report the advance of the codepoints it covers.
pub enum GlyphSource {
    Bitmap(BitmapSheet),
    Outline(OutlineFont),
    Table(AdvanceTable),
    Hex(HexRange),
}

impl GlyphSource {
    /// Load the resources behind `provider`.
    ///
    /// Returns `None` for providers that contribute nothing in this run: unihex
    /// providers rejected entirely by the filter, and references, which the
    /// resolver expands itself.
    pub fn load(
        ctx: &mut ConvertContext,
        origin: &str,
        provider: &Provider,
        filter: &UnihexFilter,
        metrics: GlyphMetrics,
    ) -> Result<Option<Self>> {
        let source = match provider {
            Provider::Bitmap(bitmap) => {
                info!("Parsing file \"{}\"", bitmap.file);
                Self::Bitmap(BitmapSheet::load(ctx, bitmap, metrics)?)
            }
            Provider::Ttf(ttf) => {
                info!("Parsing file \"{}\"", ttf.file);
                Self::Outline(OutlineFont::load(ctx, ttf)?)
            }
            Provider::Space(space) => Self::Table(AdvanceTable::load(origin, space)?),
            Provider::Unihex(unihex) => {
                if !filter.is_empty() {
                    info!("Parsing file \"{}\"", unihex.hex_file);
                }
                match HexRange::load(ctx, unihex, filter, metrics)? {
                    Some(range) => Self::Hex(range),
                    None => return Ok(None),
                }
            }
            Provider::Reference(_) => return Ok(None),
        };
        Ok(Some(source))
    }

    /// Codepoints this source covers, in declaration order.
    pub fn codepoints(&self) -> Box<dyn Iterator<Item = char> + '_> {
        match self {
            Self::Bitmap(sheet) => Box::new(sheet.codepoints()),
            Self::Outline(font) => Box::new(font.codepoints()),
            Self::Table(table) => Box::new(table.codepoints()),
            Self::Hex(range) => Box::new(range.codepoints()),
        }
    }

    /// Advance of `codepoint` in font units, or `None` if not covered.
    pub fn resolve(&self, codepoint: char) -> Option<f64> {
        match self {
            Self::Bitmap(sheet) => sheet.resolve(codepoint),
            Self::Outline(font) => font.resolve(codepoint),
            Self::Table(table) => table.resolve(codepoint),
            Self::Hex(range) => range.resolve(codepoint),
        }
    }
}
