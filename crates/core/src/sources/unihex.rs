//! Widths of unihex glyphs, as used by the game's Unifont fallback.
//!
//! Each line of a `.hex` file is `<codepoint>:<bitmap>`, where the bitmap is
//! 16 rows of 8, 16, 24 or 32 pixels packed as hex digits. The glyph's pixel
//! width is the span between its leftmost and rightmost set pixel over all
//! rows.

use std::{
    io::{Cursor, Read},
    rc::Rc,
};

use indexmap::{IndexMap, map::Entry};
use log::{debug, warn};
use resource_pack::ResourceId;

use crate::{
    ConvertContext, Error, GlyphMetrics, Result, SizeOverride, UnihexFilter, UnihexProvider,
    config::{UNIHEX_ROWS, UNIHEX_ROW_WIDTHS},
};

/// Pixel widths of the glyphs of one hex source, keyed by codepoint.
///
/// Every line is validated while indexing, including lines that are never
/// looked up.
#[derive(Debug, Default)]
pub struct HexGlyphs {
    resource: String,
    widths: IndexMap<char, u32>,
}

impl HexGlyphs {
    /// Index every `*.hex` entry of a zip archive, in archive order.
    pub fn from_archive(resource: &str, data: &[u8]) -> Result<Self> {
        let archive_err = |source| Error::Archive { resource: resource.to_owned(), source };
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(archive_err)?;
        let mut glyphs = Self { resource: resource.to_owned(), widths: IndexMap::new() };

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(archive_err)?;
            if !entry.is_file() || !entry.name().ends_with(".hex") {
                continue;
            }
            let name = entry.name().to_owned();
            let mut text = String::new();
            entry.read_to_string(&mut text).map_err(|e| {
                Error::malformed(resource, format!("{name} is not UTF-8 text: {e}"))
            })?;
            debug!("Reading {name} from {resource}");
            glyphs.add_lines(&name, &text)?;
        }

        Ok(glyphs)
    }

    /// Index a bare `.hex` file.
    pub fn from_text(resource: &str, data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::malformed(resource, format!("not UTF-8 text: {e}")))?;
        let mut glyphs = Self { resource: resource.to_owned(), widths: IndexMap::new() };
        glyphs.add_lines(resource, text)?;
        Ok(glyphs)
    }

    fn add_lines(&mut self, file: &str, text: &str) -> Result<()> {
        for (index, line) in text.lines().enumerate() {
            let number = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (code, bitmap) = line.split_once(':').ok_or_else(|| {
                Error::malformed(&self.resource, format!("{file}:{number}: missing ':'"))
            })?;
            let code = u32::from_str_radix(code, 16).map_err(|_| {
                Error::malformed(&self.resource, format!("{file}:{number}: bad codepoint {code:?}"))
            })?;
            let width = pixel_width(bitmap).map_err(|detail| {
                Error::malformed(&self.resource, format!("{file}:{number}: {detail}"))
            })?;
            let Some(ch) = char::from_u32(code) else {
                warn!("{file}:{number}: skipping U+{code:04X}, not a Unicode scalar value");
                continue;
            };

            if let Entry::Vacant(entry) = self.widths.entry(ch) {
                entry.insert(width);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn contains(&self, codepoint: char) -> bool {
        self.widths.contains_key(&codepoint)
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.widths.keys().copied()
    }

    /// Pixel width of the glyph for `codepoint`, if the source defines it.
    pub fn pixel_width(&self, codepoint: char) -> Option<u32> {
        self.widths.get(&codepoint).copied()
    }
}

/// Span in pixels between the outermost set pixels of a hex bitmap.
pub fn pixel_width(bitmap: &str) -> std::result::Result<u32, String> {
    if !bitmap.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("bitmap {bitmap:?} is not hexadecimal"));
    }
    let digits_per_row = bitmap.len() / UNIHEX_ROWS;
    if bitmap.len() % UNIHEX_ROWS != 0 || !UNIHEX_ROW_WIDTHS.contains(&(digits_per_row * 4)) {
        return Err(format!(
            "bitmap has {} digits, expected {UNIHEX_ROWS} rows of 8, 16, 24 or 32 pixels",
            bitmap.len()
        ));
    }

    let mut ink = 0u32;
    for row in 0..UNIHEX_ROWS {
        let digits = &bitmap[row * digits_per_row..(row + 1) * digits_per_row];
        ink |= u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
    }

    if ink == 0 {
        return Ok(0);
    }
    Ok(32 - ink.leading_zeros() - ink.trailing_zeros())
}

/// The codepoints of one unihex provider that pass the inclusion filter.
pub struct HexRange {
    glyphs: Rc<HexGlyphs>,
    included: Vec<char>,
    overrides: Vec<SizeOverride>,
    metrics: GlyphMetrics,
}

impl HexRange {
    /// Returns `None` when the filter rejects every codepoint, without reading
    /// the hex source.
    pub fn load(
        ctx: &mut ConvertContext,
        provider: &UnihexProvider,
        filter: &UnihexFilter,
        metrics: GlyphMetrics,
    ) -> Result<Option<Self>> {
        if filter.is_empty() {
            debug!("Skipping unihex provider {}, mode is none", provider.hex_file);
            return Ok(None);
        }

        let id = ResourceId::parse(&provider.hex_file)?;
        let glyphs = ctx.hex_glyphs(&id)?;
        let overrides = provider.size_overrides.clone();
        let included: Vec<char> = glyphs
            .codepoints()
            .filter(|&ch| filter.include(ch, overrides.iter().any(|o| o.contains(ch))))
            .collect();
        debug!("Including {} of {} unihex glyphs from {id}", included.len(), glyphs.len());

        Ok(Some(Self { glyphs, included, overrides, metrics }))
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.included.iter().copied()
    }

    pub fn resolve(&self, codepoint: char) -> Option<f64> {
        let width = match self.overrides.iter().find(|o| o.contains(codepoint)) {
            Some(size) if self.glyphs.contains(codepoint) => Some(size.width()),
            Some(_) => None,
            None => self.glyphs.pixel_width(codepoint),
        };
        width.map(|w| self.metrics.unihex_advance(w))
    }
}
