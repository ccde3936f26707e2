//! Advances read from the metrics of a TrueType/OpenType font.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::warn;
use read_fonts::TableProvider;
use resource_pack::ResourceId;
use skrifa::{
    FontRef, MetadataProvider,
    instance::{LocationRef, Size},
};

use crate::{
    ConvertContext, Error, Result, TtfProvider,
    config::{DEFAULT_OUTLINE_OVERSAMPLE, DEFAULT_OUTLINE_SIZE},
};

pub struct OutlineFont {
    advances: IndexMap<char, f64>,
}

impl OutlineFont {
    pub fn load(ctx: &mut ConvertContext, provider: &TtfProvider) -> Result<Self> {
        let id = ResourceId::parse(&provider.file)?;
        let size = provider.size.unwrap_or(DEFAULT_OUTLINE_SIZE);
        let oversample = provider.oversample.unwrap_or(DEFAULT_OUTLINE_OVERSAMPLE);
        if !(size > 0.0 && oversample > 0.0) {
            return Err(Error::malformed(
                &id,
                format!("size {size} and oversample {oversample} must be positive"),
            ));
        }

        let data = ctx.font_file(&id)?;
        let outline_err = |source| Error::Outline { resource: id.to_string(), source };
        let font = FontRef::new(&data).map_err(outline_err)?;
        // Charmap and metrics come back empty, not failed, without these.
        font.cmap().map_err(outline_err)?;
        font.hmtx().map_err(outline_err)?;
        let skip: HashSet<char> = provider.skip.chars().collect();

        Ok(Self { advances: measure(&font, size * oversample, oversample, &skip) })
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.advances.keys().copied()
    }

    pub fn resolve(&self, codepoint: char) -> Option<f64> {
        self.advances.get(&codepoint).copied()
    }
}

/// Advance of every mapped codepoint at `ppem`, in units of `ppem / oversample`.
///
/// Advances are rounded to whole pixels at the rendering size first, the way a
/// hinted rasterizer reports them.
fn measure(
    font: &FontRef,
    ppem: f64,
    oversample: f64,
    skip: &HashSet<char>,
) -> IndexMap<char, f64> {
    let metrics = font.glyph_metrics(Size::new(ppem as f32), LocationRef::default());
    let mut advances = IndexMap::new();

    for (codepoint, gid) in font.charmap().mappings() {
        let Some(ch) = char::from_u32(codepoint) else {
            warn!("Skipping cmap entry U+{codepoint:04X}, not a Unicode scalar value");
            continue;
        };
        if skip.contains(&ch) {
            continue;
        }
        let Some(advance) = metrics.advance_width(gid) else {
            warn!("No advance for U+{codepoint:04X} (glyph {})", gid.to_u32());
            continue;
        };
        advances.entry(ch).or_insert((advance as f64).round() / oversample);
    }

    advances
}
