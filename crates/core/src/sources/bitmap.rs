//! Glyph widths measured from the pixels of a bitmap sheet.

use std::rc::Rc;

use image::RgbaImage;
use indexmap::{IndexMap, map::Entry};
use resource_pack::ResourceId;

use crate::{
    BitmapProvider, ConvertContext, Error, GlyphMetrics, Result,
    config::DEFAULT_BITMAP_HEIGHT,
};

/// Pixel rectangle of one glyph inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub struct BitmapSheet {
    image: Rc<RgbaImage>,
    cells: IndexMap<char, Cell>,
    height: f64,
    metrics: GlyphMetrics,
}

impl BitmapSheet {
    pub fn load(
        ctx: &mut ConvertContext,
        provider: &BitmapProvider,
        metrics: GlyphMetrics,
    ) -> Result<Self> {
        let id = ResourceId::parse(&provider.file)?;
        let image = ctx.image(&id)?;
        let cells = layout_cells(&id, &image, &provider.chars)?;

        Ok(Self {
            image,
            cells,
            height: provider.height.unwrap_or(DEFAULT_BITMAP_HEIGHT),
            metrics,
        })
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.keys().copied()
    }

    pub fn resolve(&self, codepoint: char) -> Option<f64> {
        let cell = self.cells.get(&codepoint)?;
        let ink = ink_width(&self.image, cell);
        Some(self.metrics.bitmap_advance(ink, self.height, cell.height))
    }
}

/// Split the sheet into one cell per codepoint of `chars`.
///
/// U+0000 and U+0020 mark unused cells and are skipped.
fn layout_cells(
    id: &ResourceId,
    image: &RgbaImage,
    chars: &[String],
) -> Result<IndexMap<char, Cell>> {
    let mut cells = IndexMap::new();
    if chars.is_empty() {
        return Ok(cells);
    }

    let cell_height = image.height() / chars.len() as u32;
    if cell_height == 0 {
        return Err(Error::malformed(
            id,
            format!("{} rows do not fit an image {} px high", chars.len(), image.height()),
        ));
    }

    for (row, line) in chars.iter().enumerate() {
        let columns = line.chars().count() as u32;
        if columns == 0 {
            continue;
        }
        let cell_width = image.width() / columns;
        if cell_width == 0 {
            return Err(Error::malformed(
                id,
                format!("row {row} has {columns} cells but the image is {} px wide", image.width()),
            ));
        }

        for (column, ch) in line.chars().enumerate() {
            if ch == '\0' || ch == ' ' {
                continue;
            }
            if let Entry::Vacant(entry) = cells.entry(ch) {
                entry.insert(Cell {
                    x: column as u32 * cell_width,
                    y: row as u32 * cell_height,
                    width: cell_width,
                    height: cell_height,
                });
            }
        }
    }

    Ok(cells)
}

/// Columns from the left edge of the cell up to its rightmost visible pixel.
pub fn ink_width(image: &RgbaImage, cell: &Cell) -> u32 {
    (0..cell.width)
        .rev()
        .find(|&column| {
            (0..cell.height).any(|row| image.get_pixel(cell.x + column, cell.y + row)[3] != 0)
        })
        .map_or(0, |column| column + 1)
}
