//! Per-run state: the pack search path and decoded resource cache.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use image::RgbaImage;
use log::debug;
use resource_pack::{PackStack, ResourceId, ResourceKind};

use crate::{Error, FontDefinition, Result, sources::HexGlyphs};

/// Decoded resources keyed by the file they were read from.
///
/// Several providers (or several fonts reached through references) can point
/// at the same sheet, outline font or hex archive; each is decoded once.
#[derive(Default)]
struct ResourceCache {
    definitions: HashMap<PathBuf, Rc<FontDefinition>>,
    images: HashMap<PathBuf, Rc<RgbaImage>>,
    font_files: HashMap<PathBuf, Rc<[u8]>>,
    hex: HashMap<PathBuf, Rc<HexGlyphs>>,
}

/// Everything a conversion run reads from, passed explicitly to the parsers.
pub struct ConvertContext {
    packs: PackStack,
    cache: ResourceCache,
}

impl ConvertContext {
    pub fn new(packs: PackStack) -> Self {
        Self { packs, cache: ResourceCache::default() }
    }

    pub fn packs(&self) -> &PackStack {
        &self.packs
    }

    /// Load and parse the font definition for `id`.
    pub fn font_definition(&mut self, id: &ResourceId) -> Result<Rc<FontDefinition>> {
        let path = self.packs.locate(id, ResourceKind::FontDefinition)?;
        if let Some(font) = self.cache.definitions.get(&path) {
            debug!("Reusing font definition {}", path.display());
            return Ok(Rc::clone(font));
        }

        let data = read_file(&path)?;
        let font = FontDefinition::from_slice(&data)
            .map_err(|source| Error::MalformedFontDefinition { path: path.clone(), source })?;
        let font = Rc::new(font);
        self.cache.definitions.insert(path, Rc::clone(&font));
        Ok(font)
    }

    /// Load a bitmap sheet as RGBA.
    pub fn image(&mut self, id: &ResourceId) -> Result<Rc<RgbaImage>> {
        let path = self.packs.locate(id, ResourceKind::Texture)?;
        if let Some(image) = self.cache.images.get(&path) {
            debug!("Reusing image {}", path.display());
            return Ok(Rc::clone(image));
        }

        let data = read_file(&path)?;
        let image = image::load_from_memory(&data)
            .map_err(|source| Error::Image { resource: id.to_string(), source })?
            .to_rgba8();
        let image = Rc::new(image);
        self.cache.images.insert(path, Rc::clone(&image));
        Ok(image)
    }

    /// Load the raw bytes of an outline font.
    pub fn font_file(&mut self, id: &ResourceId) -> Result<Rc<[u8]>> {
        let path = self.packs.locate(id, ResourceKind::FontFile)?;
        if let Some(data) = self.cache.font_files.get(&path) {
            debug!("Reusing font file {}", path.display());
            return Ok(Rc::clone(data));
        }

        let data = read_file(&path)?;
        let data: Rc<[u8]> = data.into();
        self.cache.font_files.insert(path, Rc::clone(&data));
        Ok(data)
    }

    /// Load and index the glyph lines of a unihex archive or `.hex` file.
    pub fn hex_glyphs(&mut self, id: &ResourceId) -> Result<Rc<HexGlyphs>> {
        let path = self.packs.locate(id, ResourceKind::Raw)?;
        if let Some(glyphs) = self.cache.hex.get(&path) {
            debug!("Reusing hex glyphs {}", path.display());
            return Ok(Rc::clone(glyphs));
        }

        let data = read_file(&path)?;
        let glyphs = if id.path().ends_with(".hex") {
            HexGlyphs::from_text(&id.to_string(), &data)?
        } else {
            HexGlyphs::from_archive(&id.to_string(), &data)?
        };
        let glyphs = Rc::new(glyphs);
        self.cache.hex.insert(path, Rc::clone(&glyphs));
        Ok(glyphs)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| resource_pack::Error::Io { path: path.to_owned(), source }.into())
}
