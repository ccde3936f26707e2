//! Width resolution across the ordered providers of a font.
//!
//! Providers are walked in declaration order and a codepoint keeps the width
//! of the first provider that covers it, which is how the game picks the
//! glyph it renders. References are expanded in place.

use indexmap::{IndexMap, map::Entry};
use log::debug;
use resource_pack::ResourceId;
use serde_json::{Map, Value};

use crate::{
    ConvertContext, Error, FontDefinition, GlyphMetrics, Provider, Result, UnihexFilter,
    sources::GlyphSource,
};

/// Codepoint to advance, each codepoint set once by the first provider
/// covering it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedWidths {
    widths: IndexMap<char, f64>,
}

impl ResolvedWidths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `width` unless `codepoint` already has one. Returns whether it
    /// was recorded.
    pub fn insert_first(&mut self, codepoint: char, width: f64) -> bool {
        match self.widths.entry(codepoint) {
            Entry::Vacant(entry) => {
                entry.insert(width);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, codepoint: char) -> Option<f64> {
        self.widths.get(&codepoint).copied()
    }

    pub fn contains(&self, codepoint: char) -> bool {
        self.widths.contains_key(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.widths.iter().map(|(&ch, &w)| (ch, w))
    }

    /// Total advance of `text`, or `None` if any character is unresolved.
    pub fn measure(&self, text: &str) -> Option<f64> {
        text.chars().map(|ch| self.get(ch)).sum()
    }
}

impl FromIterator<(char, f64)> for ResolvedWidths {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        let mut widths = Self::new();
        for (ch, width) in iter {
            widths.insert_first(ch, width);
        }
        widths
    }
}

/// Widths from providers that only apply under a font option filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredWidths {
    pub filter: Map<String, Value>,
    pub widths: ResolvedWidths,
}

/// The result of resolving a whole font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFont {
    /// Widths from unfiltered providers.
    pub widths: ResolvedWidths,
    /// One table per filtered provider, in declaration order.
    pub filtered: Vec<FilteredWidths>,
}

/// Walks font definitions and resolves every covered codepoint.
pub struct Resolver<'a> {
    ctx: &'a mut ConvertContext,
    filter: &'a UnihexFilter,
    metrics: GlyphMetrics,
    expanding: Vec<ResourceId>,
}

impl<'a> Resolver<'a> {
    pub fn new(ctx: &'a mut ConvertContext, filter: &'a UnihexFilter, metrics: GlyphMetrics) -> Self {
        Self { ctx, filter, metrics, expanding: Vec::new() }
    }

    /// Load the font `id` from the packs and resolve it.
    pub fn resolve_font(&mut self, id: &ResourceId) -> Result<ResolvedFont> {
        let font = self.ctx.font_definition(id)?;
        self.resolve_all(id, &font)
    }

    /// Resolve an already loaded definition. `id` names it in errors and
    /// guards against references back to it.
    pub fn resolve_all(&mut self, id: &ResourceId, font: &FontDefinition) -> Result<ResolvedFont> {
        let mut resolved = ResolvedFont::default();
        self.expanding.push(id.clone());
        let result = self.walk(id, font, &mut resolved.widths, &mut resolved.filtered);
        self.expanding.pop();
        result?;
        Ok(resolved)
    }

    fn walk(
        &mut self,
        origin: &ResourceId,
        font: &FontDefinition,
        widths: &mut ResolvedWidths,
        filtered: &mut Vec<FilteredWidths>,
    ) -> Result<()> {
        for entry in &font.providers {
            match &entry.filter {
                Some(filter) => {
                    let mut own = ResolvedWidths::new();
                    self.walk_provider(origin, &entry.provider, &mut own, filtered)?;
                    filtered.push(FilteredWidths { filter: filter.clone(), widths: own });
                }
                None => self.walk_provider(origin, &entry.provider, widths, filtered)?,
            }
        }
        Ok(())
    }

    fn walk_provider(
        &mut self,
        origin: &ResourceId,
        provider: &Provider,
        widths: &mut ResolvedWidths,
        filtered: &mut Vec<FilteredWidths>,
    ) -> Result<()> {
        if let Provider::Reference(reference) = provider {
            let id = ResourceId::parse(&reference.id)?;
            if self.expanding.contains(&id) {
                return Err(Error::ReferenceCycle(id.to_string()));
            }
            debug!("Expanding reference from {origin} to {id}");
            let font = self.ctx.font_definition(&id)?;
            self.expanding.push(id.clone());
            let result = self.walk(&id, &font, widths, filtered);
            self.expanding.pop();
            return result;
        }

        let origin_name = origin.to_string();
        let Some(source) =
            GlyphSource::load(self.ctx, &origin_name, provider, self.filter, self.metrics)?
        else {
            return Ok(());
        };

        let mut added = 0usize;
        let mut shadowed = 0usize;
        for codepoint in source.codepoints() {
            if widths.contains(codepoint) {
                shadowed += 1;
                continue;
            }
            if let Some(width) = source.resolve(codepoint) {
                widths.insert_first(codepoint, width);
                added += 1;
            }
        }
        debug!(
            "{} provider in {origin}: {added} resolved, {shadowed} already covered",
            provider.kind()
        );
        Ok(())
    }
}
