//! One conversion run: resolve a font from the packs and write its width font.

use std::{fmt, path::PathBuf};

use log::info;
use resource_pack::{PackStack, ResourceId, ResourceKind};

use crate::{ConvertContext, ConvertOptions, OutputFont, Resolver, Result, assemble};

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub source: ResourceId,
    pub output: ResourceId,
    pub path: PathBuf,
    /// Advances in the merged (unfiltered) provider.
    pub advances: usize,
    /// Extra providers emitted for filtered source providers.
    pub filtered: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} advances", self.source, self.output, self.advances)?;
        if self.filtered > 0 {
            write!(f, ", {} filtered providers", self.filtered)?;
        }
        write!(f, ")")
    }
}

/// Converts fonts found in a pack stack into width fonts.
pub struct Converter {
    ctx: ConvertContext,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(packs: PackStack, options: ConvertOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { ctx: ConvertContext::new(packs), options })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Resolve `font` and build its width font without writing it.
    pub fn build(&mut self, font: &ResourceId) -> Result<OutputFont> {
        let mut resolver = Resolver::new(&mut self.ctx, &self.options.unihex, self.options.metrics);
        let resolved = resolver.resolve_font(font)?;
        Ok(assemble(&resolved, self.options.factor))
    }

    /// Convert `font` and write the result next to it in the target pack.
    pub fn convert(&mut self, font: &ResourceId) -> Result<ConversionReport> {
        let output = font.with_suffix(&self.options.suffix);
        info!("Converting font \"{font}\" to \"{output}\"");

        let built = self.build(font)?;
        let path = self.ctx.packs().output_path(&output, ResourceKind::FontDefinition);
        built.write(&path)?;
        info!("Wrote {}", path.display());

        Ok(ConversionReport {
            source: font.clone(),
            output,
            path,
            advances: built.merged().len(),
            filtered: built.providers().len() - 1,
        })
    }
}

/// Convert the font `font_id` found in `packs`.
pub fn convert_font(
    packs: PackStack,
    font_id: &str,
    options: ConvertOptions,
) -> Result<ConversionReport> {
    let font = ResourceId::parse(font_id)?;
    Converter::new(packs, options)?.convert(&font)
}
