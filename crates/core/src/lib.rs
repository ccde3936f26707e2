//! # fontwidth
//!
//! Derive width-only fonts from resource pack font definitions.
//!
//! Every character a font renders is replaced by an invisible space whose
//! advance is the original advance multiplied by a factor. A factor of `-1`
//! gives a font that cancels the width of text drawn in the original font.
//!
//! Bitmap sheets, TrueType/OpenType fonts, explicit `space` tables, unihex
//! archives and references between fonts are understood. Resources are looked
//! up in a target pack first and a fallback pack second.
//!
//! ## Example
//!
//! ```no_run
//! use fontwidth_core::{ConvertOptions, PackStack, UnihexMode, convert_font};
//!
//! let packs = PackStack::new("my_pack").with_fallback("vanilla");
//! let options = ConvertOptions::new("_neg", -1.0).with_unihex_mode(UnihexMode::Ascii);
//! let report = convert_font(packs, "minecraft:default", options).unwrap();
//! println!("{report}");
//! ```

pub mod config;
mod assemble;
mod context;
mod convert;
mod definition;
mod error;
mod filter;
mod options;
mod resolve;
pub mod sources;

pub use assemble::{Advance, OutputFont, SpaceTable, assemble};
pub use config::{GlyphMetrics, Rounding};
pub use context::ConvertContext;
pub use convert::{ConversionReport, Converter, convert_font};
pub use definition::{
    BitmapProvider, FontDefinition, Provider, ProviderEntry, ReferenceProvider, SizeOverride,
    Skip, SpaceProvider, TtfProvider, UnihexProvider,
};
pub use error::{Error, Result};
pub use filter::{UnihexFilter, UnihexMode};
pub use options::ConvertOptions;
pub use resolve::{FilteredWidths, ResolvedFont, ResolvedWidths, Resolver};
pub use resource_pack::{PackStack, ResourceId, ResourceKind};
