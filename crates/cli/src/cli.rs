//! CLI definitions and run entry point.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use fontwidth_core::{
    ConversionReport, ConvertOptions, PackStack, UnihexFilter, UnihexMode, convert_font,
};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "fontwidth", version)]
#[command(about = "Convert a font into one whose characters are spaces as wide as the original \
    characters, multiplied by a factor")]
#[command(after_help = "Examples:\n  \
    fontwidth minecraft:default _neg -1\n  \
    fontwidth default _half 0.5 -t my_pack -f vanilla -u all_named -w 'あいう'")]
pub struct Cli {
    /// Namespaced id of the original font, e.g. 'minecraft:default'
    pub font: String,

    /// Suffix appended to the id of the converted font
    pub suffix: String,

    /// Factor the width of each character is multiplied with
    #[arg(allow_negative_numbers = true)]
    pub factor: f64,

    /// Root of the target resource pack [default: working directory]
    #[arg(short, long, value_name = "DIR", alias = "target_pack_folder")]
    pub target_pack_folder: Option<PathBuf>,

    /// Root of a resource pack searched for resources missing from the target pack
    #[arg(short, long, value_name = "DIR", alias = "fallback_pack_folder")]
    pub fallback_pack_folder: Option<PathBuf>,

    /// Which unihex characters are included
    #[arg(short, long, value_enum, default_value_t = UnihexMode::Ascii, alias = "unihex_mode")]
    pub unihex_mode: UnihexMode,

    /// Characters always included from unihex providers, whatever the mode
    #[arg(short, long, default_value = "")]
    pub whitelist: String,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Set up `env_logger`: `info` by default, overridable with `RUST_LOG`,
    /// silent with `--quiet`.
    pub fn init_logging(&self) {
        let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
        if self.quiet {
            builder.filter_level(LevelFilter::Off);
        }
        builder.format_timestamp(None).format_target(false).init();
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.suffix.as_str(), self.factor).with_unihex_filter(
            UnihexFilter::new(self.unihex_mode).with_whitelist(&self.whitelist),
        )
    }

    pub fn packs(&self) -> Result<PackStack> {
        let target = match &self.target_pack_folder {
            Some(path) => path.clone(),
            None => env::current_dir().context("Failed to read working directory")?,
        };
        Ok(PackStack::new(target).with_fallback_opt(self.fallback_pack_folder.clone()))
    }

    pub fn run(&self) -> Result<ConversionReport> {
        convert_font(self.packs()?, &self.font, self.options())
            .with_context(|| format!("Failed to convert font \"{}\"", self.font))
    }
}
