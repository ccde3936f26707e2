//! Selection of which unihex codepoints take part in a conversion.
//!
//! Unihex fonts cover most of the Basic Multilingual Plane. Emitting an
//! advance for every one of them makes the derived font slow to load, so the
//! caller picks how much of the range to keep.

use std::{collections::HashSet, fmt, str::FromStr};

use crate::{
    Error, Result,
    config::{NAMED_LIMIT, PRINTABLE_ASCII},
};

/// How much of a unihex provider to include, in increasing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UnihexMode {
    /// No unihex codepoints.
    #[cfg_attr(feature = "cli", value(name = "none"))]
    None,
    /// Printable ASCII only.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "ascii"))]
    Ascii,
    /// Up to U+0100 plus every range the provider names through a size override.
    #[cfg_attr(feature = "cli", value(name = "all_named"))]
    AllNamed,
    /// Every codepoint in the hex source.
    #[cfg_attr(feature = "cli", value(name = "all"))]
    All,
}

impl UnihexMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascii => "ascii",
            Self::AllNamed => "all_named",
            Self::All => "all",
        }
    }
}

impl fmt::Display for UnihexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnihexMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "ascii" => Ok(Self::Ascii),
            "all_named" => Ok(Self::AllNamed),
            "all" => Ok(Self::All),
            other => Err(Error::InvalidArgument(format!(
                "unknown unihex mode {other:?}, expected none, ascii, all_named or all"
            ))),
        }
    }
}

/// Inclusion policy plus the characters that are always kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnihexFilter {
    mode: UnihexMode,
    whitelist: HashSet<char>,
}

impl UnihexFilter {
    pub fn new(mode: UnihexMode) -> Self {
        Self { mode, whitelist: HashSet::new() }
    }

    /// Characters of `whitelist` are included regardless of the mode.
    pub fn with_whitelist(mut self, whitelist: &str) -> Self {
        self.whitelist.extend(whitelist.chars());
        self
    }

    pub fn mode(&self) -> UnihexMode {
        self.mode
    }

    /// True if no codepoint can pass, so the hex source need not be read.
    pub fn is_empty(&self) -> bool {
        self.mode == UnihexMode::None && self.whitelist.is_empty()
    }

    /// Whether `codepoint` takes part in the conversion.
    ///
    /// `overridden` tells whether the provider declares a size override
    /// covering the codepoint, which is what makes it named beyond U+0100.
    pub fn include(&self, codepoint: char, overridden: bool) -> bool {
        if self.whitelist.contains(&codepoint) {
            return true;
        }
        match self.mode {
            UnihexMode::None => false,
            UnihexMode::Ascii => PRINTABLE_ASCII.contains(&codepoint),
            UnihexMode::AllNamed => codepoint <= NAMED_LIMIT || overridden,
            UnihexMode::All => true,
        }
    }
}
