//! Options for a conversion run

use crate::{Error, GlyphMetrics, Result, UnihexFilter, UnihexMode};

/// Options controlling how a font is converted into a width font.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Appended to the source font id to name the output font.
    pub suffix: String,
    /// Multiplier applied to every resolved advance.
    pub factor: f64,
    pub unihex: UnihexFilter,
    pub metrics: GlyphMetrics,
}

impl ConvertOptions {
    pub fn new(suffix: impl Into<String>, factor: f64) -> Self {
        Self {
            suffix: suffix.into(),
            factor,
            unihex: UnihexFilter::default(),
            metrics: GlyphMetrics::DEFAULT,
        }
    }

    pub fn with_unihex_mode(mut self, mode: UnihexMode) -> Self {
        self.unihex = UnihexFilter::new(mode);
        self
    }

    pub fn with_unihex_filter(mut self, filter: UnihexFilter) -> Self {
        self.unihex = filter;
        self
    }

    pub fn with_metrics(mut self, metrics: GlyphMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Reject options that cannot produce a usable font.
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(Error::InvalidArgument(format!("factor must be finite, got {}", self.factor)));
        }
        if self.suffix.is_empty() {
            return Err(Error::InvalidArgument(
                "suffix must not be empty, the output would replace the source font".into(),
            ));
        }
        if self.suffix.contains(':') {
            return Err(Error::InvalidArgument(format!(
                "suffix must not contain ':', got {:?}",
                self.suffix
            )));
        }
        Ok(())
    }
}
