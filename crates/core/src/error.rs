//! Error types for width font conversion.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while converting a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced resource is missing from every pack, or its id is invalid.
    #[error(transparent)]
    Resource(#[from] resource_pack::Error),

    #[error("malformed font definition {}: {source}", .path.display())]
    MalformedFontDefinition {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed glyph data in {resource}: {detail}")]
    MalformedGlyphData { resource: String, detail: String },

    #[error("failed to parse outline font {resource}: {source}")]
    Outline {
        resource: String,
        #[source]
        source: ReadError,
    },

    #[error("failed to decode image {resource}: {source}")]
    Image {
        resource: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read archive {resource}: {source}")]
    Archive {
        resource: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("font {0} references itself")]
    ReferenceCycle(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True if a referenced resource was absent from every searched pack.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resource(resource_pack::Error::NotFound { .. }))
    }

    pub(crate) fn malformed(resource: impl ToString, detail: impl Into<String>) -> Self {
        Self::MalformedGlyphData { resource: resource.to_string(), detail: detail.into() }
    }
}

pub type Result<T> = result::Result<T, Error>;
