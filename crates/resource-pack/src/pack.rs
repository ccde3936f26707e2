//! Two-tier pack search: a target pack overriding an optional fallback pack.

use std::{
    fs::read,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{Error, ResourceId, Result};

/// The kinds of resource a font definition can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Font definition document, `assets/<ns>/font/<path>.json`.
    FontDefinition,
    /// Bitmap sheet image, `assets/<ns>/textures/<path>`.
    Texture,
    /// Outline font binary, `assets/<ns>/font/<path>`.
    FontFile,
    /// Resource addressed relative to the namespace root, `assets/<ns>/<path>`.
    Raw,
}

impl ResourceKind {
    fn directory(self) -> Option<&'static str> {
        match self {
            Self::FontDefinition | Self::FontFile => Some("font"),
            Self::Texture => Some("textures"),
            Self::Raw => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::FontDefinition => ".json",
            _ => "",
        }
    }

    /// Location of a resource relative to a pack root.
    pub fn relative_path(self, id: &ResourceId) -> PathBuf {
        let mut path = PathBuf::from("assets");
        path.push(id.namespace());
        if let Some(dir) = self.directory() {
            path.push(dir);
        }
        let location = format!("{}{}", id.path(), self.extension());
        path.extend(location.split('/').filter(|s| !s.is_empty()));
        path
    }
}

/// Ordered list of pack roots searched for resources.
///
/// The first root is the target pack, which is also where output is written.
#[derive(Debug, Clone)]
pub struct PackStack {
    roots: Vec<PathBuf>,
}

impl PackStack {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self { roots: vec![target.into()] }
    }

    /// Adds a fallback pack searched after every root already present.
    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.roots.push(fallback.into());
        self
    }

    pub fn with_fallback_opt(self, fallback: Option<impl Into<PathBuf>>) -> Self {
        match fallback {
            Some(fallback) => self.with_fallback(fallback),
            None => self,
        }
    }

    pub fn target(&self) -> &Path {
        &self.roots[0]
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the first existing file for `id` in search order.
    pub fn locate(&self, id: &ResourceId, kind: ResourceKind) -> Result<PathBuf> {
        let relative = kind.relative_path(id);
        let mut searched = Vec::with_capacity(self.roots.len());

        for root in &self.roots {
            let candidate = root.join(&relative);
            if candidate.is_file() {
                debug!("Resolved {id} to {}", candidate.display());
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        Err(Error::NotFound { id: id.to_string(), searched })
    }

    /// Locate and read a resource.
    pub fn read(&self, id: &ResourceId, kind: ResourceKind) -> Result<(PathBuf, Vec<u8>)> {
        let path = self.locate(id, kind)?;
        let data = read(&path).map_err(|source| Error::Io { path: path.clone(), source })?;
        Ok((path, data))
    }

    /// Path a resource is written to. Always inside the target pack.
    pub fn output_path(&self, id: &ResourceId, kind: ResourceKind) -> PathBuf {
        self.target().join(kind.relative_path(id))
    }
}
