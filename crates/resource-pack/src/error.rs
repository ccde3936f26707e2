//! Error types for resource lookup.

use std::{io, path::PathBuf, result};

/// Errors that can occur while locating or reading pack resources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource {id} not found (searched {})", display_paths(.searched))]
    NotFound { id: String, searched: Vec<PathBuf> },

    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = result::Result<T, Error>;
