use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Namespace used when an id has no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced resource id such as `minecraft:font/ascii.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Parse `namespace:path`, or a bare `path` in the default namespace.
    pub fn parse(value: &str) -> Result<Self> {
        let (namespace, path) = match value.split_once(':') {
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, value),
        };

        if namespace.is_empty() || path.is_empty() || path.contains(':') {
            return Err(Error::InvalidId(value.to_owned()));
        }

        Ok(Self { namespace: namespace.to_owned(), path: path.to_owned() })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a new id whose path has `suffix` appended.
    ///
    /// `minecraft:default` with suffix `_neg` becomes `minecraft:default_neg`.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self { namespace: self.namespace.clone(), path: format!("{}{suffix}", self.path) }
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
