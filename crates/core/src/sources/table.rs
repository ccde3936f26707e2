use indexmap::IndexMap;

use crate::{Error, Result, SpaceProvider};

/// Advances given explicitly by a `space` provider.
pub struct AdvanceTable {
    advances: IndexMap<char, f64>,
}

impl AdvanceTable {
    /// `origin` names the font the provider was declared in, for errors.
    pub fn load(origin: &str, provider: &SpaceProvider) -> Result<Self> {
        let mut advances = IndexMap::with_capacity(provider.advances.len());
        for (key, &advance) in &provider.advances {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(Error::malformed(
                    origin,
                    format!("space advance key {key:?} must be exactly one character"),
                ));
            };
            advances.entry(ch).or_insert(advance);
        }
        Ok(Self { advances })
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.advances.keys().copied()
    }

    pub fn resolve(&self, codepoint: char) -> Option<f64> {
        self.advances.get(&codepoint).copied()
    }
}
