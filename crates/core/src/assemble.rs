//! Building the derived space font from resolved widths.

use std::{
    fs::{create_dir_all, write},
    io,
    path::Path,
};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{Error, ResolvedFont, ResolvedWidths, Result};

/// Largest magnitude written as a JSON integer without losing precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A scaled advance. Whole numbers serialize as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance(pub f64);

impl Serialize for Advance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// A `space` provider of the output font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceTable {
    #[serde(rename = "type")]
    kind: &'static str,
    advances: IndexMap<String, Advance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Map<String, Value>>,
}

impl SpaceTable {
    fn scaled(widths: &ResolvedWidths, factor: f64, filter: Option<Map<String, Value>>) -> Self {
        let advances =
            widths.iter().map(|(ch, width)| (ch.to_string(), Advance(width * factor))).collect();
        Self { kind: "space", advances, filter }
    }

    pub fn advance(&self, codepoint: char) -> Option<f64> {
        let mut buf = [0; 4];
        self.advances.get(&*codepoint.encode_utf8(&mut buf)).map(|a| a.0)
    }

    pub fn len(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    pub fn filter(&self) -> Option<&Map<String, Value>> {
        self.filter.as_ref()
    }
}

/// The derived font definition document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFont {
    providers: Vec<SpaceTable>,
}

impl OutputFont {
    pub fn providers(&self) -> &[SpaceTable] {
        &self.providers
    }

    /// The provider holding every unfiltered advance. Always the last one.
    pub fn merged(&self) -> &SpaceTable {
        &self.providers[self.providers.len() - 1]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let write_err = |source| Error::Write { path: path.to_owned(), source };
        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(write_err)?;
        }
        let json = self.to_json().map_err(|e| write_err(io::Error::from(e)))?;
        write(path, json).map_err(write_err)
    }
}

/// Scale every resolved width by `factor`.
///
/// Filtered tables come first, each keeping its filter, followed by one
/// provider with all unfiltered widths.
pub fn assemble(resolved: &ResolvedFont, factor: f64) -> OutputFont {
    let mut providers: Vec<SpaceTable> = resolved
        .filtered
        .iter()
        .map(|f| SpaceTable::scaled(&f.widths, factor, Some(f.filter.clone())))
        .collect();
    providers.push(SpaceTable::scaled(&resolved.widths, factor, None));
    OutputFont { providers }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::FilteredWidths;

    fn font(entries: &[(char, f64)]) -> ResolvedFont {
        ResolvedFont { widths: entries.iter().copied().collect(), filtered: Vec::new() }
    }

    #[test]
    fn negation() {
        let output = assemble(&font(&[('A', 8.0)]), -1.0);
        let value: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"providers": [{"type": "space", "advances": {"A": -8}}]}));
    }

    #[test]
    fn fractional_factor_keeps_fraction() {
        let output = assemble(&font(&[('A', 8.0), ('i', 3.0)]), 0.5);
        assert_eq!(output.merged().advance('A'), Some(4.0));
        assert_eq!(output.merged().advance('i'), Some(1.5));
        let json = output.to_json().unwrap();
        assert!(json.contains(r#""A":4,"#), "{json}");
        assert!(json.contains(r#""i":1.5"#), "{json}");
    }

    #[test]
    fn zero_factor_removes_width() {
        let output = assemble(&font(&[('A', 8.0)]), 0.0);
        assert_eq!(output.merged().advance('A'), Some(0.0));
        assert!(output.to_json().unwrap().contains(r#""A":0"#));
    }

    #[test]
    fn every_entry_is_width_times_factor() {
        let resolved = font(&[('A', 6.0), ('B', 5.5), ('C', 0.0), ('D', 12.25)]);
        for factor in [-1.0, -0.25, 0.0, 0.3, 2.0] {
            let output = assemble(&resolved, factor);
            for (ch, width) in resolved.widths.iter() {
                let advance = output.merged().advance(ch).unwrap();
                assert!((advance - width * factor).abs() < 1e-9, "{ch} {factor}");
            }
        }
    }

    #[test]
    fn negated_text_cancels() {
        let resolved = font(&[('H', 6.0), ('i', 2.0), ('!', 2.0)]);
        let output = assemble(&resolved, -1.0);
        let text = "Hi!";
        let original = resolved.widths.measure(text).unwrap();
        let derived: f64 = text.chars().map(|ch| output.merged().advance(ch).unwrap()).sum();
        assert_eq!(original + derived, 0.0);
    }

    #[test]
    fn filtered_tables_come_first() {
        let mut filter = Map::new();
        filter.insert("jp".into(), Value::Bool(true));
        let resolved = ResolvedFont {
            widths: [('A', 6.0)].into_iter().collect(),
            filtered: vec![FilteredWidths { filter, widths: [('あ', 8.0)].into_iter().collect() }],
        };
        let output = assemble(&resolved, -1.0);
        let value: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"providers": [
                {"type": "space", "advances": {"あ": -8}, "filter": {"jp": true}},
                {"type": "space", "advances": {"A": -6}}
            ]})
        );
    }

    #[test]
    fn empty_resolution_still_has_a_provider() {
        let output = assemble(&ResolvedFont::default(), -1.0);
        assert_eq!(output.providers().len(), 1);
        assert!(output.merged().is_empty());
    }
}
