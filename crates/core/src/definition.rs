//! Font definition documents as found under `assets/<ns>/font/*.json`.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Ordered list of glyph providers. Earlier providers take priority.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontDefinition {
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

impl FontDefinition {
    /// Parse a definition document. Trailing commas before `]` or `}` are
    /// accepted.
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(&blank_trailing_commas(data))
    }
}

/// Replace every comma that follows a value and is followed only by
/// whitespace and a closing bracket with a space. String contents are left
/// untouched and error positions keep pointing at the original bytes.
fn blank_trailing_commas(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    let mut in_string = false;
    let mut escaped = false;
    let mut previous = b' ';

    for (i, &byte) in data.iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b',' if !matches!(previous, b'[' | b'{' | b',') => {
                let next = data[i + 1..].iter().find(|b| !b.is_ascii_whitespace());
                if matches!(next, Some(b']' | b'}')) {
                    out[i] = b' ';
                }
            }
            _ => {}
        }
        if !byte.is_ascii_whitespace() {
            previous = byte;
        }
    }

    out
}

/// A provider together with its optional variant filter.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEntry {
    #[serde(flatten)]
    pub provider: Provider,
    /// Font option filter such as `{"uniform": false}`, copied verbatim.
    #[serde(default)]
    pub filter: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Provider {
    Bitmap(BitmapProvider),
    Ttf(TtfProvider),
    Space(SpaceProvider),
    Unihex(UnihexProvider),
    Reference(ReferenceProvider),
}

impl Provider {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bitmap(_) => "bitmap",
            Self::Ttf(_) => "ttf",
            Self::Space(_) => "space",
            Self::Unihex(_) => "unihex",
            Self::Reference(_) => "reference",
        }
    }
}

/// A grid of glyphs cut from a single texture.
#[derive(Debug, Clone, Deserialize)]
pub struct BitmapProvider {
    pub file: String,
    /// Rows of the grid; every codepoint is one cell.
    pub chars: Vec<String>,
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtfProvider {
    pub file: String,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub oversample: Option<f64>,
    #[serde(default)]
    pub skip: Skip,
}

/// Characters an outline provider does not render.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Skip {
    Chars(String),
    Rows(Vec<String>),
}

impl Skip {
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let rows: &[String] = match self {
            Self::Chars(s) => std::slice::from_ref(s),
            Self::Rows(rows) => rows,
        };
        rows.iter().flat_map(|row| row.chars())
    }
}

impl Default for Skip {
    fn default() -> Self {
        Self::Chars(String::new())
    }
}

/// Explicit advances for invisible glyphs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpaceProvider {
    pub advances: IndexMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnihexProvider {
    pub hex_file: String,
    #[serde(default)]
    pub size_overrides: Vec<SizeOverride>,
}

/// Fixed glyph extents for a codepoint range of a unihex provider.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeOverride {
    pub from: char,
    pub to: char,
    pub left: i32,
    pub right: i32,
}

impl SizeOverride {
    pub fn contains(&self, codepoint: char) -> bool {
        (self.from..=self.to).contains(&codepoint)
    }

    /// Pixel width the override forces on its range.
    pub fn width(&self) -> u32 {
        if self.from == '\0' && self.to == '\0' {
            return 0;
        }
        u32::try_from(self.right - self.left + 1).unwrap_or(0)
    }
}

/// Includes every provider of another font at this position.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceProvider {
    pub id: String,
}
