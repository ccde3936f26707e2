//! Resource pack fixtures built on disk for integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    fs::{create_dir_all, read_to_string, write},
    io::{Cursor, Write},
    path::Path,
};

use font_types::{FWord, Fixed, GlyphId, LongDateTime, UfWord};
use image::{Rgba, RgbaImage};
use serde_json::Value;
use tempfile::TempDir;
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{Bbox, GlyfLocaBuilder, Glyph, SimpleGlyph},
        head::{Flags, Head, MacStyle},
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        loca::LocaFormat,
        maxp::Maxp,
    },
};
use zip::{ZipWriter, write::SimpleFileOptions};

pub const OPAQUE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A throwaway resource pack directory.
pub struct Pack {
    dir: TempDir,
}

impl Pack {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn put(&self, relative: &str, data: impl AsRef<[u8]>) {
        let path = self.path().join(relative);
        create_dir_all(path.parent().unwrap()).unwrap();
        write(path, data).unwrap();
    }

    /// Write `assets/<ns>/font/<name>.json`.
    pub fn font(&self, namespace: &str, name: &str, definition: &Value) {
        self.put(
            &format!("assets/{namespace}/font/{name}.json"),
            serde_json::to_vec(definition).unwrap(),
        );
    }

    pub fn texture(&self, namespace: &str, name: &str, image: &RgbaImage) {
        let path = self.path().join(format!("assets/{namespace}/textures/{name}"));
        create_dir_all(path.parent().unwrap()).unwrap();
        image.save(path).unwrap();
    }

    pub fn read_font(&self, namespace: &str, name: &str) -> Value {
        let path = self.path().join(format!("assets/{namespace}/font/{name}.json"));
        serde_json::from_str(&read_to_string(path).unwrap()).unwrap()
    }

    pub fn has_font(&self, namespace: &str, name: &str) -> bool {
        self.path().join(format!("assets/{namespace}/font/{name}.json")).is_file()
    }
}

/// Advances of the merged provider of an output document.
pub fn merged_advances(output: &Value) -> &serde_json::Map<String, Value> {
    let providers = output["providers"].as_array().unwrap();
    providers.last().unwrap()["advances"].as_object().unwrap()
}

pub fn advance(output: &Value, ch: char) -> Option<f64> {
    merged_advances(output).get(&ch.to_string()).and_then(Value::as_f64)
}

/// Sheet of `columns` x `rows` cells of `cell` px, with `ink[i]` opaque
/// columns drawn in cell `i` (row-major).
pub fn sheet(columns: u32, rows: u32, cell: u32, ink: &[u32]) -> RgbaImage {
    let mut image = RgbaImage::new(columns * cell, rows * cell);
    for (index, &width) in ink.iter().enumerate() {
        let index = index as u32;
        let (x0, y0) = ((index % columns) * cell, (index / columns) * cell);
        for x in 0..width {
            image.put_pixel(x0 + x, y0 + cell / 2, OPAQUE);
        }
    }
    image
}

/// Hex bitmap of 16 identical rows.
pub fn hex_rows(row: &str) -> String {
    row.repeat(16)
}

/// Zip archive holding one `.hex` file per `(name, text)` pair.
pub fn hex_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, text) in files {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(text.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Minimal TrueType font, 1000 units per em, mapping each `(codepoint,
/// advance)` to its own glyph after `.notdef`.
pub fn make_test_font(glyphs: &[(char, u16)]) -> Vec<u8> {
    let units_per_em = 1000u16;
    let num_glyphs = glyphs.len() as u16 + 1;

    let mut glyf_builder = GlyfLocaBuilder::new();
    for _ in 0..num_glyphs {
        let simple = SimpleGlyph {
            bbox: Bbox { x_min: 0, y_min: 0, x_max: 500, y_max: 700 },
            contours: vec![],
            instructions: vec![],
        };
        let _ = glyf_builder.add_glyph(&Glyph::Simple(simple));
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let name_to_gid: HashMap<char, u32> =
        glyphs.iter().enumerate().map(|(i, (ch, _))| (*ch, i as u32 + 1)).collect();
    let cmap = Cmap::from_mappings(
        glyphs.iter().map(|(ch, _)| (*ch, GlyphId::new(name_to_gid[ch]))),
    )
    .expect("cmap");

    let head = Head {
        font_revision: Fixed::from_f64(1.0),
        checksum_adjustment: 0,
        magic_number: 0x5F0F3CF5,
        flags: Flags::empty(),
        units_per_em,
        created: LongDateTime::new(0),
        modified: LongDateTime::new(0),
        x_min: 0,
        y_min: 0,
        x_max: 500,
        y_max: 700,
        mac_style: MacStyle::empty(),
        lowest_rec_ppem: 8,
        font_direction_hint: 2,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
    };

    let max_advance = glyphs.iter().map(|(_, a)| *a).max().unwrap_or(0);
    let hhea = Hhea {
        ascender: FWord::new(700),
        descender: FWord::new(-200),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(max_advance),
        min_left_side_bearing: FWord::new(0),
        min_right_side_bearing: FWord::new(0),
        x_max_extent: FWord::new(500),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics: num_glyphs,
    };

    let hmtx = Hmtx {
        h_metrics: std::iter::once(0)
            .chain(glyphs.iter().map(|(_, advance)| *advance))
            .map(|advance| LongMetric { advance, side_bearing: 0 })
            .collect(),
        left_side_bearings: vec![],
    };

    let maxp = Maxp {
        num_glyphs,
        max_points: Some(0),
        max_contours: Some(0),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    };

    let mut builder = FontBuilder::new();
    builder.add_table(&head).unwrap();
    builder.add_table(&hhea).unwrap();
    builder.add_table(&hmtx).unwrap();
    builder.add_table(&maxp).unwrap();
    builder.add_table(&cmap).unwrap();
    builder.add_table(&glyf).unwrap();
    builder.add_table(&loca).unwrap();
    builder.build()
}
