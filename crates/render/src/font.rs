//! Font faces
//!
//! A loaded fontdue face with a glyph bitmap cache.

use fontdue::{Font, FontSettings};
use std::collections::HashMap;

use crate::error::{FontError, FontResult};

/// A font face and its rendered glyphs
pub struct FontFace {
    font: Font,
    glyph_cache: HashMap<GlyphKey, GlyphData>,
}

/// Key for cached glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GlyphKey {
    character: char,
    size_tenths: u32, // Font size * 10 to avoid float hashing
}

/// Cached glyph bitmap data
#[derive(Debug, Clone)]
pub struct GlyphData {
    pub width: u32,
    pub height: u32,
    /// Coverage values, one byte per pixel
    pub bitmap: Vec<u8>,
    pub advance_width: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl FontFace {
    /// Parse a face from TrueType/OpenType data
    pub fn from_bytes(family: &str, data: &[u8]) -> FontResult<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            FontError::Parse {
                family: family.to_string(),
                reason: reason.to_string(),
            }
        })?;

        Ok(Self {
            font,
            glyph_cache: HashMap::new(),
        })
    }

    /// Rasterize a character at a given size
    pub fn rasterize(&mut self, c: char, size: f32) -> &GlyphData {
        let key = GlyphKey {
            character: c,
            size_tenths: (size * 10.0) as u32,
        };

        let font = &self.font;
        self.glyph_cache.entry(key).or_insert_with(|| {
            let (metrics, bitmap) = font.rasterize(c, size);
            GlyphData {
                width: metrics.width as u32,
                height: metrics.height as u32,
                bitmap,
                advance_width: metrics.advance_width,
                offset_x: metrics.xmin,
                offset_y: metrics.ymin,
            }
        })
    }

    /// Measure the advance width of a string without rasterizing it
    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| self.font.metrics(c, size).advance_width)
            .sum()
    }

    /// Get the ascent for a font size
    pub fn ascent(&self, size: f32) -> f32 {
        match self.font.horizontal_line_metrics(size) {
            Some(m) => m.ascent,
            None => size * 0.8,
        }
    }

    /// Get the descent for a font size (negative, below the baseline)
    pub fn descent(&self, size: f32) -> f32 {
        match self.font.horizontal_line_metrics(size) {
            Some(m) => m.descent,
            None => size * -0.2,
        }
    }

    #[cfg(test)]
    fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("cached_glyphs", &self.glyph_cache.len())
            .finish()
    }
}

/// Read a well-known system font, for tests that need real glyphs
#[cfg(test)]
pub(crate) fn load_test_font() -> Option<Vec<u8>> {
    let paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    paths.iter().find_map(|path| std::fs::read(path).ok())
}
