//! Raster canvas
//!
//! An RGBA image that text is drawn into with fontdue glyph bitmaps.

use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use inkbox_core::{
    estimate_font_pixels, NativeTextMeasure, NativeTextMetrics, Paint, PixelBuffer, RasterSurface,
    TextBaseline,
};
use log::{debug, warn};

use crate::paint::{blend_over, coverage_alpha};
use crate::registry::FontRegistry;

/// Font-backed raster surface
#[derive(Debug)]
pub struct RasterCanvas {
    image: RgbaImage,
    registry: FontRegistry,
    font: String,
    baseline: TextBaseline,
    debug_dir: Option<PathBuf>,
    snapshots: usize,
}

impl RasterCanvas {
    /// Create an empty canvas drawing with faces from `registry`
    pub fn new(registry: FontRegistry) -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            registry,
            font: String::new(),
            baseline: TextBaseline::default(),
            debug_dir: None,
            snapshots: 0,
        }
    }

    /// Write a PNG of the canvas into `dir` each time it is presented
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FontRegistry {
        &mut self.registry
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel size the current font is drawn at
    fn font_size(&self) -> f32 {
        estimate_font_pixels(&self.font)
    }

    /// Blend a glyph coverage bitmap with its top-left corner at (x, y)
    fn draw_glyph_bitmap(&mut self, bitmap: &[u8], width: u32, height: u32, x: i32, y: i32, paint: Paint) {
        if width == 0 || height == 0 || bitmap.is_empty() {
            return;
        }

        for (i, &coverage) in bitmap.iter().take((width * height) as usize).enumerate() {
            let px = x + (i as u32 % width) as i32;
            let py = y + (i as u32 / width) as i32;
            if px < 0 || py < 0 || px as u32 >= self.image.width() || py as u32 >= self.image.height() {
                continue;
            }
            let alpha = coverage_alpha(paint, coverage);
            blend_over(self.image.get_pixel_mut(px as u32, py as u32), paint, alpha);
        }
    }
}

impl RasterSurface for RasterCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_font(&mut self, font: &str) {
        if self.font != font {
            self.font = font.to_string();
        }
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, paint: Paint) {
        let size = self.font_size();
        let Some(index) = self.registry.resolve(&self.font) else {
            debug!("No font face for '{}', nothing drawn", self.font);
            return;
        };
        let Some(face) = self.registry.face_mut(index) else {
            return;
        };

        let ascent = face.ascent(size);
        let descent = face.descent(size);
        let baseline_y = match self.baseline {
            TextBaseline::Top => y + ascent,
            TextBaseline::Middle => y + (ascent + descent) / 2.0,
            TextBaseline::Alphabetic => y,
            TextBaseline::Bottom => y + descent,
        };

        // Pre-rasterize all glyphs and collect their placement
        let mut cursor_x = x;
        let mut glyphs = Vec::new();
        for c in text.chars().filter(|c| !c.is_control()) {
            let glyph = face.rasterize(c, size);
            if glyph.width > 0 && glyph.height > 0 {
                let glyph_x = cursor_x.round() as i32 + glyph.offset_x;
                let glyph_y = baseline_y.round() as i32 - glyph.offset_y - glyph.height as i32;
                glyphs.push((glyph.bitmap.clone(), glyph.width, glyph.height, glyph_x, glyph_y));
            }
            cursor_x += glyph.advance_width;
        }

        for (bitmap, width, height, glyph_x, glyph_y) in glyphs {
            self.draw_glyph_bitmap(&bitmap, width, height, glyph_x, glyph_y, paint);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
        let x0 = x.max(0.0).round() as u32;
        let y0 = y.max(0.0).round() as u32;
        let x1 = ((x + width).max(0.0).round() as u32).min(self.image.width());
        let y1 = ((y + height).max(0.0).round() as u32).min(self.image.height());

        for py in y0..y1 {
            for px in x0..x1 {
                blend_over(self.image.get_pixel_mut(px, py), paint, paint.a);
            }
        }
    }

    fn pixels(&self) -> PixelBuffer<'_> {
        PixelBuffer::new(self.image.as_raw(), self.image.width(), self.image.height())
    }

    fn measure_advance(&mut self, text: &str) -> Option<f32> {
        let size = self.font_size();
        let index = self.registry.resolve(&self.font)?;
        let face = self.registry.face(index)?;
        Some(face.measure_text(text, size))
    }

    fn present(&mut self) {
        let Some(dir) = &self.debug_dir else {
            return;
        };

        let path = dir.join(format!("inkbox-{:04}.png", self.snapshots));
        self.snapshots += 1;

        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create debug directory {}: {}", dir.display(), e);
            return;
        }
        match self.image.save(&path) {
            Ok(()) => debug!(
                "Wrote {}x{} specimen to {}",
                self.image.width(),
                self.image.height(),
                path.display()
            ),
            Err(e) => warn!("Failed to write {}: {}", path.display(), e),
        }
    }
}

impl NativeTextMeasure for RasterCanvas {
    fn font(&self) -> &str {
        &self.font
    }

    fn measure_text(&mut self, text: &str) -> NativeTextMetrics {
        let size = self.font_size();
        let Some(face) = self.registry.resolve(&self.font).and_then(|i| self.registry.face(i)) else {
            return NativeTextMetrics::default();
        };

        NativeTextMetrics {
            width: face.measure_text(text, size),
            font_bounding_box_ascent: face.ascent(size),
            font_bounding_box_descent: -face.descent(size),
        }
    }
}
