//! Synthetic surface for tests
//!
//! Draws every non-whitespace character as a solid block whose vertical
//! extent depends on the character class, so ink positions are exact.

use crate::font_size::estimate_font_pixels;
use crate::paint::Paint;
use crate::scan::PixelBuffer;
use crate::surface::{RasterSurface, TextBaseline};

/// Advance of every character, as a fraction of the em size
pub const ADVANCE: f32 = 0.7;

pub struct BlockSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    font: String,
    baseline: TextBaseline,
    native: bool,
    pub resizes: usize,
    pub presented: usize,
    pub rects: Vec<(f32, f32, f32, f32, Paint)>,
}

impl BlockSurface {
    /// Surface that reports native advance widths
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
            font: String::new(),
            baseline: TextBaseline::Alphabetic,
            native: true,
            resizes: 0,
            presented: 0,
            rects: Vec::new(),
        }
    }

    /// Surface without native text measurement
    pub fn without_native() -> Self {
        Self {
            native: false,
            ..Self::new()
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    fn em(&self) -> f32 {
        estimate_font_pixels(&self.font)
    }

    /// Vertical ink span of a glyph, in ems below the em box top
    fn glyph_rows(c: char) -> (f32, f32) {
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            (0.1, 0.8)
        } else if matches!(c, 'g' | 'j' | 'p' | 'q' | 'y') {
            (0.3, 1.1)
        } else {
            (0.3, 0.8)
        }
    }

    fn plot(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: Paint) {
        let x0 = x0.max(0.0).round() as u32;
        let y0 = y0.max(0.0).round() as u32;
        let x1 = (x1.max(0.0).round() as u32).min(self.width);
        let y1 = (y1.max(0.0).round() as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let i = ((y * self.width + x) * 4) as usize;
                self.data[i..i + 4].copy_from_slice(&[paint.r, paint.g, paint.b, paint.a]);
            }
        }
    }
}

impl RasterSurface for BlockSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width * height * 4) as usize];
        self.resizes += 1;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, paint: Paint) {
        let em = self.em();
        let top = match self.baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - 0.5 * em,
            TextBaseline::Alphabetic => y - 0.8 * em,
            TextBaseline::Bottom => y - em,
        };
        let mut cursor = x;
        for c in text.chars() {
            if !c.is_whitespace() {
                let (from, to) = Self::glyph_rows(c);
                // 'j' overhangs its cell on the left
                let bearing = if c == 'j' { -0.1 * em } else { 0.05 * em };
                let left = cursor + bearing;
                self.plot(left, top + from * em, left + 0.5 * em, top + to * em, paint);
            }
            cursor += ADVANCE * em;
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
        self.rects.push((x, y, width, height, paint));
        self.plot(x, y, x + width, y + height, paint);
    }

    fn pixels(&self) -> PixelBuffer<'_> {
        PixelBuffer::new(&self.data, self.width, self.height)
    }

    fn measure_advance(&mut self, text: &str) -> Option<f32> {
        self.native
            .then(|| ADVANCE * self.em() * text.chars().count() as f32)
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
