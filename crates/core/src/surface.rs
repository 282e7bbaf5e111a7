//! Raster surface abstraction
//!
//! The drawing collaborator the measurement pipeline renders into. A
//! concrete font-backed implementation lives in `inkbox-render`.

use crate::paint::Paint;
use crate::scan::PixelBuffer;

/// Vertical anchor used when filling text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// The y coordinate is the top of the em box
    Top,
    /// The y coordinate is the middle of the em box
    Middle,
    /// The y coordinate is the alphabetic baseline
    #[default]
    Alphabetic,
    /// The y coordinate is the bottom of the em box
    Bottom,
}

/// Trait for 2D raster surfaces text can be measured on
pub trait RasterSurface {
    /// Resize the surface. Always clears every pixel to transparent black,
    /// even when the size does not change.
    fn resize(&mut self, width: u32, height: u32);

    /// Current width in pixels
    fn width(&self) -> u32;

    /// Current height in pixels
    fn height(&self) -> u32;

    /// Set the font description used by subsequent text calls
    fn set_font(&mut self, font: &str);

    /// Set the vertical anchor used by [`RasterSurface::fill_text`]
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Fill `text` with its left edge at `x`, anchored vertically at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, paint: Paint);

    /// Fill a rectangle, blending `paint` over existing pixels
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint);

    /// Row-major RGBA pixels of the whole surface
    fn pixels(&self) -> PixelBuffer<'_>;

    /// Native advance width of `text` in the current font, if the surface
    /// can measure text
    fn measure_advance(&mut self, _text: &str) -> Option<f32> {
        None
    }

    /// Make the surface visible for inspection. Only called in debug mode.
    fn present(&mut self) {}
}
