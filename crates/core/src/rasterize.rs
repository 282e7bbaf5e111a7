//! Specimen rasterization

use crate::estimate::RegionEstimate;
use crate::paint::Paint;
use crate::surface::{RasterSurface, TextBaseline};

/// Opaque mid-gray (`#666`) the specimen is drawn with
pub const INK_PAINT: Paint = Paint::rgb(102, 102, 102);

/// Draw `text` into `surface`, resized to the estimated region, with the em
/// box's top-left corner at the em-square origin.
///
/// Resizing clears whatever a previous measurement left behind.
pub fn rasterize_specimen<S: RasterSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    font: &str,
    estimate: &RegionEstimate,
) {
    debug_assert!(INK_PAINT.has_color());
    let (width, height) = estimate.raster_size();
    surface.resize(width, height);
    surface.set_font(font);
    surface.set_text_baseline(TextBaseline::Top);
    surface.fill_text(text, estimate.em_square_left, estimate.em_square_top, INK_PAINT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BlockSurface;

    #[test]
    fn test_resizes_and_draws_at_em_origin() {
        let mut surface = BlockSurface::new();
        let estimate = RegionEstimate::new("A", "20px Arial", 2.0, Some(14.0));
        rasterize_specimen(&mut surface, "A", "20px Arial", &estimate);

        assert_eq!((surface.width(), surface.height()), (28, 40));
        // Em square sits at (7, 10); the block glyph starts 1px right, 2px down
        assert_eq!(surface.pixel(8, 12), [102, 102, 102, 255]);
        assert_eq!(surface.pixel(7, 12), [0, 0, 0, 0]);
        assert_eq!(surface.pixel(8, 11), [0, 0, 0, 0]);
    }

    #[test]
    fn test_ink_paint_is_visible_to_scanner() {
        assert!(INK_PAINT.has_color());
        assert!(!INK_PAINT.is_transparent());
    }

    #[test]
    fn test_redraw_clears_previous_ink() {
        let mut surface = BlockSurface::new();
        let wide = RegionEstimate::new("MMMM", "20px Arial", 2.0, Some(56.0));
        rasterize_specimen(&mut surface, "MMMM", "20px Arial", &wide);
        let narrow = RegionEstimate::new("", "20px Arial", 2.0, Some(56.0));
        rasterize_specimen(&mut surface, "", "20px Arial", &narrow);

        assert_eq!(surface.resizes, 2);
        assert!(surface.pixels().data.iter().all(|&b| b == 0));
    }
}
