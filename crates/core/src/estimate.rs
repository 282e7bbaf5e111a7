//! Region estimation
//!
//! Builds an oversized canvas around the naive advance-width by em-height
//! box so glyph overshoot (ascenders, descenders, negative side bearings)
//! lands inside the raster.

use crate::font_size::estimate_font_pixels;

/// Largest raster side a measurement will allocate
pub const MAX_RASTER_DIMENSION: u32 = 8192;

/// Oversized region the specimen text is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionEstimate {
    /// Advance width reported natively, or the per-character fallback
    pub estimated_width: f32,
    /// Nominal em height of the font
    pub estimated_em_height: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Fraction of each canvas dimension left of / above the em square
    pub em_square_offset_ratio: f32,
    pub em_square_left: f32,
    pub em_square_top: f32,
}

impl RegionEstimate {
    /// Estimate the region for `text` in `font`.
    ///
    /// `native_width` is the advance width reported by the surface; without
    /// it every character is assumed to be one em wide. `ratio` must be at
    /// least 1, smaller values clip the ink.
    pub fn new(text: &str, font: &str, ratio: f32, native_width: Option<f32>) -> Self {
        let em = estimate_font_pixels(font);
        let estimated_width = native_width.unwrap_or_else(|| em * text.chars().count() as f32);
        let estimated_em_height = em;

        let canvas_width = ratio * estimated_width;
        let canvas_height = ratio * estimated_em_height;
        let em_square_offset_ratio = ((ratio - 1.0) / 2.0) / ratio;

        Self {
            estimated_width,
            estimated_em_height,
            canvas_width,
            canvas_height,
            em_square_offset_ratio,
            em_square_left: em_square_offset_ratio * canvas_width,
            em_square_top: em_square_offset_ratio * canvas_height,
        }
    }

    /// Whether the raster stays within [`MAX_RASTER_DIMENSION`] on both sides
    pub fn fits_raster(&self) -> bool {
        let (width, height) = self.raster_size();
        width <= MAX_RASTER_DIMENSION && height <= MAX_RASTER_DIMENSION
    }

    /// Raster dimensions, truncated the way canvas sizes are
    pub fn raster_size(&self) -> (u32, u32) {
        (to_raster_dim(self.canvas_width), to_raster_dim(self.canvas_height))
    }
}

fn to_raster_dim(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_width_ratio_three() {
        let est = RegionEstimate::new("A", "20px Arial", 3.0, Some(14.0));
        assert_eq!(est.estimated_width, 14.0);
        assert_eq!(est.estimated_em_height, 20.0);
        assert_eq!(est.canvas_width, 42.0);
        assert_eq!(est.canvas_height, 60.0);
        assert!((est.em_square_offset_ratio - 1.0 / 3.0).abs() < 1e-6);
        assert!((est.em_square_left - 14.0).abs() < 1e-4);
        assert!((est.em_square_top - 20.0).abs() < 1e-4);
        assert_eq!(est.raster_size(), (42, 60));
    }

    #[test]
    fn test_fallback_width_counts_chars() {
        let est = RegionEstimate::new("héllo", "10px serif", 2.0, None);
        assert_eq!(est.estimated_width, 50.0);
        assert_eq!(est.canvas_width, 100.0);
        assert_eq!(est.canvas_height, 20.0);
        assert_eq!(est.em_square_offset_ratio, 0.25);
        assert_eq!(est.em_square_left, 25.0);
        assert_eq!(est.em_square_top, 5.0);
    }

    #[test]
    fn test_ratio_one_has_no_margin() {
        let est = RegionEstimate::new("ab", "12px serif", 1.0, Some(13.0));
        assert_eq!(est.em_square_left, 0.0);
        assert_eq!(est.em_square_top, 0.0);
        assert_eq!(est.canvas_width, 13.0);
    }

    #[test]
    fn test_raster_size_truncates() {
        let est = RegionEstimate::new("a", "12px serif", 2.5, Some(7.3));
        assert_eq!(est.raster_size(), (18, 30));
    }

    #[test]
    fn test_oversized_font_exceeds_raster_limit() {
        let est = RegionEstimate::new("A", "99999999999px Arial", 3.0, None);
        assert_eq!(est.raster_size(), (u32::MAX, u32::MAX));
        assert!(!est.fits_raster());

        let est = RegionEstimate::new("A", "20px Arial", 3.0, Some(14.0));
        assert!(est.fits_raster());
    }

    #[test]
    fn test_empty_text_has_empty_raster() {
        let est = RegionEstimate::new("", "12px serif", 3.0, None);
        assert_eq!(est.raster_size(), (0, 36));
    }
}
