//! Measurement results

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::estimate::RegionEstimate;
use crate::scan::{InkBounds, InkRows};

/// Inked extent of a measured string
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Width of the ink in pixels
    pub width: f32,
    /// Height of the ink in pixels
    pub height: f32,
    /// Horizontal displacement of the ink's left edge from the em square
    pub left_offset: f32,
    /// Vertical displacement of the ink's top edge from the em square
    pub top_offset: f32,
}

impl Metrics {
    /// Result for empty text or a surface with no ink
    pub const EMPTY: Metrics = Metrics {
        width: 0.0,
        height: 0.0,
        left_offset: 0.0,
        top_offset: 0.0,
    };

    pub fn new(width: f32, height: f32, left_offset: f32, top_offset: f32) -> Self {
        Self {
            width,
            height,
            left_offset,
            top_offset,
        }
    }

    /// Metrics of a fully scanned ink rectangle
    pub fn from_bounds(bounds: &InkBounds, estimate: &RegionEstimate) -> Self {
        Self {
            width: bounds.width() as f32,
            height: bounds.height() as f32,
            left_offset: bounds.left as f32 - estimate.em_square_left,
            top_offset: bounds.top as f32 - estimate.em_square_top,
        }
    }

    /// Metrics when only rows were scanned; the width stays the estimate
    pub fn from_rows(rows: &InkRows, estimate: &RegionEstimate) -> Self {
        Self {
            width: estimate.estimated_width,
            height: rows.height() as f32,
            left_offset: 0.0,
            top_offset: rows.top as f32 - estimate.em_square_top,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Field names and values as they appear in serialized output.
    ///
    /// The empty result reports `topGap`/`leftGap` instead of offsets.
    pub fn fields(&self) -> [(&'static str, f32); 4] {
        if self.is_empty() {
            [
                ("width", 0.0),
                ("height", 0.0),
                ("topGap", 0.0),
                ("leftGap", 0.0),
            ]
        } else {
            [
                ("width", self.width),
                ("height", self.height),
                ("leftOffset", self.left_offset),
                ("topOffset", self.top_offset),
            ]
        }
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in fields {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_bounds() {
        let estimate = RegionEstimate::new("A", "20px Arial", 2.0, Some(14.0));
        let bounds = InkBounds {
            left: 6,
            top: 4,
            right: 20,
            bottom: 19,
        };
        let metrics = Metrics::from_bounds(&bounds, &estimate);
        assert_eq!(metrics, Metrics::new(14.0, 15.0, -1.0, -6.0));
    }

    #[test]
    fn test_single_ink_pixel_offset_from_em_square() {
        use crate::scan::PixelBuffer;

        // Ratio 2 puts the em square at (7, 10) on a 28x40 raster
        let estimate = RegionEstimate::new("A", "20px Arial", 2.0, Some(14.0));
        let (width, height) = estimate.raster_size();
        let mut data = vec![0u8; (width * height * 4) as usize];
        let i = ((12 * width + 9) * 4) as usize;
        data[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);

        let bounds = InkBounds::scan(&PixelBuffer::new(&data, width, height)).unwrap();
        let metrics = Metrics::from_bounds(&bounds, &estimate);
        assert_eq!(metrics, Metrics::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_from_rows_keeps_estimated_width() {
        let estimate = RegionEstimate::new("A", "20px Arial", 2.0, Some(14.0));
        let rows = InkRows { top: 7, bottom: 21 };
        let metrics = Metrics::from_rows(&rows, &estimate);
        assert_eq!(metrics, Metrics::new(14.0, 14.0, 0.0, -3.0));
    }

    #[test]
    fn test_serialize_offsets() {
        let value = serde_json::to_value(Metrics::new(10.0, 12.0, -1.0, 2.5)).unwrap();
        assert_eq!(
            value,
            json!({"width": 10.0, "height": 12.0, "leftOffset": -1.0, "topOffset": 2.5})
        );
    }

    #[test]
    fn test_serialize_empty_uses_gaps() {
        let value = serde_json::to_value(Metrics::EMPTY).unwrap();
        assert_eq!(
            value,
            json!({"width": 0.0, "height": 0.0, "topGap": 0.0, "leftGap": 0.0})
        );
    }
}
