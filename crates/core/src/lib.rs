//! Inkbox Core
//!
//! Measures the inked bounding box of a string by estimating an oversized
//! region, rasterizing the text into it and scanning the pixels back.

mod augment;
mod diagnostics;
mod error;
mod estimate;
mod font_size;
mod measure;
mod metrics;
mod paint;
mod rasterize;
mod scan;
mod surface;

#[cfg(test)]
mod testing;

pub use augment::{AugmentedTextMetrics, InkAugmented, NativeTextMeasure, NativeTextMetrics};
pub use diagnostics::{DiagnosticSink, LogSink, MeasureEvent, NoopSink};
pub use error::{PaintError, PaintResult};
pub use estimate::{RegionEstimate, MAX_RASTER_DIMENSION};
pub use font_size::{estimate_font_pixels, FALLBACK_FONT_PIXELS};
pub use measure::{measure_with, MeasurementOptions, ScanFidelity, TextMeasurer};
pub use metrics::Metrics;
pub use paint::Paint;
pub use rasterize::{rasterize_specimen, INK_PAINT};
pub use scan::{InkBounds, InkRows, PixelBuffer};
pub use surface::{RasterSurface, TextBaseline};
