//! Process-wide measurement entry point
//!
//! One lazily created canvas serves every caller of [`measure_text`]. The
//! mutex serializes callers; code that wants its own surface should use
//! [`inkbox_core::TextMeasurer`] with a [`RasterCanvas`] instead.

use std::sync::{Mutex, PoisonError};

use inkbox_core::{measure_with, LogSink, MeasurementOptions, Metrics};
use log::warn;

use crate::canvas::RasterCanvas;
use crate::registry::FontRegistry;

static SHARED_CANVAS: Mutex<Option<RasterCanvas>> = Mutex::new(None);

/// Measure the ink box of `text` drawn in `font` on the shared canvas.
///
/// The canvas is created on first use with the system fonts.
pub fn measure_text(text: &str, font: &str, options: Option<&MeasurementOptions>) -> Metrics {
    let defaults = MeasurementOptions::default();
    let options = options.unwrap_or(&defaults);

    let mut guard = SHARED_CANVAS.lock().unwrap_or_else(PoisonError::into_inner);
    let canvas = guard.get_or_insert_with(|| {
        let registry = FontRegistry::system();
        if registry.is_empty() {
            warn!("No system fonts found; text will measure as empty");
        }
        RasterCanvas::new(registry)
    });

    measure_with(canvas, text, font, options, &mut LogSink)
}

/// Replace the shared canvas, returning the previous one if it was created
pub fn install_shared_canvas(canvas: RasterCanvas) -> Option<RasterCanvas> {
    let mut guard = SHARED_CANVAS.lock().unwrap_or_else(PoisonError::into_inner);
    guard.replace(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(measure_text("", "16px sans-serif", None), Metrics::EMPTY);
    }

    #[test]
    fn test_repeatable() {
        let options = MeasurementOptions::default();
        let first = measure_text("Hello", "16px sans-serif", Some(&options));
        let second = measure_text("Hello", "16px sans-serif", Some(&options));
        assert_eq!(first, second);
        assert!(first.width >= 0.0);
        assert!(first.height >= 0.0);
    }
}
