//! Text measurement
//!
//! Ties estimation, rasterization and scanning together.

use log::warn;
use serde::Deserialize;

use crate::diagnostics::{DiagnosticSink, LogSink, MeasureEvent};
use crate::estimate::{RegionEstimate, MAX_RASTER_DIMENSION};
use crate::metrics::Metrics;
use crate::paint::Paint;
use crate::rasterize::rasterize_specimen;
use crate::scan::InkBounds;
use crate::surface::RasterSurface;

/// How much of the ink box the scan recovers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanFidelity {
    /// Left, right, top and bottom edges
    #[default]
    Precise,
    /// Top and bottom edges only; width stays the estimate
    Rows,
}

/// Per-call measurement configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasurementOptions {
    /// Present the surface, record diagnostics and paint the overlay
    pub debug: bool,
    /// Oversizing multiplier of the estimated region. Must be at least 1.
    pub bounding_box_ratio: f32,
    /// Paint of the debug overlay drawn over the detected box
    pub embox_style: Paint,
    pub fidelity: ScanFidelity,
}

impl MeasurementOptions {
    pub const DEFAULT_BOUNDING_BOX_RATIO: f32 = 3.0;

    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    pub fn with_bounding_box_ratio(mut self, ratio: f32) -> Self {
        self.bounding_box_ratio = ratio;
        self
    }

    pub fn with_fidelity(mut self, fidelity: ScanFidelity) -> Self {
        self.fidelity = fidelity;
        self
    }

    pub fn with_embox_style(mut self, paint: Paint) -> Self {
        self.embox_style = paint;
        self
    }
}

impl Default for MeasurementOptions {
    fn default() -> Self {
        Self {
            debug: false,
            bounding_box_ratio: Self::DEFAULT_BOUNDING_BOX_RATIO,
            embox_style: Paint::embox_default(),
            fidelity: ScanFidelity::Precise,
        }
    }
}

/// Measure the ink box of `text` in `font` on `surface`.
///
/// Never fails: empty text and text that leaves no ink both yield
/// [`Metrics::EMPTY`].
pub fn measure_with<S: RasterSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    font: &str,
    options: &MeasurementOptions,
    sink: &mut dyn DiagnosticSink,
) -> Metrics {
    surface.set_font(font);
    let native_width = surface.measure_advance(text);
    let estimate = RegionEstimate::new(text, font, options.bounding_box_ratio, native_width);

    if options.debug {
        sink.record(&MeasureEvent::Region {
            text,
            font,
            native_width,
            estimate: &estimate,
        });
    }

    if text.is_empty() {
        return Metrics::EMPTY;
    }

    if !estimate.fits_raster() {
        let (width, height) = estimate.raster_size();
        warn!(
            "Raster of {}x{} for '{}' exceeds the {}px limit, reporting no ink",
            width, height, font, MAX_RASTER_DIMENSION
        );
        return Metrics::EMPTY;
    }

    rasterize_specimen(surface, text, font, &estimate);

    let pixels = surface.pixels();
    let scanned = match options.fidelity {
        ScanFidelity::Precise => InkBounds::scan(&pixels).map(|bounds| {
            let metrics = Metrics::from_bounds(&bounds, &estimate);
            (bounds, metrics)
        }),
        ScanFidelity::Rows => InkBounds::scan_rows(&pixels).map(|rows| {
            let metrics = Metrics::from_rows(&rows, &estimate);
            let bounds = InkBounds {
                left: estimate.em_square_left as u32,
                top: rows.top,
                right: (estimate.em_square_left + estimate.estimated_width) as u32,
                bottom: rows.bottom,
            };
            (bounds, metrics)
        }),
    };

    let Some((bounds, metrics)) = scanned else {
        if options.debug {
            sink.record(&MeasureEvent::NoInk { text, font });
            surface.present();
        }
        return Metrics::EMPTY;
    };

    if options.debug {
        // Overlay goes on after the scan so it never counts as ink
        surface.fill_rect(
            bounds.left as f32,
            bounds.top as f32,
            metrics.width,
            metrics.height,
            options.embox_style,
        );
        let precise = options.fidelity == ScanFidelity::Precise;
        sink.record(&MeasureEvent::Measured {
            text,
            font,
            estimate: &estimate,
            top: bounds.top,
            bottom: bounds.bottom,
            left: precise.then_some(bounds.left),
            right: precise.then_some(bounds.right),
            metrics: &metrics,
        });
        surface.present();
    }

    metrics
}

/// Measurer owning its raster surface
pub struct TextMeasurer<S> {
    surface: S,
    sink: Box<dyn DiagnosticSink + Send>,
}

impl<S: RasterSurface> TextMeasurer<S> {
    /// Create a measurer that logs diagnostics through `log`
    pub fn new(surface: S) -> Self {
        Self::with_sink(surface, Box::new(LogSink))
    }

    pub fn with_sink(surface: S, sink: Box<dyn DiagnosticSink + Send>) -> Self {
        Self { surface, sink }
    }

    /// Measure the ink box of `text` drawn in `font`
    pub fn measure(&mut self, text: &str, font: &str, options: &MeasurementOptions) -> Metrics {
        measure_with(&mut self.surface, text, font, options, self.sink.as_mut())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
