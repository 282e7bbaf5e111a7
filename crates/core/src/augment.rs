//! Native measurement augmentation
//!
//! Wraps a native text measurer so each call also reports the ink box,
//! instead of patching the native entry point in place.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::measure::{MeasurementOptions, TextMeasurer};
use crate::metrics::Metrics;
use crate::surface::RasterSurface;

/// Metrics reported by a native text measurer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTextMetrics {
    /// Advance width of the text
    pub width: f32,
    /// Font ascent above the alphabetic baseline
    pub font_bounding_box_ascent: f32,
    /// Font descent below the alphabetic baseline, as a positive distance
    pub font_bounding_box_descent: f32,
}

/// Trait for native text measurement capabilities
pub trait NativeTextMeasure {
    /// Font description currently in effect
    fn font(&self) -> &str;

    /// Measure `text` in the current font
    fn measure_text(&mut self, text: &str) -> NativeTextMetrics;
}

/// Native metrics with the ink box laid over them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentedTextMetrics {
    pub native: NativeTextMetrics,
    pub ink: Metrics,
}

impl AugmentedTextMetrics {
    /// Merge into a single JSON object; ink fields replace native fields of
    /// the same name.
    pub fn to_json(&self) -> Value {
        let mut map = match serde_json::to_value(self.native) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, value) in self.ink.fields() {
            map.insert(key.to_string(), Value::from(value));
        }
        Value::Object(map)
    }
}

impl Serialize for AugmentedTextMetrics {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// A native measurer augmented with ink measurement
pub struct InkAugmented<N, S> {
    native: N,
    measurer: TextMeasurer<S>,
    options: MeasurementOptions,
}

impl<N: NativeTextMeasure, S: RasterSurface> InkAugmented<N, S> {
    pub fn new(native: N, measurer: TextMeasurer<S>) -> Self {
        Self {
            native,
            measurer,
            options: MeasurementOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MeasurementOptions) -> Self {
        self.options = options;
        self
    }

    /// Measure natively, then add the ink box of the same text and font
    pub fn measure_text(&mut self, text: &str) -> AugmentedTextMetrics {
        let native = self.native.measure_text(text);
        let ink = self.measurer.measure(text, self.native.font(), &self.options);
        AugmentedTextMetrics { native, ink }
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// Drop the augmentation and hand back the native measurer
    pub fn into_inner(self) -> N {
        self.native
    }
}
