//! Measurement diagnostics
//!
//! Intermediate values of a debug-mode measurement are reported to a
//! [`DiagnosticSink`]. Nothing is recorded unless debug mode is on.

use std::fmt;

use log::debug;

use crate::estimate::RegionEstimate;
use crate::metrics::Metrics;

/// A step of a debug-mode measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureEvent<'a> {
    /// The oversized region was sized
    Region {
        text: &'a str,
        font: &'a str,
        native_width: Option<f32>,
        estimate: &'a RegionEstimate,
    },
    /// The scan found no ink anywhere on the surface
    NoInk { text: &'a str, font: &'a str },
    /// The scan finished with ink found
    Measured {
        text: &'a str,
        font: &'a str,
        estimate: &'a RegionEstimate,
        top: u32,
        bottom: u32,
        left: Option<u32>,
        right: Option<u32>,
        metrics: &'a Metrics,
    },
}

impl fmt::Display for MeasureEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureEvent::Region {
                text,
                font,
                native_width,
                estimate,
            } => write!(
                f,
                "sizing {:?} in '{}': native-wid {:?} est-wid {} est-height {} can-wid {} can-height {}",
                text,
                font,
                native_width,
                estimate.estimated_width,
                estimate.estimated_em_height,
                estimate.canvas_width,
                estimate.canvas_height
            ),
            MeasureEvent::NoInk { text, font } => {
                write!(f, "no ink for {:?} in '{}'", text, font)
            }
            MeasureEvent::Measured {
                text,
                font,
                estimate,
                top,
                bottom,
                left,
                right,
                metrics,
            } => write!(
                f,
                "measured {:?} in '{}': {:?} em-ratio {} em-top {} em-left {} top {} bottom {} left {:?} right {:?}",
                text,
                font,
                metrics,
                estimate.em_square_offset_ratio,
                estimate.em_square_top,
                estimate.em_square_left,
                top,
                bottom,
                left,
                right
            ),
        }
    }
}

/// Receiver of debug-mode measurement events
pub trait DiagnosticSink {
    fn record(&mut self, event: &MeasureEvent<'_>);
}

/// Sink that writes events to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, event: &MeasureEvent<'_>) {
        debug!(target: "inkbox", "{}", event);
    }
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&mut self, _event: &MeasureEvent<'_>) {}
}
