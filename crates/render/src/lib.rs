//! Inkbox Render
//!
//! Font-backed raster surface for ink measurement.

mod canvas;
mod error;
mod font;
mod paint;
mod registry;
mod shared;

pub use canvas::RasterCanvas;
pub use error::{FontError, FontResult};
pub use font::{FontFace, GlyphData};
pub use registry::{font_families, FontRegistry};
pub use shared::{install_shared_canvas, measure_text};
