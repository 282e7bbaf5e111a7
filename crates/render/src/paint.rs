//! Pixel compositing
//!
//! Source-over blending of paints onto straight-alpha RGBA pixels.

use image::Rgba;
use inkbox_core::Paint;

/// Scale a paint's alpha by an 8-bit coverage value
pub fn coverage_alpha(paint: Paint, coverage: u8) -> u8 {
    ((coverage as u32 * paint.a as u32) / 255) as u8
}

/// Blend `paint` at `alpha` over `dst`
pub fn blend_over(dst: &mut Rgba<u8>, paint: Paint, alpha: u8) {
    if alpha == 0 {
        return;
    }

    let sa = alpha as f32 / 255.0;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }

    let mix = |src: u8, dst: u8| -> u8 {
        let c = (src as f32 * sa + dst as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    dst.0 = [
        mix(paint.r, dst.0[0]),
        mix(paint.g, dst.0[1]),
        mix(paint.b, dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ];
}
