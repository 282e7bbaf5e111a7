//! Font size estimation
//!
//! Guesses the em box of a font description from its size token. The guess
//! only seeds an upper-bound region that the pixel scan later corrects, so it
//! is deliberately crude.

/// Em size assumed when the font description carries no usable size
pub const FALLBACK_FONT_PIXELS: f32 = 12.0;

/// Points to CSS pixels at 96dpi
const PT_TO_PX: f32 = 1.25;

/// A number found in a font description, with its byte span
#[derive(Debug, Clone, Copy, PartialEq)]
struct NumberToken {
    value: f32,
    start: usize,
    end: usize,
}

/// Estimate the nominal em box size in pixels of a font description.
///
/// The first rule that matches wins:
/// 1. a number directly followed by `px`
/// 2. a bare number surrounded by spaces
/// 3. a number directly followed by `pt`, converted at 1.25px per point
/// 4. [`FALLBACK_FONT_PIXELS`]
pub fn estimate_font_pixels(font: &str) -> f32 {
    let numbers = number_tokens(font);

    if let Some(px) = numbers.iter().find(|n| has_unit(font, n, "px")) {
        return px.value;
    }

    let bytes = font.as_bytes();
    let bare = numbers.iter().find(|n| {
        n.start > 0 && bytes[n.start - 1] == b' ' && bytes.get(n.end) == Some(&b' ')
    });
    if let Some(bare) = bare {
        return bare.value;
    }

    if let Some(pt) = numbers.iter().find(|n| has_unit(font, n, "pt")) {
        return pt.value * PT_TO_PX;
    }

    FALLBACK_FONT_PIXELS
}

fn has_unit(font: &str, number: &NumberToken, unit: &str) -> bool {
    font.get(number.end..number.end + unit.len())
        .is_some_and(|suffix| suffix.eq_ignore_ascii_case(unit))
}

/// Collect maximal `digits[.digits]` runs in order of appearance
fn number_tokens(font: &str) -> Vec<NumberToken> {
    let bytes = font.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos + 1 < bytes.len() && bytes[pos] == b'.' && bytes[pos + 1].is_ascii_digit() {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        // Digits and '.' are ASCII so the slice is always on char boundaries
        if let Ok(value) = font[start..pos].parse::<f32>() {
            tokens.push(NumberToken { value, start, end: pos });
        }
    }

    tokens
}
