//! Paint values
//!
//! RGBA colors used for ink and debug overlays, parsed from CSS color
//! strings such as `#666` or `rgba(80%,80%,100%,0.1)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};

/// Straight-alpha RGBA paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Paint {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Default debug overlay paint, a translucent pale blue
    pub const fn embox_default() -> Self {
        // rgba(80%, 80%, 100%, 0.1)
        Self::rgba(204, 204, 255, 25)
    }

    /// Check if paint is fully transparent
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Whether this paint leaves a mark the ink scanner can see
    pub fn has_color(&self) -> bool {
        self.r > 0 || self.g > 0 || self.b > 0
    }

    /// Parse a CSS color string
    pub fn parse(input: &str) -> PaintResult<Self> {
        let value = input.trim().to_ascii_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| PaintError::invalid_color(input));
        }

        if let Some(args) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
        {
            let args = args
                .strip_suffix(')')
                .ok_or_else(|| PaintError::invalid_color(input))?;
            return Self::from_rgb_args(input, args);
        }

        Self::from_name(&value).ok_or_else(|| PaintError::invalid_color(input))
    }

    /// Parse a hex color string (without #)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        if !hex.is_ascii() {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Get a named color
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Self::rgb(0, 0, 0)),
            "white" => Some(Self::rgb(255, 255, 255)),
            "red" => Some(Self::rgb(255, 0, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            "yellow" => Some(Self::rgb(255, 255, 0)),
            "cyan" | "aqua" => Some(Self::rgb(0, 255, 255)),
            "magenta" | "fuchsia" => Some(Self::rgb(255, 0, 255)),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "darkgray" | "darkgrey" => Some(Self::rgb(169, 169, 169)),
            "transparent" => Some(Self::transparent()),
            _ => None,
        }
    }

    fn from_rgb_args(input: &str, args: &str) -> PaintResult<Self> {
        let values: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|v| !v.is_empty())
            .collect();

        if values.len() < 3 || values.len() > 4 {
            return Err(PaintError::invalid_color(input));
        }

        let r = parse_color_component(input, values[0])?;
        let g = parse_color_component(input, values[1])?;
        let b = parse_color_component(input, values[2])?;
        let a = match values.get(3) {
            Some(alpha) => parse_alpha_component(input, alpha)?,
            None => 255,
        };

        Ok(Self::rgba(r, g, b, a))
    }
}

/// Parse a single color component (0-255 or 0%-100%)
fn parse_color_component(input: &str, component: &str) -> PaintResult<u8> {
    if let Some(percent) = component.strip_suffix('%') {
        let p = parse_number(input, component, percent)?;
        return Ok((p / 100.0 * 255.0).clamp(0.0, 255.0) as u8);
    }
    let n = parse_number(input, component, component)?;
    Ok(n.clamp(0.0, 255.0) as u8)
}

/// Parse an alpha component (0-1 or 0%-100%)
fn parse_alpha_component(input: &str, component: &str) -> PaintResult<u8> {
    if let Some(percent) = component.strip_suffix('%') {
        let p = parse_number(input, component, percent)?;
        return Ok((p / 100.0 * 255.0).clamp(0.0, 255.0) as u8);
    }
    let n = parse_number(input, component, component)?;
    Ok((n.clamp(0.0, 1.0) * 255.0) as u8)
}

fn parse_number(input: &str, component: &str, digits: &str) -> PaintResult<f32> {
    digits
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| PaintError::invalid_component(input, component))
}

impl Default for Paint {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl TryFrom<String> for Paint {
    type Error = PaintError;

    fn try_from(value: String) -> PaintResult<Self> {
        Self::parse(&value)
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}
