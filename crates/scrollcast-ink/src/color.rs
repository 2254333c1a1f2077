//! Serializable stroke color with packed-integer and hex conversions.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("missing '#' prefix in color string: {0}")]
    MissingPrefix(String),
    #[error("unsupported hex color length {0} (expected 3, 6 or 8 digits)")]
    BadLength(usize),
    #[error("invalid hex digits: {0}")]
    BadDigits(String),
}

/// Stroke color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Unpack from a 32-bit ARGB value (the host platform's packed form).
    pub fn from_argb(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a 32-bit ARGB value.
    pub fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Return the same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingPrefix(s.to_string()))?
            .trim();

        // Slicing below is per byte; non-ASCII input must fail cleanly
        // instead of hitting a char-boundary panic.
        if !hex.is_ascii() {
            return Err(ColorParseError::BadDigits(s.to_string()));
        }

        let digit = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::BadDigits(s.to_string()))
        };

        match hex.len() {
            3 => Ok(Self::new(
                digit(&hex[0..1])? * 17,
                digit(&hex[1..2])? * 17,
                digit(&hex[2..3])? * 17,
                255,
            )),
            6 => Ok(Self::new(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
                255,
            )),
            8 => Ok(Self::new(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
                digit(&hex[6..8])?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
