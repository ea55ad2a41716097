//! Colors for Primer drawings.
//!
//! [`Color`] wraps the `DynamicColor` type from the color crate. The shape
//! library builds its palette from 8-bit channels; CSS strings parse through
//! [`FromStr`].

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};
use thiserror::Error;

/// A CSS color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`")]
pub struct ColorParseError {
    input: String,
}

/// An sRGB color with alpha.
///
/// Equality and hashing use the 8-bit sRGBA value, so a color parsed from
/// `"black"` equals `Color::black()`.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use primer_core::color::Color;
    ///
    /// let tomato = Color::from_rgb8(0xFF, 0x44, 0x44);
    /// assert_eq!(tomato.to_hex_string(), "#ff4444");
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let srgb = AlphaColor::<Srgb>::from_rgb8(r, g, b);
        Self {
            color: DynamicColor::from_alpha_color(srgb),
        }
    }

    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::from_rgb8(0xFF, 0xFF, 0xFF)
    }

    /// `#rrggbb`, alpha omitted.
    pub fn to_hex_string(self) -> String {
        let [r, g, b, _] = self.rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns this color with alpha replaced, 0.0 transparent to 1.0 opaque.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    pub fn alpha(self) -> f32 {
        self.color.components[3]
    }

    fn rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses CSS color syntax: `#4a90e2`, `rgb(74 144 226)`, `steelblue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DynamicColor::from_str(s)
            .map(|color| Self { color })
            .map_err(|_| ColorParseError {
                input: s.to_string(),
            })
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba8() == other.rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgba8().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
