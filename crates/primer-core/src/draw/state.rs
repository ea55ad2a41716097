//! Ambient draw state carried by a [`Surface`](super::Surface).

use crate::color::Color;

/// The typefaces available to worksheet text.
///
/// Surfaces map these onto whatever font machinery they target; the SVG
/// surface emits a `font-family` plus weight and style attributes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl FontFace {
    /// Returns the family name shared by all faces.
    pub fn family(self) -> &'static str {
        "Helvetica, Arial, sans-serif"
    }

    /// Returns true for the bold face.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::HelveticaBold)
    }

    /// Returns true for the oblique face.
    pub fn is_oblique(self) -> bool {
        matches!(self, Self::HelveticaOblique)
    }
}

/// A face at a point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    face: FontFace,
    size: f32,
}

impl Font {
    pub fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    /// Regular Helvetica at the given size.
    pub fn regular(size: f32) -> Self {
        Self::new(FontFace::Helvetica, size)
    }

    /// Bold Helvetica at the given size.
    pub fn bold(size: f32) -> Self {
        Self::new(FontFace::HelveticaBold, size)
    }

    /// Oblique Helvetica at the given size.
    pub fn oblique(size: f32) -> Self {
        Self::new(FontFace::HelveticaOblique, size)
    }

    pub fn face(self) -> FontFace {
        self.face
    }

    pub fn size(self) -> f32 {
        self.size
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::regular(11.0)
    }
}

/// The mutable state every surface shares across draw calls.
///
/// Fill color, stroke color, line width, and font persist until changed.
/// The default state is black fill, black stroke, a 1pt line, and
/// Helvetica 11.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
    pub font: Font,
}

impl DrawState {
    /// Returns this state with both colors reset to black, keeping line
    /// width and font.
    pub fn with_default_colors(self) -> Self {
        Self {
            fill: Color::black(),
            stroke: Color::black(),
            ..self
        }
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Color::black(),
            stroke: Color::black(),
            line_width: 1.0,
            font: Font::default(),
        }
    }
}
