//! Output surfaces.

pub mod svg;

pub use self::svg::SvgSurface;
