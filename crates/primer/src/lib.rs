//! Primer - printable math worksheets with procedurally drawn visuals.
//!
//! A [`Worksheet`] collects numbered problems, each with an optional
//! [`visual::VisualSpec`] (countable objects, grouped objects, arrays, number
//! lines or fraction circles). Rendering resolves object names to figures
//! from the built-in shape library, lays each visual out below its question,
//! and paginates the result into an SVG document. The answer key is rendered
//! from the same problems.
//!
//! Worksheets can be built in code or loaded from a TOML
//! [`definition::WorksheetDefinition`].

pub mod compose;
pub mod config;
pub mod definition;
pub mod export;
pub mod icons;
pub mod layout;
pub mod resolver;
pub mod shapes;
pub mod visual;

mod error;
mod worksheet;

pub use primer_core::{color, draw, geometry};

pub use error::PrimerError;
pub use worksheet::{Problem, Worksheet};

use shapes::ObjectKind;

/// Every object name the shape library can draw, sorted alphabetically.
///
/// Names outside this list still render, as a generic fallback figure.
///
/// # Examples
///
/// ```
/// let names = primer::list_available_object_types();
/// assert!(names.contains(&"apple"));
/// assert!(names.is_sorted());
/// ```
pub fn list_available_object_types() -> Vec<&'static str> {
    ObjectKind::catalog().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_types_match_library() {
        let names = list_available_object_types();
        assert!(!names.is_empty());
        for name in &names {
            assert!(ObjectKind::from_name(name).is_some(), "{name}");
        }
    }
}
