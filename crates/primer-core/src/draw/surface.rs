//! The drawing surface collaborator.

use std::io;

use thiserror::Error;

use crate::{
    color::Color,
    draw::{DrawState, Font, Paint, Path},
    geometry::Point,
};

/// Errors raised while finalizing a surface's output.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Surface was already finalized")]
    AlreadyFinalized,
}

/// A stateful primitive-drawing target.
///
/// Fill color, stroke color, line width, and font are ambient: once set they
/// apply to every following primitive until changed. Closed primitives take a
/// [`Paint`] mode selecting fill, stroke, or both. Coordinates are page
/// points with a bottom-left origin (see [`crate::geometry`]).
///
/// Drawing primitives are infallible; output errors surface from
/// [`finalize`](Surface::finalize), which must be called exactly once after
/// the last page is complete.
pub trait Surface {
    /// Returns a snapshot of the current draw state.
    fn state(&self) -> DrawState;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_font(&mut self, font: Font);

    /// Brings the surface back to `state`, issuing a setter only for the
    /// fields that differ.
    fn restore_state(&mut self, state: DrawState) {
        let current = self.state();
        if current.fill != state.fill {
            self.set_fill_color(state.fill);
        }
        if current.stroke != state.stroke {
            self.set_stroke_color(state.stroke);
        }
        if current.line_width != state.line_width {
            self.set_line_width(state.line_width);
        }
        if current.font != state.font {
            self.set_font(state.font);
        }
    }

    /// Strokes a straight line.
    fn line(&mut self, from: Point, to: Point);

    /// Draws an axis-aligned rectangle whose lower-left corner is `origin`.
    fn rect(&mut self, origin: Point, width: f32, height: f32, paint: Paint);

    fn circle(&mut self, center: Point, radius: f32, paint: Paint);

    /// Draws the ellipse inscribed in the box spanned by two opposite corners.
    fn ellipse(&mut self, corner1: Point, corner2: Point, paint: Paint);

    fn draw_path(&mut self, path: &Path, paint: Paint);

    /// Draws text with its baseline starting at `at`, in the current font and
    /// fill color.
    fn draw_string(&mut self, at: Point, text: &str);

    /// Draws text with its baseline centred horizontally on `at`.
    fn draw_centred_string(&mut self, at: Point, text: &str);

    /// Ends the current page and starts a new one. Draw state carries over.
    fn new_page(&mut self);

    /// Flushes and closes the output.
    fn finalize(&mut self) -> Result<(), SurfaceError>;
}
