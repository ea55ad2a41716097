//! Scoped draw-state restoration.

use std::ops::{Deref, DerefMut};

use log::trace;

use crate::draw::{DrawState, Surface};

/// Exclusive access to a surface that restores draw state when dropped.
///
/// Routines that change colors, line width, or font wrap the surface in a
/// guard and draw through it. Whatever the routine changed, the surface is
/// brought back to the guard's restore target on every exit path, early
/// returns included.
///
/// # Examples
///
/// ```
/// # use primer_core::{color::Color, draw::{RecordingSurface, StyleGuard, Surface, Paint}};
/// # use primer_core::geometry::Point;
/// let mut surface = RecordingSurface::new();
/// {
///     let mut guarded = StyleGuard::resetting_colors(&mut surface);
///     guarded.set_fill_color(Color::from_rgb8(0xFF, 0x44, 0x44));
///     guarded.set_line_width(3.0);
///     guarded.circle(Point::new(10.0, 10.0), 5.0, Paint::FillAndStroke);
/// }
/// assert_eq!(surface.state().fill, Color::black());
/// assert_eq!(surface.state().line_width, 1.0);
/// ```
pub struct StyleGuard<'a> {
    surface: &'a mut dyn Surface,
    restore: DrawState,
}

impl<'a> StyleGuard<'a> {
    /// Guards `surface`, restoring exactly the state it has now.
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        let restore = surface.state();
        Self { surface, restore }
    }

    /// Guards `surface`, restoring its current line width and font but
    /// resetting fill and stroke to black.
    pub fn resetting_colors(surface: &'a mut dyn Surface) -> Self {
        let restore = surface.state().with_default_colors();
        Self { surface, restore }
    }
}

impl<'a> Deref for StyleGuard<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for StyleGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        trace!(restore:? = self.restore; "Restoring draw state");
        self.surface.restore_state(self.restore);
    }
}
