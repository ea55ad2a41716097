//! Plain geometric figures. `circle` doubles as the fallback figure.

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

pub(super) fn circle(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::Blue.color());
    surface.circle(anchor, size, Paint::FillAndStroke);
}

pub(super) fn square(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::Blue.color());
    surface.rect(at(anchor, size, -0.5, -0.5), size, size, Paint::FillAndStroke);
}

/// An equilateral triangle inscribed in a circle of radius `size`.
pub(super) fn triangle(surface: &mut dyn Surface, anchor: Point, size: f32) {
    const HALF_SQRT_3: f32 = 0.866;
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Blue.color());
    let outline = PathBuilder::new()
        .move_to(p(0.0, 1.0))
        .line_to(p(-HALF_SQRT_3, -0.5))
        .line_to(p(HALF_SQRT_3, -0.5))
        .close()
        .build();
    surface.draw_path(&outline, Paint::FillAndStroke);
}
