//! Everyday objects.

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

pub(super) fn car(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Red.color());
    surface.rect(p(-1.0, -0.3), size * 2.0, size * 0.6, Paint::FillAndStroke);
    let cabin = PathBuilder::new()
        .move_to(p(-0.5, 0.3))
        .line_to(p(-0.3, 0.8))
        .line_to(p(0.3, 0.8))
        .line_to(p(0.5, 0.3))
        .close()
        .build();
    surface.draw_path(&cabin, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::SkyBlue.color());
    for dx in [-0.4, 0.1] {
        surface.rect(p(dx, 0.35), size * 0.3, size * 0.35, Paint::FillAndStroke);
    }

    surface.set_fill_color(Swatch::Charcoal.color());
    for dx in [-0.6, 0.6] {
        surface.circle(p(dx, -0.3), size * 0.25, Paint::FillAndStroke);
    }
}

pub(super) fn book(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Blue.color());
    surface.rect(p(-0.6, -0.8), size * 1.2, size * 1.6, Paint::FillAndStroke);

    surface.set_stroke_color(Swatch::White.color());
    surface.set_line_width(2.0);
    surface.line(p(0.0, -0.8), p(0.0, 0.8));
}

pub(super) fn pencil(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Gold.color());
    surface.rect(p(-0.2, -1.0), size * 0.4, size * 1.6, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::HotPink.color());
    surface.rect(p(-0.2, 0.5), size * 0.4, size * 0.3, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Chocolate.color());
    let tip = PathBuilder::new()
        .move_to(p(-0.2, -1.0))
        .line_to(p(0.0, -1.3))
        .line_to(p(0.2, -1.0))
        .close()
        .build();
    surface.draw_path(&tip, Paint::FillAndStroke);
}
