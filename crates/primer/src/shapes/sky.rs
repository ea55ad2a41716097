//! Stars, sun, moon, and rocket.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f32 = 2.5;
const SUN_RAYS: usize = 8;

/// A five-pointed star with its first tip pointing up.
pub(super) fn star(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::Gold.color());

    let mut builder = PathBuilder::new();
    for i in 0..STAR_POINTS * 2 {
        let angle = FRAC_PI_2 + i as f32 * PI / STAR_POINTS as f32;
        let radius = if i % 2 == 0 {
            size
        } else {
            size / STAR_INNER_RATIO
        };
        let vertex = anchor.polar(radius, angle);
        builder = if i == 0 {
            builder.move_to(vertex)
        } else {
            builder.line_to(vertex)
        };
    }
    surface.draw_path(&builder.close().build(), Paint::FillAndStroke);
}

pub(super) fn sun(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::Gold.color());
    surface.circle(anchor, size * 0.6, Paint::FillAndStroke);

    surface.set_stroke_color(Swatch::DarkOrange.color());
    surface.set_line_width(3.0);
    for i in 0..SUN_RAYS {
        let angle = i as f32 * FRAC_PI_4;
        surface.line(anchor.polar(size * 0.7, angle), anchor.polar(size, angle));
    }
}

/// A crescent cut out of a full disc by a white overlay.
pub(super) fn moon(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::Gold.color());
    surface.circle(anchor, size, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::White.color());
    surface.circle(at(anchor, size, 0.3, 0.0), size * 0.8, Paint::Fill);
}

pub(super) fn rocket(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Red.color());
    let body = PathBuilder::new()
        .move_to(p(0.0, 1.0))
        .line_to(p(-0.4, 0.2))
        .line_to(p(-0.4, -0.6))
        .line_to(p(0.4, -0.6))
        .line_to(p(0.4, 0.2))
        .close()
        .build();
    surface.draw_path(&body, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::SkyBlue.color());
    surface.circle(p(0.0, 0.4), size * 0.25, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Gold.color());
    for side in [-1.0_f32, 1.0] {
        let fin = PathBuilder::new()
            .move_to(p(0.4 * side, -0.6))
            .line_to(p(0.6 * side, -1.0))
            .line_to(p(0.0, -0.6))
            .build();
        surface.draw_path(&fin, Paint::FillAndStroke);
    }
}
