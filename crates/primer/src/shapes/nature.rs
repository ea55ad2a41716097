//! Trees, flowers, and hearts.

use std::f32::consts::TAU;

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

const PETALS: usize = 5;

pub(super) fn tree(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::SaddleBrown.color());
    surface.rect(p(-0.2, -1.0), size * 0.4, size * 0.8, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::ForestGreen.color());
    surface.circle(p(0.0, 0.3), size * 0.6, Paint::FillAndStroke);
    surface.circle(p(-0.4, 0.5), size * 0.5, Paint::FillAndStroke);
    surface.circle(p(0.4, 0.5), size * 0.5, Paint::FillAndStroke);
}

pub(super) fn flower(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::HotPink.color());
    for i in 0..PETALS {
        let angle = i as f32 * TAU / PETALS as f32;
        surface.circle(anchor.polar(size * 0.5, angle), size * 0.4, Paint::FillAndStroke);
    }

    surface.set_fill_color(Swatch::Gold.color());
    surface.circle(anchor, size * 0.3, Paint::FillAndStroke);
}

/// Four cubic lobes meeting at the bottom point.
pub(super) fn heart(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Crimson.color());
    let outline = PathBuilder::new()
        .move_to(p(0.0, -0.5))
        .curve_to(p(-0.25, -0.75), p(-0.5, -0.5), p(-0.5, -0.25))
        .curve_to(p(-0.5, 0.0), p(-0.25, 0.25), p(0.0, 0.5))
        .curve_to(p(0.25, 0.25), p(0.5, 0.0), p(0.5, -0.25))
        .curve_to(p(0.5, -0.5), p(0.25, -0.75), p(0.0, -0.5))
        .close()
        .build();
    surface.draw_path(&outline, Paint::FillAndStroke);
}
