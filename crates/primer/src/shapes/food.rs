//! Fruit, vegetables, and snacks.

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

const CHIP_RADIUS: f32 = 3.0;
const SEED_RADIUS: f32 = 1.5;

pub(super) fn apple(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Red.color());
    surface.circle(anchor, size, Paint::FillAndStroke);

    surface.set_stroke_color(Swatch::SaddleBrown.color());
    surface.set_line_width(2.0);
    surface.line(p(0.0, 1.0), p(0.0, 1.25));

    surface.set_fill_color(Swatch::ForestGreen.color());
    let leaf = PathBuilder::new()
        .move_to(p(0.0, 1.25))
        .curve_to(p(0.25, 1.4), p(0.4, 1.25), p(0.4, 1.1))
        .curve_to(p(0.4, 1.0), p(0.25, 1.0), p(0.0, 1.25))
        .build();
    surface.draw_path(&leaf, Paint::FillAndStroke);
}

pub(super) fn banana(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Banana.color());
    let body = PathBuilder::new()
        .move_to(p(-0.8, 0.3))
        .curve_to(p(-0.5, 0.8), p(0.5, 0.5), p(0.8, -0.3))
        .curve_to(p(0.6, -0.5), p(-0.3, -0.2), p(-0.8, 0.3))
        .build();
    surface.draw_path(&body, Paint::FillAndStroke);
}

pub(super) fn orange(surface: &mut dyn Surface, anchor: Point, size: f32) {
    surface.set_fill_color(Swatch::DarkOrange.color());
    surface.circle(anchor, size, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::ForestGreen.color());
    surface.circle(at(anchor, size, 0.0, 1.0), CHIP_RADIUS, Paint::FillAndStroke);
}

pub(super) fn strawberry(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Crimson.color());
    let body = PathBuilder::new()
        .move_to(p(0.0, -1.0))
        .curve_to(p(-0.7, -0.5), p(-0.7, 0.3), p(0.0, 0.6))
        .curve_to(p(0.7, 0.3), p(0.7, -0.5), p(0.0, -1.0))
        .build();
    surface.draw_path(&body, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Yellow.color());
    for dy in [-0.5, 0.0, 0.3] {
        for dx in [-0.3, 0.0, 0.3] {
            surface.circle(p(dx, dy), SEED_RADIUS, Paint::Fill);
        }
    }

    surface.set_fill_color(Swatch::ForestGreen.color());
    for side in [-1.0_f32, 0.0, 1.0] {
        let leaf = PathBuilder::new()
            .move_to(p(0.3 * side, -1.0))
            .line_to(p(0.4 * side, -1.25))
            .line_to(p(0.2 * side, -1.0))
            .build();
        surface.draw_path(&leaf, Paint::Fill);
    }
}

pub(super) fn cookie(surface: &mut dyn Surface, anchor: Point, size: f32) {
    const CHIPS: [(f32, f32); 5] = [(-0.4, 0.3), (0.3, 0.4), (-0.2, -0.3), (0.4, -0.2), (0.0, 0.0)];

    surface.set_fill_color(Swatch::Chocolate.color());
    surface.circle(anchor, size, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Cocoa.color());
    for (dx, dy) in CHIPS {
        surface.circle(at(anchor, size, dx, dy), CHIP_RADIUS, Paint::Fill);
    }
}

pub(super) fn pizza(surface: &mut dyn Surface, anchor: Point, size: f32) {
    const TOPPINGS: [(f32, f32); 3] = [(-0.3, 0.0), (0.2, 0.2), (0.0, 0.4)];
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Gold.color());
    let slice = PathBuilder::new()
        .move_to(p(0.0, -1.0))
        .line_to(p(-0.8, 0.6))
        .curve_to(p(-0.5, 0.8), p(0.5, 0.8), p(0.8, 0.6))
        .close()
        .build();
    surface.draw_path(&slice, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Red.color());
    for (dx, dy) in TOPPINGS {
        surface.circle(p(dx, dy), CHIP_RADIUS, Paint::Fill);
    }
}

pub(super) fn carrot(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::DarkOrange.color());
    let root = PathBuilder::new()
        .move_to(p(0.0, -1.0))
        .line_to(p(-0.3, 0.8))
        .line_to(p(0.3, 0.8))
        .close()
        .build();
    surface.draw_path(&root, Paint::FillAndStroke);

    surface.set_stroke_color(Swatch::ForestGreen.color());
    for side in [-1.0_f32, 0.0, 1.0] {
        surface.line(p(0.15 * side, -1.0), p(0.2 * side, -1.4));
    }
}
