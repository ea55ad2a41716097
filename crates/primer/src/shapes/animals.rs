//! Animal faces and critters.

use primer_core::{
    draw::{Paint, PathBuilder, Surface},
    geometry::Point,
};

use super::{Swatch, at};

/// Draws a pair of white eyes with black pupils.
fn eyes(surface: &mut dyn Surface, centres: [Point; 2], white: f32, pupil: f32) {
    surface.set_fill_color(Swatch::White.color());
    for centre in centres {
        surface.circle(centre, white, Paint::FillAndStroke);
    }
    surface.set_fill_color(Swatch::Black.color());
    for centre in centres {
        surface.circle(centre, pupil, Paint::Fill);
    }
}

pub(super) fn dog(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Chocolate.color());
    surface.circle(anchor, size, Paint::FillAndStroke);
    surface.circle(p(-0.7, 0.5), size * 0.4, Paint::FillAndStroke);
    surface.circle(p(0.7, 0.5), size * 0.4, Paint::FillAndStroke);

    eyes(surface, [p(-0.3, 0.2), p(0.3, 0.2)], 4.0, 2.0);

    surface.set_fill_color(Swatch::Black.color());
    surface.circle(p(0.0, -0.2), 3.0, Paint::FillAndStroke);
}

pub(super) fn cat(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::DarkOrange.color());
    surface.circle(anchor, size, Paint::FillAndStroke);
    for side in [-1.0_f32, 1.0] {
        let ear = PathBuilder::new()
            .move_to(p(0.8 * side, 0.5))
            .line_to(p(0.5 * side, 1.0))
            .line_to(p(0.3 * side, 0.7))
            .build();
        surface.draw_path(&ear, Paint::FillAndStroke);
    }

    eyes(surface, [p(-0.3, 0.2), p(0.3, 0.2)], 4.0, 2.0);

    surface.set_fill_color(Swatch::Black.color());
    surface.circle(p(0.0, -0.2), 3.0, Paint::FillAndStroke);

    surface.set_stroke_color(Swatch::Black.color());
    for side in [-1.0_f32, 1.0] {
        surface.line(p(0.0, -0.2), p(0.6 * side, -0.3));
    }
}

pub(super) fn rabbit(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Silver.color());
    surface.circle(anchor, size * 0.8, Paint::FillAndStroke);
    surface.ellipse(p(-0.6, 0.4), p(-0.3, 1.2), Paint::FillAndStroke);
    surface.ellipse(p(0.3, 0.4), p(0.6, 1.2), Paint::FillAndStroke);

    eyes(surface, [p(-0.25, 0.15), p(0.25, 0.15)], 3.0, 1.5);

    surface.set_fill_color(Swatch::Black.color());
    surface.circle(p(0.0, -0.2), 2.0, Paint::FillAndStroke);
}

pub(super) fn bear(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::SaddleBrown.color());
    surface.circle(anchor, size, Paint::FillAndStroke);
    surface.circle(p(-0.8, 0.8), size * 0.4, Paint::FillAndStroke);
    surface.circle(p(0.8, 0.8), size * 0.4, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Chocolate.color());
    surface.circle(p(0.0, -0.3), size * 0.4, Paint::FillAndStroke);

    eyes(surface, [p(-0.3, 0.2), p(0.3, 0.2)], 4.0, 2.0);

    surface.set_fill_color(Swatch::Black.color());
    surface.circle(p(0.0, -0.3), 2.0, Paint::FillAndStroke);
}

pub(super) fn fish(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Blue.color());
    let body = PathBuilder::new()
        .move_to(p(-1.0, 0.0))
        .curve_to(p(-1.0, 0.6), p(0.5, 0.6), p(0.5, 0.0))
        .curve_to(p(0.5, -0.6), p(-1.0, -0.6), p(-1.0, 0.0))
        .build();
    surface.draw_path(&body, Paint::FillAndStroke);

    let tail = PathBuilder::new()
        .move_to(p(-1.0, 0.0))
        .line_to(p(-1.4, 0.4))
        .line_to(p(-1.4, -0.4))
        .close()
        .build();
    surface.draw_path(&tail, Paint::FillAndStroke);

    surface.set_fill_color(Swatch::White.color());
    surface.circle(p(0.2, 0.2), 3.0, Paint::FillAndStroke);
    surface.set_fill_color(Swatch::Black.color());
    surface.circle(p(0.2, 0.2), 1.5, Paint::Fill);
}

pub(super) fn butterfly(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Cocoa.color());
    surface.rect(p(-0.1, -0.8), size * 0.2, size * 1.6, Paint::Fill);

    surface.set_fill_color(Swatch::Pink.color());
    for (lift, span) in [(0.3, 0.8), (-0.3, 0.7)] {
        for side in [-1.0_f32, 1.0] {
            let wing = PathBuilder::new()
                .move_to(p(0.0, lift))
                .curve_to(p(span * side, lift + 0.5), p(span * side, lift), p(0.0, 0.0))
                .build();
            surface.draw_path(&wing, Paint::FillAndStroke);
        }
    }

    surface.set_stroke_color(Swatch::Cocoa.color());
    surface.set_fill_color(Swatch::Cocoa.color());
    surface.set_line_width(1.0);
    for side in [-1.0_f32, 1.0] {
        let tip = p(0.25 * side, 1.25);
        surface.line(p(0.1 * side, 0.8), tip);
        surface.circle(tip, 2.0, Paint::Fill);
    }
}

pub(super) fn bee(surface: &mut dyn Surface, anchor: Point, size: f32) {
    let p = |dx, dy| at(anchor, size, dx, dy);

    surface.set_fill_color(Swatch::Gold.color());
    surface.ellipse(p(-0.6, -0.4), p(0.6, 0.4), Paint::FillAndStroke);

    surface.set_fill_color(Swatch::Black.color());
    for dy in [-0.15, 0.15] {
        surface.rect(p(-0.6, dy).offset(0.0, -2.0), size * 1.2, 4.0, Paint::Fill);
    }

    surface.set_fill_color(Swatch::SkyBlue.color());
    for dx in [-0.3, 0.3] {
        surface.ellipse(p(dx - 0.3, 0.2), p(dx + 0.3, 0.8), Paint::FillAndStroke);
    }
}
