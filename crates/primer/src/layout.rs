//! The layout engine: turns a [`VisualSpec`] into draw calls.
//!
//! Every placement starts at an origin (the top-left of the visual's band,
//! with the first object row centred on `origin.y`) and returns the cursor
//! below which following content may be placed. All placements run inside a
//! [`StyleGuard`], so the caller's draw state survives untouched.

use std::f32::consts::{FRAC_PI_2, TAU};

use log::{debug, trace};

use primer_core::{
    color::Color,
    draw::{Font, Paint, PathBuilder, StyleGuard, Surface},
    geometry::Point,
};

use crate::{
    config::LayoutConfig,
    resolver::Resolver,
    shapes::Swatch,
    visual::{ArrayGrid, CountableObjects, FractionCircle, GroupedObjects, NumberLine, VisualSpec},
};

/// Gap left under counting grids, grouped objects, and number lines.
const BAND_GAP: f32 = 50.0;
/// Gap left under multiplication arrays.
const ARRAY_GAP: f32 = 20.0;
/// Gap left under fraction circles.
const FRACTION_GAP: f32 = 30.0;

const PLUS_FONT_SIZE: f32 = 20.0;
const PLUS_OFFSET: (f32, f32) = (-12.0, -8.0);

const AXIS_WIDTH: f32 = 2.0;
const TICK_HALF_HEIGHT: f32 = 5.0;
const TICK_LABEL_DROP: f32 = 20.0;
const TICK_LABEL_SIZE: f32 = 10.0;

/// Distance from the band's corner to the fraction circle's bounding box.
const FRACTION_INSET: f32 = 20.0;
const FRACTION_STROKE_WIDTH: f32 = 2.0;
/// Arc segments per shaded wedge.
const WEDGE_SEGMENTS: u32 = 20;

/// Places visual specifications on a surface.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    resolver: Resolver<'a>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig, resolver: Resolver<'a>) -> Self {
        Self { config, resolver }
    }

    /// Draws `spec` at `origin` and returns the next free y.
    ///
    /// Without a spec nothing is drawn and `origin.y()` comes back unchanged.
    pub fn place(&self, surface: &mut dyn Surface, spec: Option<&VisualSpec>, origin: Point) -> f32 {
        let Some(spec) = spec else {
            return origin.y();
        };

        debug!(kind = spec.kind(), x = origin.x(), y = origin.y(); "Placing visual");

        let mut guard = StyleGuard::new(surface);
        let surface: &mut dyn Surface = &mut *guard;

        let next_y = match spec {
            VisualSpec::CountableObjects(spec) => self.place_countable(surface, spec, origin),
            VisualSpec::GroupedObjects(spec) => self.place_grouped(surface, spec, origin),
            VisualSpec::ArrayGrid(spec) => self.place_array(surface, spec, origin),
            VisualSpec::NumberLine(spec) => self.place_number_line(surface, spec, origin),
            VisualSpec::FractionCircle(spec) => self.place_fraction(surface, spec, origin),
        };

        trace!(next_y; "Visual placed");
        next_y
    }

    fn place_countable(
        &self,
        surface: &mut dyn Surface,
        spec: &CountableObjects,
        origin: Point,
    ) -> f32 {
        let resolution = self.resolver.resolve(spec.object_type());
        let per_row = self.config.items_per_row().get();
        let spacing = self.config.spacing();
        let count = spec.count() as usize;

        for i in 0..count {
            let (row, col) = (i / per_row, i % per_row);
            let anchor = origin.offset(col as f32 * spacing, -(row as f32) * spacing);
            resolution.draw(surface, anchor, self.config.object_size());
        }

        let rows = count.div_ceil(per_row);
        origin.y() - spacing * rows as f32 - BAND_GAP
    }

    fn place_grouped(&self, surface: &mut dyn Surface, spec: &GroupedObjects, origin: Point) -> f32 {
        let resolution = self.resolver.resolve(spec.object_type());
        let spacing = self.config.spacing();
        let mut x = origin.x();
        trace!(groups = spec.groups().len(), total = spec.total(); "Placing groups");

        for (index, &size) in spec.groups().iter().enumerate() {
            if index > 0 {
                x += spacing / 2.0;
                let mut guard = StyleGuard::new(&mut *surface);
                guard.set_font(Font::bold(PLUS_FONT_SIZE));
                guard.draw_string(
                    Point::new(x, origin.y()).offset(PLUS_OFFSET.0, PLUS_OFFSET.1),
                    "+",
                );
                drop(guard);
                x += spacing;
            }

            for _ in 0..size {
                resolution.draw(surface, origin.with_x(x), self.config.object_size());
                x += spacing;
            }
        }

        origin.y() - BAND_GAP
    }

    fn place_array(&self, surface: &mut dyn Surface, spec: &ArrayGrid, origin: Point) -> f32 {
        let resolution = self.resolver.resolve(spec.object_type());
        let pitch = self.config.array_pitch();

        for row in 0..spec.rows() {
            for col in 0..spec.cols() {
                let anchor = origin.offset(col as f32 * pitch, -(row as f32) * pitch);
                resolution.draw(surface, anchor, self.config.array_object_size());
            }
        }

        origin.y() - spec.rows() as f32 * pitch - ARRAY_GAP
    }

    fn place_number_line(&self, surface: &mut dyn Surface, spec: &NumberLine, origin: Point) -> f32 {
        let length = self.config.number_line_length();
        let steps = spec.tick_count() - 1;
        let pitch = length / steps as f32;

        surface.set_line_width(AXIS_WIDTH);
        surface.line(origin, origin.offset(length, 0.0));

        surface.set_font(Font::regular(TICK_LABEL_SIZE));
        for i in 0..=steps {
            let x = origin.x() + i as f32 * pitch;
            surface.line(
                Point::new(x, origin.y() - TICK_HALF_HEIGHT),
                Point::new(x, origin.y() + TICK_HALF_HEIGHT),
            );
            let label = i64::from(spec.start()) + i64::from(i);
            surface.draw_centred_string(
                Point::new(x, origin.y() - TICK_LABEL_DROP),
                &label.to_string(),
            );
        }

        origin.y() - BAND_GAP
    }

    fn place_fraction(&self, surface: &mut dyn Surface, spec: &FractionCircle, origin: Point) -> f32 {
        let radius = self.config.fraction_radius();
        let inset = radius + FRACTION_INSET;
        let centre = origin.offset(inset, -inset);
        let parts = spec.total_parts();

        surface.set_stroke_color(Color::black());
        surface.set_line_width(FRACTION_STROKE_WIDTH);
        surface.circle(centre, radius, Paint::Stroke);

        for i in 0..parts {
            surface.line(centre, centre.polar(radius, sector_angle(i, parts)));
        }

        surface.set_fill_color(Swatch::Blue.color());
        for i in 0..spec.shaded_parts() {
            let (from, to) = (sector_angle(i, parts), sector_angle(i + 1, parts));
            let mut wedge = PathBuilder::new().move_to(centre);
            for step in 0..=WEDGE_SEGMENTS {
                let t = step as f32 / WEDGE_SEGMENTS as f32;
                wedge = wedge.line_to(centre.polar(radius, from + (to - from) * t));
            }
            surface.draw_path(&wedge.close().build(), Paint::Fill);
        }

        centre.y() - radius - FRACTION_GAP
    }
}

/// Angle of the `i`-th sector boundary out of `parts`.
fn sector_angle(i: u32, parts: u32) -> f32 {
    TAU * i as f32 / parts as f32 - FRAC_PI_2
}
