//! The shape library: a closed catalog of procedurally drawn figures.
//!
//! Every figure is a pure function of a surface, an anchor point, and a size.
//! Routines paint in layers (body, then features, then accents) and pick an
//! explicit [`Swatch`] before each layer. Each routine runs inside a
//! [`StyleGuard`] that resets fill and stroke to black and restores line width
//! and font, so figures can be drawn back to back on one surface.
//!
//! Offsets inside a figure are fractions of `size` relative to the anchor.
//! Small detail dots (eyes, seeds, chips) keep fixed radii.

use log::trace;

use primer_core::{
    color::Color,
    draw::{StyleGuard, Surface},
    geometry::Point,
};

mod animals;
mod basic;
mod food;
mod nature;
mod sky;
mod things;

/// A named palette color used by the shape library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Red,
    Crimson,
    SaddleBrown,
    Chocolate,
    Cocoa,
    ForestGreen,
    Banana,
    Yellow,
    Gold,
    DarkOrange,
    Silver,
    Blue,
    SkyBlue,
    Pink,
    HotPink,
    Charcoal,
    White,
    Black,
}

impl Swatch {
    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::from_rgb8(0xFF, 0x44, 0x44),
            Self::Crimson => Color::from_rgb8(0xFF, 0x17, 0x44),
            Self::SaddleBrown => Color::from_rgb8(0x8B, 0x45, 0x13),
            Self::Chocolate => Color::from_rgb8(0xD2, 0x69, 0x1E),
            Self::Cocoa => Color::from_rgb8(0x4B, 0x2F, 0x23),
            Self::ForestGreen => Color::from_rgb8(0x22, 0x8B, 0x22),
            Self::Banana => Color::from_rgb8(0xFF, 0xE1, 0x35),
            Self::Yellow => Color::from_rgb8(0xFF, 0xFF, 0x00),
            Self::Gold => Color::from_rgb8(0xFF, 0xD7, 0x00),
            Self::DarkOrange => Color::from_rgb8(0xFF, 0x8C, 0x00),
            Self::Silver => Color::from_rgb8(0xE0, 0xE0, 0xE0),
            Self::Blue => Color::from_rgb8(0x4A, 0x90, 0xE2),
            Self::SkyBlue => Color::from_rgb8(0x87, 0xCE, 0xEB),
            Self::Pink => Color::from_rgb8(0xFF, 0x6B, 0x9D),
            Self::HotPink => Color::from_rgb8(0xFF, 0x69, 0xB4),
            Self::Charcoal => Color::from_rgb8(0x2F, 0x2F, 0x2F),
            Self::White => Color::white(),
            Self::Black => Color::black(),
        }
    }
}

/// Every figure in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Apple,
    Banana,
    Bear,
    Bee,
    Book,
    Butterfly,
    Car,
    Carrot,
    Cat,
    Circle,
    Cookie,
    Dog,
    Fish,
    Flower,
    Heart,
    Moon,
    Orange,
    Pencil,
    Pizza,
    Rabbit,
    Rocket,
    Square,
    Star,
    Strawberry,
    Sun,
    Tree,
    Triangle,
}

/// Catalog names in sorted order. Several names may share one figure.
const CATALOG: &[(&str, ObjectKind)] = &[
    ("apple", ObjectKind::Apple),
    ("banana", ObjectKind::Banana),
    ("bear", ObjectKind::Bear),
    ("bee", ObjectKind::Bee),
    ("book", ObjectKind::Book),
    ("butterfly", ObjectKind::Butterfly),
    ("car", ObjectKind::Car),
    ("carrot", ObjectKind::Carrot),
    ("cat", ObjectKind::Cat),
    ("circle", ObjectKind::Circle),
    ("cookie", ObjectKind::Cookie),
    ("dog", ObjectKind::Dog),
    ("fish", ObjectKind::Fish),
    ("flower", ObjectKind::Flower),
    ("heart", ObjectKind::Heart),
    ("moon", ObjectKind::Moon),
    ("orange", ObjectKind::Orange),
    ("pencil", ObjectKind::Pencil),
    ("pizza", ObjectKind::Pizza),
    ("rabbit", ObjectKind::Rabbit),
    ("rocket", ObjectKind::Rocket),
    ("square", ObjectKind::Square),
    ("star", ObjectKind::Star),
    ("starfish", ObjectKind::Star),
    ("strawberry", ObjectKind::Strawberry),
    ("sun", ObjectKind::Sun),
    ("tree", ObjectKind::Tree),
    ("triangle", ObjectKind::Triangle),
];

impl ObjectKind {
    /// Looks up a catalog name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use primer::shapes::ObjectKind;
    /// assert_eq!(ObjectKind::from_name("Apple"), Some(ObjectKind::Apple));
    /// assert_eq!(ObjectKind::from_name("starfish"), Some(ObjectKind::Star));
    /// assert_eq!(ObjectKind::from_name("unicorn"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        CATALOG
            .binary_search_by(|(entry, _)| (*entry).cmp(name.as_str()))
            .ok()
            .map(|index| CATALOG[index].1)
    }

    /// All (name, figure) pairs, sorted by name.
    pub fn catalog() -> impl Iterator<Item = (&'static str, ObjectKind)> {
        CATALOG.iter().copied()
    }

    /// The primary catalog name of this figure.
    pub fn name(self) -> &'static str {
        CATALOG
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("circle")
    }

    /// Draws this figure centred on `anchor`.
    pub fn draw(self, surface: &mut dyn Surface, anchor: Point, size: f32) {
        trace!(kind:? = self, x = anchor.x(), y = anchor.y(), size; "Drawing figure");

        let mut guard = StyleGuard::resetting_colors(surface);
        let surface: &mut dyn Surface = &mut *guard;

        match self {
            Self::Apple => food::apple(surface, anchor, size),
            Self::Banana => food::banana(surface, anchor, size),
            Self::Orange => food::orange(surface, anchor, size),
            Self::Strawberry => food::strawberry(surface, anchor, size),
            Self::Cookie => food::cookie(surface, anchor, size),
            Self::Pizza => food::pizza(surface, anchor, size),
            Self::Carrot => food::carrot(surface, anchor, size),
            Self::Dog => animals::dog(surface, anchor, size),
            Self::Cat => animals::cat(surface, anchor, size),
            Self::Rabbit => animals::rabbit(surface, anchor, size),
            Self::Bear => animals::bear(surface, anchor, size),
            Self::Fish => animals::fish(surface, anchor, size),
            Self::Butterfly => animals::butterfly(surface, anchor, size),
            Self::Bee => animals::bee(surface, anchor, size),
            Self::Star => sky::star(surface, anchor, size),
            Self::Sun => sky::sun(surface, anchor, size),
            Self::Moon => sky::moon(surface, anchor, size),
            Self::Rocket => sky::rocket(surface, anchor, size),
            Self::Tree => nature::tree(surface, anchor, size),
            Self::Flower => nature::flower(surface, anchor, size),
            Self::Heart => nature::heart(surface, anchor, size),
            Self::Car => things::car(surface, anchor, size),
            Self::Book => things::book(surface, anchor, size),
            Self::Pencil => things::pencil(surface, anchor, size),
            Self::Circle => basic::circle(surface, anchor, size),
            Self::Square => basic::square(surface, anchor, size),
            Self::Triangle => basic::triangle(surface, anchor, size),
        }
    }
}

/// Draws the generic figure used when a name resolves to nothing: a plain
/// filled circle.
pub fn draw_fallback(surface: &mut dyn Surface, anchor: Point, size: f32) {
    trace!(x = anchor.x(), y = anchor.y(), size; "Drawing fallback figure");

    let mut guard = StyleGuard::resetting_colors(surface);
    basic::circle(&mut *guard, anchor, size);
}

/// Returns the point at (`dx`·`size`, `dy`·`size`) from `anchor`.
fn at(anchor: Point, size: f32, dx: f32, dy: f32) -> Point {
    anchor.offset(dx * size, dy * size)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use primer_core::draw::{DrawCommand, DrawState, Font, PathSegment, RecordingSurface};

    use super::*;

    fn every_kind() -> Vec<ObjectKind> {
        let mut kinds: Vec<_> = ObjectKind::catalog().map(|(_, kind)| kind).collect();
        kinds.dedup();
        kinds
    }

    #[test]
    fn test_catalog_is_sorted_and_complete() {
        let names: Vec<_> = ObjectKind::catalog().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();

        assert_eq!(names, sorted);
        assert_eq!(names.len(), 28);
        assert_eq!(every_kind().len(), 27);
    }

    #[test]
    fn test_from_name_ignores_case_and_resolves_aliases() {
        assert_eq!(ObjectKind::from_name("APPLE"), Some(ObjectKind::Apple));
        assert_eq!(ObjectKind::from_name("StarFish"), Some(ObjectKind::Star));
        assert_eq!(ObjectKind::from_name(""), None);
        assert_eq!(ObjectKind::from_name("dragon"), None);
    }

    #[test]
    fn test_name_round_trips_through_lookup() {
        for kind in every_kind() {
            assert_eq!(ObjectKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_every_figure_leaves_default_state() {
        for (name, kind) in ObjectKind::catalog() {
            let mut surface = RecordingSurface::new();
            kind.draw(&mut surface, Point::new(100.0, 100.0), 15.0);

            assert_eq!(
                surface.state(),
                DrawState::default(),
                "`{name}` leaked draw state"
            );
        }
    }

    #[test]
    fn test_figures_reset_colors_but_keep_caller_width_and_font() {
        for kind in every_kind() {
            let mut surface = RecordingSurface::new();
            surface.set_fill_color(Swatch::Pink.color());
            surface.set_line_width(4.0);
            surface.set_font(Font::bold(20.0));

            kind.draw(&mut surface, Point::new(0.0, 0.0), 20.0);

            let state = surface.state();
            assert_eq!(state.fill, Color::black(), "{kind:?}");
            assert_eq!(state.stroke, Color::black(), "{kind:?}");
            assert_eq!(state.line_width, 4.0, "{kind:?}");
            assert_eq!(state.font, Font::bold(20.0), "{kind:?}");
        }
    }

    #[test]
    fn test_every_figure_sets_a_color_before_drawing() {
        for kind in every_kind() {
            let mut surface = RecordingSurface::new();
            kind.draw(&mut surface, Point::new(50.0, 50.0), 20.0);

            let commands = surface.commands();
            let first_mark = commands
                .iter()
                .position(DrawCommand::is_primitive)
                .expect("figure draws something");
            assert!(
                commands[..first_mark]
                    .iter()
                    .any(|command| matches!(command, DrawCommand::SetFillColor(_))),
                "{kind:?} drew before choosing a fill"
            );
            assert!(commands.len() >= 2, "{kind:?} is too sparse");
        }
    }

    #[test]
    fn test_figures_are_deterministic() {
        for kind in every_kind() {
            let mut first = RecordingSurface::new();
            let mut second = RecordingSurface::new();
            kind.draw(&mut first, Point::new(12.0, 34.0), 15.0);
            kind.draw(&mut second, Point::new(12.0, 34.0), 15.0);
            assert_eq!(first.commands(), second.commands());
        }
    }

    #[test]
    fn test_star_alternates_radius() {
        let mut surface = RecordingSurface::new();
        let anchor = Point::new(0.0, 0.0);
        ObjectKind::Star.draw(&mut surface, anchor, 20.0);

        let path = surface
            .primitives()
            .find_map(|command| match command {
                DrawCommand::Path { path, .. } => Some(path.clone()),
                _ => None,
            })
            .expect("star is a path");

        let vertices: Vec<_> = path
            .segments()
            .iter()
            .filter_map(|segment| match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(vertices.len(), 10);
        assert!(matches!(path.segments().last(), Some(PathSegment::Close)));

        // First vertex points straight up.
        assert_approx_eq!(f32, vertices[0].x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, vertices[0].y(), 20.0, epsilon = 1e-4);

        for (i, vertex) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 20.0 } else { 8.0 };
            assert_approx_eq!(f32, vertex.distance(anchor), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_sun_has_eight_rays() {
        let mut surface = RecordingSurface::new();
        ObjectKind::Sun.draw(&mut surface, Point::new(0.0, 0.0), 10.0);

        let rays: Vec<_> = surface
            .primitives()
            .filter_map(|command| match command {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(rays.len(), 8);
        for (from, to) in rays {
            assert_approx_eq!(f32, from.distance(Point::default()), 7.0, epsilon = 1e-4);
            assert_approx_eq!(f32, to.distance(Point::default()), 10.0, epsilon = 1e-4);
        }
        assert!(surface.commands().contains(&DrawCommand::SetLineWidth(3.0)));
    }

    #[test]
    fn test_fallback_is_a_single_circle() {
        let mut surface = RecordingSurface::new();
        draw_fallback(&mut surface, Point::new(5.0, 5.0), 12.0);

        let marks: Vec<_> = surface.primitives().collect();
        assert_eq!(marks.len(), 1);
        assert!(matches!(
            marks[0],
            DrawCommand::Circle { radius, .. } if *radius == 12.0
        ));
        assert_eq!(surface.state(), DrawState::default());
    }
}
