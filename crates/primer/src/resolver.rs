//! Object name resolution.
//!
//! [`Resolver::resolve`] is total: every string maps to something drawable.
//! The chain is icon store, then shape catalog, then the generic fallback
//! figure.

use log::debug;

use primer_core::{draw::Surface, geometry::Point};

use crate::{
    icons::IconStore,
    shapes::{self, ObjectKind},
};

/// The procedural figure chosen for a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Catalog(ObjectKind),
    Fallback,
}

impl Figure {
    pub fn draw(self, surface: &mut dyn Surface, anchor: Point, size: f32) {
        match self {
            Self::Catalog(kind) => kind.draw(surface, anchor, size),
            Self::Fallback => shapes::draw_fallback(surface, anchor, size),
        }
    }
}

/// The outcome of resolving one object name.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    name: String,
    icons: Option<&'a dyn IconStore>,
    figure: Figure,
}

impl Resolution<'_> {
    /// The requested name, lowercased.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// Whether an enabled icon store has an asset for this name.
    pub fn icon_claimed(&self) -> bool {
        self.icons.is_some()
    }

    /// Draws one instance centred on `anchor`.
    pub fn draw(&self, surface: &mut dyn Surface, anchor: Point, size: f32) {
        let claimed = self
            .icons
            .is_some_and(|store| store.draw(surface, &self.name, anchor, size));
        if !claimed {
            self.figure.draw(surface, anchor, size);
        }
    }
}

/// Maps object names to drawings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    icons: Option<&'a dyn IconStore>,
}

impl<'a> Resolver<'a> {
    pub fn new(icons: Option<&'a dyn IconStore>) -> Self {
        Self { icons }
    }

    /// Resolves `object_type`. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use primer::{resolver::{Figure, Resolver}, shapes::ObjectKind};
    /// let resolver = Resolver::default();
    /// assert_eq!(resolver.resolve("Cat").figure(), Figure::Catalog(ObjectKind::Cat));
    /// assert_eq!(resolver.resolve("griffin").figure(), Figure::Fallback);
    /// ```
    pub fn resolve(&self, object_type: &str) -> Resolution<'a> {
        let name = object_type.to_lowercase();
        let icons = self
            .icons
            .filter(|store| store.enabled() && store.has_icon(&name));
        let figure = ObjectKind::from_name(&name).map_or(Figure::Fallback, Figure::Catalog);

        let resolution = Resolution {
            name,
            icons,
            figure,
        };
        debug!(
            object_type = resolution.name(),
            figure:? = resolution.figure(),
            icon = resolution.icon_claimed();
            "Resolved object type"
        );
        resolution
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use primer_core::draw::{DrawCommand, RecordingSurface};

    use super::*;

    #[derive(Debug, Default)]
    struct FakeStore {
        enabled: bool,
        claims: bool,
        draws: Cell<usize>,
    }

    impl IconStore for FakeStore {
        fn enabled(&self) -> bool {
            self.enabled
        }

        fn has_icon(&self, object_type: &str) -> bool {
            object_type.eq_ignore_ascii_case("apple")
        }

        fn draw(
            &self,
            surface: &mut dyn Surface,
            _object_type: &str,
            anchor: Point,
            _size: f32,
        ) -> bool {
            self.draws.set(self.draws.get() + 1);
            if self.claims {
                surface.line(anchor, anchor);
            }
            self.claims
        }
    }

    #[test]
    fn test_catalog_names_resolve_to_their_figure() {
        let resolver = Resolver::default();
        for (name, kind) in ObjectKind::catalog() {
            assert_eq!(resolver.resolve(name).figure(), Figure::Catalog(kind));
        }
    }

    #[test]
    fn test_unknown_name_draws_fallback_circle() {
        let resolver = Resolver::default();
        let resolution = resolver.resolve("Dragon");
        assert_eq!(resolution.name(), "dragon");
        let mut surface = RecordingSurface::new();
        resolution.draw(&mut surface, Point::new(1.0, 2.0), 15.0);

        let marks: Vec<_> = surface.primitives().collect();
        assert_eq!(marks.len(), 1);
        assert!(matches!(marks[0], DrawCommand::Circle { radius, .. } if *radius == 15.0));
    }

    #[test]
    fn test_claiming_store_short_circuits() {
        let store = FakeStore {
            enabled: true,
            claims: true,
            ..Default::default()
        };
        let resolver = Resolver::new(Some(&store));
        let resolution = resolver.resolve("apple");
        assert!(resolution.icon_claimed());

        let mut surface = RecordingSurface::new();
        resolution.draw(&mut surface, Point::new(0.0, 0.0), 15.0);

        assert_eq!(store.draws.get(), 1);
        assert_eq!(surface.primitives().count(), 1);
    }

    #[test]
    fn test_declining_store_falls_through_to_catalog() {
        let store = FakeStore {
            enabled: true,
            claims: false,
            ..Default::default()
        };
        let resolver = Resolver::new(Some(&store));

        let mut with_store = RecordingSurface::new();
        resolver
            .resolve("apple")
            .draw(&mut with_store, Point::new(0.0, 0.0), 15.0);

        let mut without_store = RecordingSurface::new();
        ObjectKind::Apple.draw(&mut without_store, Point::new(0.0, 0.0), 15.0);

        assert_eq!(store.draws.get(), 1);
        assert_eq!(with_store.commands(), without_store.commands());
    }

    #[test]
    fn test_disabled_store_is_never_asked() {
        let store = FakeStore::default();
        let resolver = Resolver::new(Some(&store));
        let resolution = resolver.resolve("apple");
        assert!(!resolution.icon_claimed());

        let mut surface = RecordingSurface::new();
        resolution.draw(&mut surface, Point::new(0.0, 0.0), 15.0);
        assert_eq!(store.draws.get(), 0);
    }

    proptest! {
        #[test]
        fn prop_resolve_is_total(name in ".*") {
            let resolver = Resolver::default();
            let resolution = resolver.resolve(&name);
            let mut surface = RecordingSurface::new();
            resolution.draw(&mut surface, Point::new(0.0, 0.0), 10.0);

            prop_assert!(surface.primitives().count() >= 1);
            prop_assert_eq!(surface.state(), primer_core::draw::DrawState::default());
        }
    }
}
