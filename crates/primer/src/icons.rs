//! External icon assets.
//!
//! An [`IconStore`] may claim an object name before the shape library gets a
//! chance to draw it. The shipped [`DirectoryIconStore`] maps catalog names to
//! OpenMoji code points and checks for `{code}.svg` under a directory, but
//! compositing the asset is not implemented: its [`IconStore::draw`] always
//! reports `false`, so the resolver falls through to the procedural figure.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::debug;

use primer_core::{draw::Surface, geometry::Point};

/// A source of pre-drawn icons.
pub trait IconStore: fmt::Debug {
    /// Whether the store is usable at all.
    fn enabled(&self) -> bool;

    /// Whether an asset exists for `object_type`.
    fn has_icon(&self, object_type: &str) -> bool;

    /// Draws the icon centred on `anchor`. Returns `false` when nothing was
    /// drawn and the caller should fall back.
    fn draw(&self, surface: &mut dyn Surface, object_type: &str, anchor: Point, size: f32)
    -> bool;
}

const OPENMOJI_CODES: [(&str, &str); 12] = [
    ("apple", "1F34E"),
    ("banana", "1F34C"),
    ("orange", "1F34A"),
    ("strawberry", "1F353"),
    ("cookie", "1F36A"),
    ("pizza", "1F355"),
    ("dog", "1F436"),
    ("cat", "1F431"),
    ("rabbit", "1F430"),
    ("bear", "1F43B"),
    ("fish", "1F41F"),
    ("butterfly", "1F98B"),
];

/// Icons stored as `{code}.svg` files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryIconStore {
    root: PathBuf,
    enabled: bool,
    codes: IndexMap<&'static str, &'static str>,
}

impl DirectoryIconStore {
    /// Creates a store over `root`. The store is enabled only if `root`
    /// exists now; it is not re-checked later.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let enabled = root.is_dir();
        debug!(root = root.display().to_string(), enabled; "Opened icon directory");

        Self {
            root,
            enabled,
            codes: OPENMOJI_CODES.into_iter().collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The OpenMoji code point for a catalog name, ignoring case.
    pub fn code(&self, object_type: &str) -> Option<&'static str> {
        self.codes
            .get(object_type.to_lowercase().as_str())
            .copied()
    }

    fn icon_path(&self, object_type: &str) -> Option<PathBuf> {
        self.code(object_type)
            .map(|code| self.root.join(format!("{code}.svg")))
    }
}

impl IconStore for DirectoryIconStore {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn has_icon(&self, object_type: &str) -> bool {
        self.enabled
            && self
                .icon_path(object_type)
                .is_some_and(|path| path.is_file())
    }

    /// Always returns `false`; SVG asset compositing is an extension point.
    fn draw(
        &self,
        _surface: &mut dyn Surface,
        object_type: &str,
        _anchor: Point,
        _size: f32,
    ) -> bool {
        debug!(object_type; "Icon compositing unavailable, falling back");
        false
    }
}
