//! Configuration types for worksheet composition.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so a
//! configuration file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Sizes and spacings used by the layout engine.
//! - [`PageConfig`] - Page geometry and pagination limits.
//! - [`IconConfig`] - Location of the optional icon asset directory.
//!
//! # Example
//!
//! ```
//! # use primer::config::AppConfig;
//! let config: AppConfig = toml::from_str("[page]\nproblems_per_page = 3").unwrap();
//! assert_eq!(config.page().problems_per_page().get(), 3);
//! assert_eq!(config.page().width(), 612.0);
//! ```

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::Deserialize;

const DEFAULT_ITEMS_PER_ROW: NonZeroUsize = NonZeroUsize::new(10).unwrap();
const DEFAULT_PROBLEMS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(5).unwrap();
const DEFAULT_ANSWERS_PER_COLUMN: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    page: PageConfig,

    #[serde(default)]
    icons: IconConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, page: PageConfig, icons: IconConfig) -> Self {
        Self {
            layout,
            page,
            icons,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn icons(&self) -> &IconConfig {
        &self.icons
    }
}

/// Sizes and spacings for the visual patterns.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Objects per row before a counting grid wraps.
    items_per_row: NonZeroUsize,

    /// Horizontal pitch of counted and grouped objects, and the row pitch of
    /// counting grids.
    spacing: f32,

    /// Draw size of counted and grouped objects.
    object_size: f32,

    /// Draw size of objects in a multiplication array.
    array_object_size: f32,

    /// Row and column pitch of a multiplication array.
    array_pitch: f32,

    number_line_length: f32,

    fraction_radius: f32,
}

impl LayoutConfig {
    pub fn items_per_row(&self) -> NonZeroUsize {
        self.items_per_row
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn object_size(&self) -> f32 {
        self.object_size
    }

    pub fn array_object_size(&self) -> f32 {
        self.array_object_size
    }

    pub fn array_pitch(&self) -> f32 {
        self.array_pitch
    }

    pub fn number_line_length(&self) -> f32 {
        self.number_line_length
    }

    pub fn fraction_radius(&self) -> f32 {
        self.fraction_radius
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            spacing: 40.0,
            object_size: 15.0,
            array_object_size: 12.0,
            array_pitch: 35.0,
            number_line_length: 400.0,
            fraction_radius: 40.0,
        }
    }
}

/// Page geometry in points, with pagination limits.
///
/// Defaults describe US Letter with three-quarter-inch margins.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    width: f32,
    height: f32,
    margin: f32,
    problems_per_page: NonZeroUsize,
    answers_per_column: NonZeroUsize,
}

impl PageConfig {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn problems_per_page(&self) -> NonZeroUsize {
        self.problems_per_page
    }

    pub fn answers_per_column(&self) -> NonZeroUsize {
        self.answers_per_column
    }

    /// The y coordinate of the top margin.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }

    /// The x coordinate of the page centre line.
    pub fn centre_x(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 54.0,
            problems_per_page: DEFAULT_PROBLEMS_PER_PAGE,
            answers_per_column: DEFAULT_ANSWERS_PER_COLUMN,
        }
    }
}

/// Where to look for icon assets.
///
/// Without a directory the icon store is not attached and every object is
/// drawn from the shape library.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconConfig {
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl IconConfig {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}
