//! Visual specifications attached to worksheet problems.
//!
//! A [`VisualSpec`] names one of five pedagogical patterns and carries its
//! parameters. Payloads are built through validating constructors on
//! [`VisualSpec`], so a value that exists is always drawable: number lines
//! have a non-empty range, fraction circles never shade more parts than they
//! have, and grids and groups are never empty.

use thiserror::Error;

/// Most ticks a number line may carry; beyond this the labels overlap.
pub const MAX_NUMBER_LINE_TICKS: u32 = 101;

/// Reasons a visual specification is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualSpecError {
    #[error("invalid number line range: start {start} must be less than end {end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("number line {start}..{end} is too wide; at most {max_ticks} ticks fit on a line")]
    RangeTooWide { start: i32, end: i32, max_ticks: u32 },

    #[error("cannot shade {shaded} of {total} parts")]
    OverShaded { shaded: u32, total: u32 },

    #[error("grouped objects need at least one group")]
    EmptyGroups,

    #[error("group {index} is empty; every group needs at least one object")]
    ZeroGroup { index: usize },

    #[error("array dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: u32, cols: u32 },

    #[error("a fraction circle needs at least one part")]
    ZeroParts,
}

/// A counting grid of identical objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountableObjects {
    object_type: String,
    count: u32,
}

impl CountableObjects {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Runs of objects separated by plus signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedObjects {
    object_type: String,
    groups: Vec<u32>,
}

impl GroupedObjects {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Group sizes, left to right. Never empty; every entry is positive.
    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    pub fn total(&self) -> u32 {
        self.groups.iter().sum()
    }
}

/// A rows-by-columns multiplication array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayGrid {
    object_type: String,
    rows: u32,
    cols: u32,
}

impl ArrayGrid {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }
}

/// A labelled number line from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLine {
    start: i32,
    end: i32,
}

impl NumberLine {
    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of ticks, one per integer in the range.
    pub fn tick_count(&self) -> u32 {
        self.start.abs_diff(self.end).saturating_add(1)
    }
}

/// A circle cut into equal sectors with the first few shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionCircle {
    total_parts: u32,
    shaded_parts: u32,
}

impl FractionCircle {
    pub fn total_parts(&self) -> u32 {
        self.total_parts
    }

    pub fn shaded_parts(&self) -> u32 {
        self.shaded_parts
    }
}

/// The visual drawn beneath a problem's question.
///
/// # Examples
///
/// ```
/// # use primer::visual::{VisualSpec, VisualSpecError};
/// let line = VisualSpec::number_line(0, 10).unwrap();
/// assert_eq!(line.kind(), "number_line");
///
/// assert_eq!(
///     VisualSpec::fraction_circle(4, 5),
///     Err(VisualSpecError::OverShaded { shaded: 5, total: 4 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualSpec {
    CountableObjects(CountableObjects),
    GroupedObjects(GroupedObjects),
    ArrayGrid(ArrayGrid),
    NumberLine(NumberLine),
    FractionCircle(FractionCircle),
}

impl VisualSpec {
    /// A counting grid. Any count, including zero, is accepted.
    pub fn countable(object_type: impl Into<String>, count: u32) -> Self {
        Self::CountableObjects(CountableObjects {
            object_type: object_type.into(),
            count,
        })
    }

    /// Grouped objects for addition.
    ///
    /// # Errors
    ///
    /// Returns [`VisualSpecError::EmptyGroups`] for an empty list and
    /// [`VisualSpecError::ZeroGroup`] for any group of size zero.
    pub fn grouped(
        object_type: impl Into<String>,
        groups: impl Into<Vec<u32>>,
    ) -> Result<Self, VisualSpecError> {
        let groups = groups.into();
        if groups.is_empty() {
            return Err(VisualSpecError::EmptyGroups);
        }
        if let Some(index) = groups.iter().position(|&size| size == 0) {
            return Err(VisualSpecError::ZeroGroup { index });
        }

        Ok(Self::GroupedObjects(GroupedObjects {
            object_type: object_type.into(),
            groups,
        }))
    }

    /// A multiplication array.
    ///
    /// # Errors
    ///
    /// Returns [`VisualSpecError::ZeroDimension`] if either dimension is zero.
    pub fn array(
        object_type: impl Into<String>,
        rows: u32,
        cols: u32,
    ) -> Result<Self, VisualSpecError> {
        if rows == 0 || cols == 0 {
            return Err(VisualSpecError::ZeroDimension { rows, cols });
        }

        Ok(Self::ArrayGrid(ArrayGrid {
            object_type: object_type.into(),
            rows,
            cols,
        }))
    }

    /// A number line.
    ///
    /// # Errors
    ///
    /// Returns [`VisualSpecError::InvalidRange`] unless `start < end`, and
    /// [`VisualSpecError::RangeTooWide`] when the range needs more than
    /// [`MAX_NUMBER_LINE_TICKS`] ticks.
    pub fn number_line(start: i32, end: i32) -> Result<Self, VisualSpecError> {
        if start >= end {
            return Err(VisualSpecError::InvalidRange { start, end });
        }
        if start.abs_diff(end) >= MAX_NUMBER_LINE_TICKS {
            return Err(VisualSpecError::RangeTooWide {
                start,
                end,
                max_ticks: MAX_NUMBER_LINE_TICKS,
            });
        }
        Ok(Self::NumberLine(NumberLine { start, end }))
    }

    /// A fraction circle.
    ///
    /// # Errors
    ///
    /// Returns [`VisualSpecError::ZeroParts`] for zero parts and
    /// [`VisualSpecError::OverShaded`] when `shaded_parts > total_parts`.
    pub fn fraction_circle(total_parts: u32, shaded_parts: u32) -> Result<Self, VisualSpecError> {
        if total_parts == 0 {
            return Err(VisualSpecError::ZeroParts);
        }
        if shaded_parts > total_parts {
            return Err(VisualSpecError::OverShaded {
                shaded: shaded_parts,
                total: total_parts,
            });
        }

        Ok(Self::FractionCircle(FractionCircle {
            total_parts,
            shaded_parts,
        }))
    }

    /// The tag used for this variant in worksheet definitions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CountableObjects(_) => "countable_objects",
            Self::GroupedObjects(_) => "grouped_objects",
            Self::ArrayGrid(_) => "array",
            Self::NumberLine(_) => "number_line",
            Self::FractionCircle(_) => "fraction_circle",
        }
    }

    /// The catalog name of the repeated object, for variants that draw one.
    pub fn object_type(&self) -> Option<&str> {
        match self {
            Self::CountableObjects(spec) => Some(spec.object_type()),
            Self::GroupedObjects(spec) => Some(spec.object_type()),
            Self::ArrayGrid(spec) => Some(spec.object_type()),
            Self::NumberLine(_) | Self::FractionCircle(_) => None,
        }
    }
}
