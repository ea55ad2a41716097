//! Line and cubic-curve paths.

use crate::geometry::Point;

/// One segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier from the current point through two control points.
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// How a path or closed primitive is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill,
    Stroke,
    FillAndStroke,
}

impl Paint {
    /// Builds a paint mode from the two independent flags.
    ///
    /// Returns `None` when neither flag is set, since nothing would be drawn.
    pub fn from_flags(fill: bool, stroke: bool) -> Option<Self> {
        match (fill, stroke) {
            (true, true) => Some(Self::FillAndStroke),
            (true, false) => Some(Self::Fill),
            (false, true) => Some(Self::Stroke),
            (false, false) => None,
        }
    }

    pub fn fills(self) -> bool {
        matches!(self, Self::Fill | Self::FillAndStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, Self::Stroke | Self::FillAndStroke)
    }
}

/// An immutable sequence of path segments, built with [`PathBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns every point the path passes through, including curve control
    /// points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|segment| match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::CurveTo {
                control1,
                control2,
                end,
            } => vec![control1, control2, end],
            PathSegment::Close => Vec::new(),
        })
    }
}

/// Builder for [`Path`] values.
///
/// # Examples
///
/// ```
/// # use primer_core::{draw::PathBuilder, geometry::Point};
/// let triangle = PathBuilder::new()
///     .move_to(Point::new(0.0, 10.0))
///     .line_to(Point::new(-8.66, -5.0))
///     .line_to(Point::new(8.66, -5.0))
///     .close()
///     .build();
/// assert_eq!(triangle.segments().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.segments.push(PathSegment::LineTo(point));
        self
    }

    pub fn curve_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.segments.push(PathSegment::CurveTo {
            control1,
            control2,
            end,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn build(self) -> Path {
        Path {
            segments: self.segments,
        }
    }
}
