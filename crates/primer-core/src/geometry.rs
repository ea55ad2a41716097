//! Geometric primitives for page layout and figure construction.
//!
//! # Coordinate System
//!
//! Primer draws in page points with the origin at the bottom-left corner of
//! the page, matching printed-document conventions:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward, so content flowing down a page moves the
//!   vertical cursor toward smaller values
//!
//! Surfaces that target a top-left origin (such as SVG) flip the Y axis when
//! they emit output.

/// A 2D point in page space.
///
/// Points use `f32` coordinates and provide operations for basic vector math.
///
/// # Examples
///
/// ```
/// # use primer_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let moved = p1.offset(2.0, -4.0);
/// assert_eq!(moved, Point::new(12.0, 16.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns this point shifted by `dx` horizontally and `dy` vertically.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the point at `radius` from this point in direction `angle`
    /// (radians, counter-clockwise from the positive X axis).
    ///
    /// # Examples
    ///
    /// ```
    /// # use primer_core::geometry::Point;
    /// let center = Point::new(100.0, 100.0);
    /// let top = center.polar(10.0, std::f32::consts::FRAC_PI_2);
    /// assert!((top.x() - 100.0).abs() < 1e-4);
    /// assert!((top.y() - 110.0).abs() < 1e-4);
    /// ```
    pub fn polar(self, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: radius.mul_add(cos, self.x),
            y: radius.mul_add(sin, self.y),
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance between this point and another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_polar_cardinal_directions() {
        let center = Point::new(50.0, 50.0);

        let right = center.polar(10.0, 0.0);
        assert_approx_eq!(f32, right.x(), 60.0, epsilon = 1e-4);
        assert_approx_eq!(f32, right.y(), 50.0, epsilon = 1e-4);

        let down = center.polar(10.0, -PI / 2.0);
        assert_approx_eq!(f32, down.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, down.y(), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
        assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_offset_and_sub() {
        let p = Point::new(10.0, 10.0).offset(-2.5, 5.0);
        assert_eq!(p, Point::new(7.5, 15.0));
        assert_eq!(p.sub_point(Point::new(7.5, 15.0)), Point::default());
    }

    proptest! {
        #[test]
        fn prop_polar_keeps_radius(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            radius in 0.0f32..100.0,
            angle in -10.0f32..10.0,
        ) {
            let center = Point::new(x, y);
            let distance = center.polar(radius, angle).distance(center);
            prop_assert!((distance - radius).abs() < 1e-2);
        }
    }
}
