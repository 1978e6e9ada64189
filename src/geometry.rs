//! Geometric primitives for rasterization.
//!
//! Lattice points are the output of every rasterizer; the shape types bundle
//! the inputs of one rasterization request.

use std::fmt;

/// A pixel location on the integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the point by `(dx, dy)`.
    ///
    /// Callers are responsible for staying inside the lattice; the
    /// rasterizers check their extents before offsetting.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chessboard distance, i.e. the number of king moves between two cells.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A point with real-valued coordinates, accepted by the DDA rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if neither coordinate is NaN or infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<(f64, f64)> for PointF {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// True if start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels. Negative values are rejected at rasterization time.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned ellipse request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal semi-axis.
    pub rx: i32,
    /// Vertical semi-axis.
    pub ry: i32,
}

impl Ellipse {
    /// Create a new ellipse.
    #[must_use]
    pub const fn new(center: Point, rx: i32, ry: i32) -> Self {
        Self { center, rx, ry }
    }

    /// True if both semi-axes are equal.
    #[must_use]
    pub const fn is_circle(&self) -> bool {
        self.rx == self.ry
    }
}
