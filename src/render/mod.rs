//! Rasterization of lines, circles and ellipses onto the integer lattice.
//!
//! Every rasterizer is a pure function returning the visited lattice points
//! in stepping order. Circle and ellipse output is built from symmetric
//! reflections and keeps the duplicates that arise on the axes and
//! diagonals; use [`dedup_points`] when a point set is needed.
//!
//! # Algorithms
//!
//! - **DDA Line**: floating-point increments with pinned rounding
//! - **Midpoint Line**: integer midpoint decision, first octant only
//! - **Bresenham's Line**: symmetric integer error term, any octant
//! - **Midpoint Circle** / **Bresenham's Circle**: 8-way symmetric stepping
//! - **Midpoint Ellipse**: two-region stepping with 4-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod circle;
mod ellipse;
mod line;

use std::collections::HashSet;

use crate::config::{CircleAlgorithm, LineAlgorithm, RasterConfig};
use crate::error::{Axis, Error, Result};
use crate::geometry::{Circle, Ellipse, Line, Point};

pub use circle::{bresenham_circle, midpoint_circle};
pub use ellipse::midpoint_ellipse;
pub use line::{bresenham_line, dda_line, dda_line_with, midpoint_line, midpoint_line_with};

/// Trait for shapes that can be rasterized to lattice points.
pub trait Rasterize {
    /// Rasterize this shape using the algorithms selected in `config`.
    fn rasterize(&self, config: &RasterConfig) -> Result<Vec<Point>>;
}

impl Rasterize for Line {
    fn rasterize(&self, config: &RasterConfig) -> Result<Vec<Point>> {
        match config.line_algorithm {
            LineAlgorithm::Dda => dda_line_with(self.start, self.end, config),
            LineAlgorithm::Midpoint => midpoint_line_with(self.start, self.end, config),
            LineAlgorithm::Bresenham => Ok(bresenham_line(self.start, self.end)),
        }
    }
}

impl Rasterize for Circle {
    fn rasterize(&self, config: &RasterConfig) -> Result<Vec<Point>> {
        match config.circle_algorithm {
            CircleAlgorithm::Midpoint => midpoint_circle(self.center, self.radius),
            CircleAlgorithm::Bresenham => bresenham_circle(self.center, self.radius),
        }
    }
}

impl Rasterize for Ellipse {
    fn rasterize(&self, _config: &RasterConfig) -> Result<Vec<Point>> {
        midpoint_ellipse(self.center, self.rx, self.ry)
    }
}

/// Remove repeated points, keeping the first occurrence of each.
#[must_use]
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// Reject negative radii.
fn validate_radius(axis: Axis, radius: i32) -> Result<()> {
    if radius < 0 {
        log::warn!("rejecting negative {axis} {radius}");
        return Err(Error::NegativeRadius { axis, radius });
    }
    Ok(())
}

/// Ensure the bounding box `center ± (rx, ry)` lies inside the lattice.
fn check_extent(center: Point, rx: i32, ry: i32) -> Result<()> {
    for (c, r) in [(center.x, rx), (center.y, ry)] {
        for edge in [i64::from(c) - i64::from(r), i64::from(c) + i64::from(r)] {
            if i32::try_from(edge).is_err() {
                log::warn!("extent {edge} around {center} leaves the i32 lattice");
                return Err(Error::CoordinateOverflow { axis_value: edge });
            }
        }
    }
    Ok(())
}
