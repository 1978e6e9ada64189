//! Circle outlines with 8-way symmetry.
//!
//! Both rasterizers step through the octant from the x axis (or y axis) to
//! the diagonal and mirror every visited point into all eight octants. They
//! resolve ties the same way, so they visit the same set of points.

use super::{check_extent, validate_radius};
use crate::error::{Axis, Result};
use crate::geometry::Point;

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Starts at `(radius, 0)` and climbs toward the diagonal. A midpoint that
/// lies exactly on the circle (`p == 0`) pulls `x` inward. Each iteration
/// emits eight points; reflections coincide on the axes and diagonal, and a
/// zero radius yields the center eight times.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`](crate::Error::NegativeRadius) for a
/// negative radius and [`Error::CoordinateOverflow`](crate::Error::CoordinateOverflow)
/// if the circle leaves the `i32` lattice.
///
/// # Example
///
/// ```
/// use trueno_raster::render::midpoint_circle;
/// use trueno_raster::geometry::Point;
///
/// let points = midpoint_circle(Point::new(0, 0), 0).unwrap();
/// assert_eq!(points, vec![Point::new(0, 0); 8]);
/// ```
pub fn midpoint_circle(center: Point, radius: i32) -> Result<Vec<Point>> {
    validate_radius(Axis::Radius, radius)?;
    check_extent(center, radius, radius)?;
    if radius == 0 {
        log::trace!("midpoint_circle: zero radius at {center}");
    }

    let mut x = radius;
    let mut y = 0;
    let mut p = 1 - i64::from(radius);

    let mut points = Vec::with_capacity(octant_capacity(radius));

    while x >= y {
        push_octants(&mut points, center, x, y);

        y += 1;
        if p < 0 {
            p += 2 * i64::from(y) + 1;
        } else {
            x -= 1;
            p += 2 * i64::from(y - x) + 1;
        }
    }

    Ok(points)
}

/// Rasterize a circle outline with Bresenham's algorithm.
///
/// Starts at `(0, radius)` with decision `d = 3 - 2r`, stepping x until it
/// meets y. The update uses the position before the step, which keeps `d`
/// equal to `2p + 1` for the midpoint decision `p`.
///
/// # Errors
///
/// Same as [`midpoint_circle`].
pub fn bresenham_circle(center: Point, radius: i32) -> Result<Vec<Point>> {
    validate_radius(Axis::Radius, radius)?;
    check_extent(center, radius, radius)?;
    if radius == 0 {
        log::trace!("bresenham_circle: zero radius at {center}");
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * i64::from(radius);

    let mut points = Vec::with_capacity(octant_capacity(radius));

    while y >= x {
        push_octants(&mut points, center, x, y);

        if d > 0 {
            d += 4 * i64::from(x - y) + 10;
            y -= 1;
        } else {
            d += 4 * i64::from(x) + 6;
        }
        x += 1;
    }

    Ok(points)
}

/// Eight points per step over roughly `r / sqrt(2)` steps.
fn octant_capacity(radius: i32) -> usize {
    8 * (radius as usize * 3 / 4 + 1)
}

/// Push the 8 reflections of `(x, y)` around `center`.
///
/// Offsets stay within the extent already checked by the caller.
#[inline]
fn push_octants(points: &mut Vec<Point>, center: Point, x: i32, y: i32) {
    points.extend_from_slice(&[
        center.offset(x, y),
        center.offset(-x, y),
        center.offset(x, -y),
        center.offset(-x, -y),
        center.offset(y, x),
        center.offset(-y, x),
        center.offset(y, -x),
        center.offset(-y, -x),
    ]);
}
