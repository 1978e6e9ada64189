//! Axis-aligned ellipse outlines with 4-way symmetry.

use super::{check_extent, validate_radius};
use crate::error::{to_lattice, Axis, Result};
use crate::geometry::Point;

/// Rasterize an ellipse outline with the two-region midpoint algorithm.
///
/// Region 1 starts at the top `(0, ry)` and steps x while the tangent slope
/// magnitude is at most 1 (`2ry²x < 2rx²y`). Region 2 resumes from the exact
/// state region 1 stopped at and steps y down to the x axis. Every visited
/// point is mirrored into the four quadrants, so points on the axes appear
/// twice.
///
/// Decision terms are `f64`: `p1` starts at `ry² - rx²ry + rx²/4`.
///
/// Very flat ellipses (`rx >= 8 * ry`) can stop short of `(±rx, 0)`:
/// region 2 reaches the x axis before x catches up.
///
/// Degenerate axes terminate: `rx == 0` yields the vertical run `x = 0,
/// |y| <= ry`, and `ry == 0` yields the center four times.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`](crate::Error::NegativeRadius) if either
/// semi-axis is negative and [`Error::CoordinateOverflow`](crate::Error::CoordinateOverflow)
/// if the ellipse leaves the `i32` lattice.
///
/// # Example
///
/// ```
/// use trueno_raster::render::midpoint_ellipse;
/// use trueno_raster::geometry::Point;
///
/// let points = midpoint_ellipse(Point::new(10, 10), 4, 2).unwrap();
/// assert!(points.contains(&Point::new(14, 10)));
/// assert!(points.contains(&Point::new(10, 12)));
/// ```
pub fn midpoint_ellipse(center: Point, rx: i32, ry: i32) -> Result<Vec<Point>> {
    validate_radius(Axis::Horizontal, rx)?;
    validate_radius(Axis::Vertical, ry)?;
    check_extent(center, rx, ry)?;
    if rx == 0 || ry == 0 {
        log::trace!("midpoint_ellipse: degenerate semi-axis rx={rx} ry={ry} at {center}");
    }

    let rx_sq = f64::from(rx) * f64::from(rx);
    let ry_sq = f64::from(ry) * f64::from(ry);

    let mut x: i64 = 0;
    let mut y = i64::from(ry);
    let mut px = 0.0;
    let mut py = 2.0 * rx_sq * y as f64;
    let mut p1 = ry_sq - (rx_sq * f64::from(ry)) + (0.25 * rx_sq);

    let mut points = Vec::with_capacity(4 * (rx as usize + ry as usize + 1));

    // Region 1
    while px < py {
        push_quadrants(&mut points, center, x, y)?;
        x += 1;
        px += 2.0 * ry_sq;
        if p1 < 0.0 {
            p1 += ry_sq + px;
        } else {
            y -= 1;
            py -= 2.0 * rx_sq;
            p1 += ry_sq + px - py;
        }
    }

    // Region 2
    let half_x = x as f64 + 0.5;
    let below_y = (y - 1) as f64;
    let mut p2 = (ry_sq * (half_x * half_x)) + (rx_sq * (below_y * below_y)) - (rx_sq * ry_sq);

    while y >= 0 {
        push_quadrants(&mut points, center, x, y)?;
        y -= 1;
        py -= 2.0 * rx_sq;
        if p2 > 0.0 {
            p2 += rx_sq - py;
        } else {
            x += 1;
            px += 2.0 * ry_sq;
            p2 += rx_sq - py + px;
        }
    }

    Ok(points)
}

/// Push the 4 reflections of `(x, y)` around `center`.
#[inline]
fn push_quadrants(points: &mut Vec<Point>, center: Point, x: i64, y: i64) -> Result<()> {
    let cx = i64::from(center.x);
    let cy = i64::from(center.y);
    let right = to_lattice(cx + x)?;
    let left = to_lattice(cx - x)?;
    let below = to_lattice(cy + y)?;
    let above = to_lattice(cy - y)?;
    points.extend_from_slice(&[
        Point::new(right, below),
        Point::new(left, below),
        Point::new(right, above),
        Point::new(left, above),
    ]);
    Ok(())
}
