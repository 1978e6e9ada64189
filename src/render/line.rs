//! Line rasterization.
//!
//! Three rasterizers with different tradeoffs:
//!
//! - [`dda_line`]: floating-point increments, accepts real-valued endpoints.
//! - [`midpoint_line`]: integer midpoint stepping, first octant only.
//! - [`bresenham_line`]: symmetric integer error term, any octant.

use crate::config::{OctantPolicy, RasterConfig, Rounding};
use crate::error::{Error, Result};
use crate::geometry::{Point, PointF};

// ============================================================================
// DDA
// ============================================================================

/// Rasterize a segment with the digital differential analyzer, using the
/// default [`Rounding::HalfUp`] tie-break.
///
/// Walks `max(|dx|, |dy|)` unit steps along the dominant axis, accumulating
/// fractional coordinates and rounding each one independently. A zero-length
/// segment yields the rounded start point alone.
///
/// # Errors
///
/// Returns [`Error::NonFiniteCoordinate`] for NaN or infinite input and
/// [`Error::CoordinateOverflow`] if an endpoint rounds outside the `i32`
/// lattice.
///
/// # Example
///
/// ```
/// use trueno_raster::render::dda_line;
/// use trueno_raster::geometry::Point;
///
/// let points = dda_line(Point::new(0, 0), Point::new(4, 2)).unwrap();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[4], Point::new(4, 2));
/// ```
pub fn dda_line(start: impl Into<PointF>, end: impl Into<PointF>) -> Result<Vec<Point>> {
    dda_line_with(start, end, &RasterConfig::default())
}

/// [`dda_line`] with an explicit configuration (only `rounding` is consulted).
pub fn dda_line_with(
    start: impl Into<PointF>,
    end: impl Into<PointF>,
    config: &RasterConfig,
) -> Result<Vec<Point>> {
    let start = start.into();
    let end = end.into();
    let rounding = config.rounding;

    for p in [start, end] {
        if !p.is_finite() {
            log::warn!("dda_line: rejecting non-finite endpoint ({}, {})", p.x, p.y);
            return Err(Error::NonFiniteCoordinate { x: p.x, y: p.y });
        }
    }

    let first = round_to_lattice(start, rounding)?;
    // Validates the far end before any stepping.
    round_to_lattice(end, rounding)?;

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dx.abs().max(dy.abs());

    if steps == 0.0 {
        log::trace!("dda_line: zero-length segment at {first}");
        return Ok(vec![first]);
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;
    let count = steps.ceil() as usize;

    let mut points = Vec::with_capacity(count + 1);
    points.push(first);

    let mut x = start.x;
    let mut y = start.y;
    for _ in 0..count {
        x += x_inc;
        y += y_inc;
        points.push(round_to_lattice(PointF::new(x, y), rounding)?);
    }

    Ok(points)
}

/// Round a real point onto the lattice.
fn round_to_lattice(p: PointF, rounding: Rounding) -> Result<Point> {
    Ok(Point::new(
        round_coord(p.x, rounding)?,
        round_coord(p.y, rounding)?,
    ))
}

#[inline]
fn round_coord(value: f64, rounding: Rounding) -> Result<i32> {
    let r = rounding.apply(value);
    if r < f64::from(i32::MIN) || r > f64::from(i32::MAX) {
        return Err(Error::CoordinateOverflow {
            axis_value: r as i64,
        });
    }
    Ok(r as i32)
}

// ============================================================================
// Midpoint (first octant)
// ============================================================================

/// Rasterize a segment with the restricted midpoint algorithm.
///
/// Only x-increasing segments with `0 <= slope <= 1` are rasterized
/// correctly: x advances by one per step and y either stays or advances by
/// one. Anything else still terminates but produces a geometrically wrong
/// run (for `end.x <= start.x`, only the start point). Use
/// [`midpoint_line_with`] and [`OctantPolicy::Strict`] to reject such input.
pub fn midpoint_line(start: Point, end: Point) -> Vec<Point> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    if dx <= 0 {
        log::trace!("midpoint_line: end.x <= start.x, emitting start only");
        return vec![start];
    }

    // Halves are exact in f64, so the decision stays exact for any i32 input.
    let dx_f = dx as f64;
    let dy_f = dy as f64;
    let mut d = dy_f - dx_f / 2.0;

    let mut x = start.x;
    let mut y = start.y;

    let mut points = Vec::with_capacity(dx as usize + 1);
    points.push(start);

    // y rises at most dx times and never past max(start.y, end.y).
    while x < end.x {
        x += 1;
        if d < 0.0 {
            d += dy_f;
        } else {
            y += 1;
            d += dy_f - dx_f;
        }
        points.push(Point::new(x, y));
    }

    points
}

/// [`midpoint_line`] honoring `config.octant_policy`.
///
/// # Errors
///
/// Under [`OctantPolicy::Strict`], returns [`Error::OutOfOctant`] unless
/// `0 <= end.y - start.y <= end.x - start.x`.
pub fn midpoint_line_with(start: Point, end: Point, config: &RasterConfig) -> Result<Vec<Point>> {
    if !in_first_octant(start, end) {
        match config.octant_policy {
            OctantPolicy::Strict => {
                log::warn!("midpoint_line: rejecting {start} -> {end}, outside first octant");
                return Err(Error::OutOfOctant { start, end });
            }
            OctantPolicy::Permissive => {
                log::debug!("midpoint_line: {start} -> {end} is outside first octant");
            }
        }
    }

    Ok(midpoint_line(start, end))
}

fn in_first_octant(start: Point, end: Point) -> bool {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    dx >= 0 && (0..=dx).contains(&dy)
}

// ============================================================================
// Bresenham
// ============================================================================

/// Rasterize a segment using Bresenham's algorithm.
///
/// Works in every octant. The result starts at `start`, ends at `end`
/// (exactly once), and holds `max(|dx|, |dy|) + 1` points. Each step moves
/// one or both axes one unit toward the target, so the loop always ends.
///
/// # Example
///
/// ```
/// use trueno_raster::render::bresenham_line;
/// use trueno_raster::geometry::Point;
///
/// let points = bresenham_line(Point::new(0, 0), Point::new(3, 1));
/// assert_eq!(
///     points,
///     vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(3, 1)]
/// );
/// ```
pub fn bresenham_line(start: Point, end: Point) -> Vec<Point> {
    // Deltas in i64: i32::MIN -> i32::MAX spans 2^32 - 1.
    let dx = (i64::from(end.x) - i64::from(start.x)).abs();
    let dy = (i64::from(end.y) - i64::from(start.y)).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = start.x;
    let mut y = start.y;

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        points.push(Point::new(x, y));

        if x == end.x && y == end.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

// ============================================================================
// Tests
// ============================================================================
