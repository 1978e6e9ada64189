//! Error types for trueno-raster operations.

use std::fmt;
use thiserror::Error;

use crate::geometry::Point;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Which radius of a shape an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The single radius of a circle.
    Radius,
    /// Horizontal semi-axis (`rx`) of an ellipse.
    Horizontal,
    /// Vertical semi-axis (`ry`) of an ellipse.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radius => f.write_str("radius"),
            Self::Horizontal => f.write_str("rx"),
            Self::Vertical => f.write_str("ry"),
        }
    }
}

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A circle or ellipse radius was negative.
    #[error("Negative {axis}: {radius}")]
    NegativeRadius {
        /// Which radius was rejected.
        axis: Axis,
        /// The rejected value.
        radius: i32,
    },

    /// A real-valued input point contained NaN or an infinity.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X coordinate as given.
        x: f64,
        /// Y coordinate as given.
        y: f64,
    },

    /// A produced coordinate would not fit in the `i32` lattice.
    #[error("Coordinate overflow: {axis_value} is outside the i32 lattice")]
    CoordinateOverflow {
        /// The out-of-range coordinate value.
        axis_value: i64,
    },

    /// The restricted midpoint line was asked for a segment outside the
    /// first octant under [`OctantPolicy::Strict`](crate::config::OctantPolicy::Strict).
    #[error("Segment {start} -> {end} is outside the first octant")]
    OutOfOctant {
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file could not be read.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}

/// Convert a wide intermediate coordinate back onto the lattice.
pub(crate) fn to_lattice(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::CoordinateOverflow { axis_value: value })
}
