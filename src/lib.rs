//! # Trueno-Raster
//!
//! Integer rasterization of lines, circles and ellipses onto the pixel lattice.
//!
//! Each rasterizer is a pure function from shape parameters to the ordered
//! list of lattice points that best approximates the ideal curve. Nothing is
//! drawn: callers take the points and do their own blitting, clipping or
//! compositing.
//!
//! ## Features
//!
//! - **Pure Rust**: no framebuffer, no platform dependencies
//! - **Six algorithms**: DDA, midpoint and Bresenham lines; midpoint and
//!   Bresenham circles; two-region midpoint ellipses
//! - **Pinned semantics**: DDA rounding tie-break and midpoint-line octant
//!   handling are explicit configuration, not accidents of the platform
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let line = bresenham_line(Point::new(0, 0), Point::new(3, 1));
//! assert_eq!(line.len(), 4);
//!
//! let circle = midpoint_circle(Point::new(10, 10), 5)?;
//! let unique = dedup_points(&circle);
//! assert!(unique.contains(&Point::new(15, 10)));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): serde derives and YAML loading for [`RasterConfig`]
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.
//!
//! [`RasterConfig`]: crate::config::RasterConfig

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Lattice points and shape requests.
pub mod geometry;

/// Rasterizer configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, circle and ellipse rasterizers.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{CircleAlgorithm, LineAlgorithm, OctantPolicy, RasterConfig, Rounding};
    pub use crate::error::{Axis, Error, Result};
    pub use crate::geometry::{Circle, Ellipse, Line, Point, PointF};
    pub use crate::render::{
        bresenham_circle, bresenham_line, dda_line, dda_line_with, dedup_points, midpoint_circle,
        midpoint_ellipse, midpoint_line, midpoint_line_with, Rasterize,
    };
}

// ============================================================================
// Tests
// ============================================================================
