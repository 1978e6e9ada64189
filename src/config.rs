//! Rasterizer configuration.
//!
//! Pins the choices the algorithms leave open: the DDA rounding tie-break,
//! what the restricted midpoint line does outside its octant, and which
//! algorithm the [`Rasterize`](crate::render::Rasterize) trait dispatches to.
//!
//! With the `config` feature the configuration can be read from YAML:
//!
//! ```yaml
//! rounding: half_even
//! octant_policy: strict
//! line_algorithm: dda
//! circle_algorithm: bresenham
//! ```

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use std::path::Path;

/// Tie-break used when a DDA coordinate lands exactly on a half-integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Ties round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
    #[default]
    HalfUp,
    /// Ties round away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
    /// Ties round to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    HalfEven,
}

impl Rounding {
    /// Round `value` to an integral `f64` using this tie-break.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::HalfUp => {
                // floor(v + 0.5) misrounds 0.49999999999999994
                let floor = value.floor();
                if value - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            }
            Self::HalfAwayFromZero => value.round(),
            Self::HalfEven => value.round_ties_even(),
        }
    }
}

/// Behavior of the restricted midpoint line outside `0 <= dy <= dx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum OctantPolicy {
    /// Rasterize anyway; output terminates but is geometrically wrong.
    #[default]
    Permissive,
    /// Reject with [`Error::OutOfOctant`](crate::Error::OutOfOctant).
    Strict,
}

/// Line rasterizer selected by [`Rasterize`](crate::render::Rasterize) for a [`Line`](crate::geometry::Line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum LineAlgorithm {
    /// Floating-point digital differential analyzer.
    Dda,
    /// Restricted first-octant midpoint line.
    Midpoint,
    /// General Bresenham line.
    #[default]
    Bresenham,
}

/// Circle rasterizer selected by [`Rasterize`](crate::render::Rasterize) for a [`Circle`](crate::geometry::Circle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum CircleAlgorithm {
    /// Midpoint circle.
    #[default]
    Midpoint,
    /// Bresenham circle.
    Bresenham,
}

/// Rasterizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(default))]
pub struct RasterConfig {
    /// DDA rounding tie-break.
    pub rounding: Rounding,
    /// Midpoint line octant handling.
    pub octant_policy: OctantPolicy,
    /// Algorithm used when rasterizing a [`Line`](crate::geometry::Line).
    pub line_algorithm: LineAlgorithm,
    /// Algorithm used when rasterizing a [`Circle`](crate::geometry::Circle).
    pub circle_algorithm: CircleAlgorithm,
}

impl RasterConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DDA rounding tie-break.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the midpoint line octant policy.
    #[must_use]
    pub fn with_octant_policy(mut self, policy: OctantPolicy) -> Self {
        self.octant_policy = policy;
        self
    }

    /// Set the line algorithm.
    #[must_use]
    pub fn with_line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Set the circle algorithm.
    #[must_use]
    pub fn with_circle_algorithm(mut self, algorithm: CircleAlgorithm) -> Self {
        self.circle_algorithm = algorithm;
        self
    }
}

#[cfg(feature = "config")]
impl RasterConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            log::warn!("rejected raster configuration at line {line}: {e}");
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
