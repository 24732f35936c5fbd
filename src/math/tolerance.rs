use crate::error::{ParameterError, Result};

use super::TOLERANCE;

/// Units in the last place of the largest coordinate that rounding may cost
/// a length computed from coordinate differences.
const ROUNDING_ULPS: f64 = 16.0;

/// Relative tolerance used to classify near-degenerate cases.
///
/// Thresholds are `relative * size`, where the size is a length of the shape
/// itself (a radius, a segment or line length, a span). Sizes do not change
/// when the shape is moved, so the same geometry classifies identically at
/// the origin and at projected coordinates in the millions, and whether it
/// is expressed in metres or in kilometres. The coordinate magnitude only
/// enters as a rounding floor, see [`Tolerance::length_eps`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    relative: f64,
}

impl Tolerance {
    /// Default relative tolerance.
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    /// Creates a tolerance with the given relative factor.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` unless `relative` is finite and
    /// in `[0, 1)`.
    pub fn new(relative: f64) -> Result<Self> {
        if !(relative.is_finite() && (0.0..1.0).contains(&relative)) {
            return Err(ParameterError::OutOfRange {
                parameter: "relative tolerance",
                value: relative,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(Self { relative })
    }

    /// Returns the relative factor.
    #[must_use]
    pub fn relative(&self) -> f64 {
        self.relative
    }

    /// Absolute threshold for quantities of the given magnitude.
    ///
    /// Never drops below [`TOLERANCE`] scaled by the relative factor, so that
    /// all-zero inputs still get a usable threshold.
    #[must_use]
    pub fn scaled(&self, magnitude: f64) -> f64 {
        self.relative * magnitude.abs().max(TOLERANCE)
    }

    /// Returns `true` if `value` is zero relative to `magnitude`.
    #[must_use]
    pub fn is_zero(&self, value: f64, magnitude: f64) -> bool {
        value.abs() <= self.scaled(magnitude)
    }

    /// Threshold for comparing lengths of a shape of the given `size` whose
    /// coordinates reach up to `coordinates` in absolute value.
    ///
    /// The relative part follows `size` only. `coordinates` sets a floor of a
    /// few units in the last place, below which differences are rounding
    /// noise from subtracting large coordinates.
    #[must_use]
    pub fn length_eps(&self, size: f64, coordinates: f64) -> f64 {
        self.scaled(size).max(rounding_floor(coordinates))
    }
}

/// Smallest meaningful length difference at the given coordinate magnitude.
#[must_use]
pub fn rounding_floor(coordinates: f64) -> f64 {
    ROUNDING_ULPS * f64::EPSILON * coordinates.abs()
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: Self::DEFAULT_RELATIVE,
        }
    }
}
