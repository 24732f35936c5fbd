use crate::error::{GeometryError, ParameterError, Result};
use crate::math::{vector_2d, Point2, TOLERANCE};

/// A circle in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// - `ParameterError::OutOfRange` if the radius is negative or not finite
    /// - `GeometryError::ZeroRadius` if the radius is zero
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if radius < TOLERANCE {
            return Err(GeometryError::ZeroRadius.into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed distance from `p` to the circle boundary (negative inside).
    #[must_use]
    pub fn boundary_distance(&self, p: &Point2) -> f64 {
        vector_2d::distance(&self.center, p) - self.radius
    }
}
