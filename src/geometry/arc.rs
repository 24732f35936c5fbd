use crate::error::{GeometryError, Result};
use crate::math::circle_2d::circumcircle;
use crate::math::vector_2d::{cross, rotate_ccw, rotate_cw};
use crate::math::{Point2, Tolerance};

use super::{Circle, Segment};

/// A circular arc given by three points on it: start, a point in between, end.
///
/// For intersections the arc stands for its whole supporting circle, so an
/// intersection may lie outside the swept part.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointArc {
    pub start: Point2,
    pub mid: Point2,
    pub end: Point2,
}

impl ThreePointArc {
    /// Creates a new arc from three points.
    #[must_use]
    pub fn new(start: Point2, mid: Point2, end: Point2) -> Self {
        Self { start, mid, end }
    }

    /// Returns the unique circle through the three points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Collinear` if the points are collinear.
    pub fn to_circle(&self, tol: &Tolerance) -> Result<Circle> {
        let (center, radius) =
            circumcircle(&self.start, &self.mid, &self.end, tol).ok_or(GeometryError::Collinear)?;
        Circle::new(center, radius)
    }

    /// Returns `true` if the arc turns counter-clockwise from start to end.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        cross(&(self.mid - self.start), &(self.end - self.mid)) > 0.0
    }

    /// Tangent at the start point, pointing in the direction of travel.
    ///
    /// The returned segment starts at the arc start and is one radius long.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Collinear` if the points are collinear.
    pub fn start_tangent(&self, tol: &Tolerance) -> Result<Segment> {
        self.tangent_at(&self.start, tol)
    }

    /// Tangent at the end point, pointing in the direction of travel.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Collinear` if the points are collinear.
    pub fn end_tangent(&self, tol: &Tolerance) -> Result<Segment> {
        self.tangent_at(&self.end, tol)
    }

    fn tangent_at(&self, p: &Point2, tol: &Tolerance) -> Result<Segment> {
        let circle = self.to_circle(tol)?;
        let radial = p - circle.center();
        let tangent = if self.is_ccw() {
            rotate_ccw(&radial)
        } else {
            rotate_cw(&radial)
        };
        Segment::new(*p, p + tangent)
    }
}
