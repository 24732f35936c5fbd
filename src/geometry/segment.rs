use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{self, rotate_ccw, rotate_cw};
use crate::math::{Point2, Vector2};

/// A directed straight segment from `start` to `end`.
///
/// Zero-length segments cannot be constructed, so [`Segment::direction`] is
/// always a well-defined unit vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroLengthSegment` if `start` and `end` coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if vector_2d::unit_direction(&start, &end).is_none() {
            return Err(GeometryError::ZeroLengthSegment { start, end }.into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        vector_2d::distance(&self.start, &self.end)
    }

    /// Returns the unchecked direction `end - start`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.delta() / self.length()
    }

    /// Unit normal on the left-hand side of the direction of travel.
    #[must_use]
    pub fn left_normal(&self) -> Vector2 {
        rotate_ccw(&self.direction())
    }

    /// Unit normal on the right-hand side of the direction of travel.
    #[must_use]
    pub fn right_normal(&self) -> Vector2 {
        rotate_cw(&self.direction())
    }

    /// Point at signed distance `d` from the start, measured along the direction.
    ///
    /// Distances below zero or beyond [`Segment::length`] extrapolate along
    /// the supporting line.
    #[must_use]
    pub fn point_at_distance(&self, d: f64) -> Point2 {
        vector_2d::translate(&self.start, &self.direction(), d)
    }

    /// Signed distance along the segment's line of the projection of `p`.
    #[must_use]
    pub fn project(&self, p: &Point2) -> f64 {
        vector_2d::project(p, &self.start, &self.direction())
    }

    /// Returns the same segment traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
