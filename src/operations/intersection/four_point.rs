use crate::error::{IntersectionError, ParameterError, Result};
use crate::geometry::Segment;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::{coordinate_magnitude, span, vector_2d, Point2, Tolerance};

use super::{CandidateTag, Candidates, IntersectionCandidate, Partition};

/// Intersection of two lines that are each given only by two of four points.
///
/// Which points belong together is unknown, so every way of splitting the
/// four points into two pairs is tried: `{ab|cd}`, `{ac|bd}` and `{ad|bc}`.
/// Each partition whose two lines are proper and not parallel contributes one
/// candidate, in that order. Candidates that coincide with an earlier one are
/// reported once.
#[derive(Debug, Clone)]
pub struct FourPointIntersect {
    points: Vec<Point2>,
    tolerance: Tolerance,
}

impl FourPointIntersect {
    /// Creates a new four-point intersection operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Invalid` unless exactly 4 points are given, or if no
    ///   partition forms two proper lines
    /// - `IntersectionError::Parallel` if every partition gives parallel lines
    pub fn execute(&self) -> Result<Candidates> {
        if self.points.len() != 4 {
            return Err(ParameterError::Invalid(format!(
                "four-point intersection needs exactly 4 points, got {}",
                self.points.len()
            ))
            .into());
        }

        let tol = &self.tolerance;
        let eps = tol.length_eps(span(&self.points), coordinate_magnitude(&self.points));
        let mut items: Vec<IntersectionCandidate> = Vec::with_capacity(3);
        let mut proper_partitions = 0;

        for partition in Partition::ALL {
            let [(a, b), (c, d)] = partition.pairs();
            let (Ok(l1), Ok(l2)) = (
                Segment::new(self.points[a], self.points[b]),
                Segment::new(self.points[c], self.points[d]),
            ) else {
                tracing::trace!(?partition, "skipping partition with coincident points");
                continue;
            };
            proper_partitions += 1;

            let Some((t, _)) =
                line_line_intersect_2d(l1.start(), &l1.delta(), l2.start(), &l2.delta(), tol)
            else {
                tracing::trace!(?partition, "skipping parallel partition");
                continue;
            };
            let point = l1.start() + l1.delta() * t;

            if items
                .iter()
                .any(|c| vector_2d::distance(&c.point, &point) <= eps)
            {
                tracing::trace!(?partition, "skipping coincident candidate");
                continue;
            }

            items.push(IntersectionCandidate {
                point,
                tag: CandidateTag::Partition(partition),
            });
        }

        if proper_partitions == 0 {
            return Err(ParameterError::Invalid(
                "the points cannot be paired into two lines".to_owned(),
            )
            .into());
        }

        let candidates = Candidates::from_items(items).ok_or(IntersectionError::Parallel)?;
        tracing::debug!(candidates = candidates.len(), "four-point intersection");
        Ok(candidates)
    }
}
