use crate::error::{ParameterError, Result};
use crate::math::vector_2d::{self, lerp};
use crate::math::{Point2, TOLERANCE};

use super::Segment;

/// An open chain of straight segments through two or more vertices.
///
/// Consecutive duplicate vertices are allowed on input; operations that need
/// a direction skip the zero-length pieces they produce.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Invalid` if fewer than 2 points are provided
    /// - `ParameterError::Malformed` if a coordinate is not finite
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(ParameterError::Invalid(format!(
                "a line needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ParameterError::Malformed(format!(
                "non-finite coordinate ({}, {})",
                p.x, p.y
            ))
            .into());
        }
        Ok(Self { points })
    }

    /// Returns the vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Total length along the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| vector_2d::distance(&w[0], &w[1]))
            .sum()
    }

    /// Cumulative length at every vertex, starting with `0.0`.
    #[must_use]
    pub fn cumulative_lengths(&self) -> Vec<f64> {
        let mut acc = 0.0;
        let mut out = Vec::with_capacity(self.points.len());
        out.push(0.0);
        for w in self.points.windows(2) {
            acc += vector_2d::distance(&w[0], &w[1]);
            out.push(acc);
        }
        out
    }

    /// Non-degenerate segments between consecutive vertices.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .filter_map(|w| Segment::new(w[0], w[1]).ok())
            .collect()
    }

    /// Vertices with consecutive duplicates removed.
    #[must_use]
    pub fn deduplicated_points(&self) -> Vec<Point2> {
        let mut out: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if out
                .last()
                .is_none_or(|q| vector_2d::distance(p, q) >= TOLERANCE)
            {
                out.push(*p);
            }
        }
        out
    }

    /// The straight segment from the first to the last vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroLengthSegment` for a closed line.
    pub fn chord(&self) -> Result<Segment> {
        Segment::new(*self.first(), *self.last())
    }

    /// Points at the given arc lengths from the start, clamped to the line.
    ///
    /// The cumulative lengths are computed once for all requests.
    #[must_use]
    pub fn points_at_lengths(&self, lengths: &[f64]) -> Vec<Point2> {
        let cumulative = self.cumulative_lengths();
        lengths
            .iter()
            .map(|&s| {
                let idx = segment_index_at(&cumulative, s);
                let seg_len = cumulative[idx + 1] - cumulative[idx];
                if seg_len < TOLERANCE {
                    return self.points[idx];
                }
                let t = ((s - cumulative[idx]) / seg_len).clamp(0.0, 1.0);
                lerp(&self.points[idx], &self.points[idx + 1], t)
            })
            .collect()
    }
}

impl From<Segment> for Polyline {
    fn from(segment: Segment) -> Self {
        Self {
            points: vec![*segment.start(), *segment.end()],
        }
    }
}

/// Index `i` of the segment `[cumulative[i], cumulative[i + 1]]` containing `s`.
///
/// Values before the start map to the first segment and values past the end
/// to the last one.
fn segment_index_at(cumulative: &[f64], s: f64) -> usize {
    let last = cumulative.len() - 2;
    let upper = cumulative.partition_point(|&c| c < s);
    upper.saturating_sub(1).min(last)
}
