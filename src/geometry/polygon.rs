use crate::error::{GeometryError, ParameterError, Result};
use crate::math::{vector_2d, Point2, TOLERANCE};

use super::Segment;

/// A simple polygon boundary stored as a closed ring (first vertex == last).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its boundary vertices.
    ///
    /// An open ring is closed by repeating its first vertex.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Malformed` if a coordinate is not finite
    /// - `GeometryError::Degenerate` if the ring has fewer than 3 distinct
    ///   vertices
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ParameterError::Malformed(format!(
                "non-finite coordinate ({}, {})",
                p.x, p.y
            ))
            .into());
        }
        let distinct = distinct_count(&points);
        if distinct < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 distinct vertices, got {distinct}"
            ))
            .into());
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if vector_2d::distance(&first, &last) >= TOLERANCE {
            points.push(first);
        }
        Ok(Self { ring: points })
    }

    /// Returns the closed ring (first vertex repeated at the end).
    #[must_use]
    pub fn ring(&self) -> &[Point2] {
        &self.ring
    }

    /// Boundary edges in ring order, including the closing edge.
    ///
    /// Zero-length edges from repeated vertices are skipped.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        self.ring
            .windows(2)
            .filter_map(|w| Segment::new(w[0], w[1]).ok())
            .collect()
    }

}

fn distinct_count(points: &[Point2]) -> usize {
    let mut seen: Vec<&Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !seen.iter().any(|q| vector_2d::distance(p, q) < TOLERANCE) {
            seen.push(p);
        }
    }
    seen.len()
}
