use crate::error::{ParameterError, Result};
use crate::geometry::{Geometry, Polygon, Polyline, Segment};
use crate::math::{coordinate_magnitude, span, vector_2d, Point2, Tolerance};

/// Breaks a polygon into its boundary edges.
#[derive(Debug, Clone)]
pub struct ExplodePolygon {
    polygon: Polygon,
}

impl ExplodePolygon {
    /// Creates a new polygon explode operation.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self { polygon }
    }

    /// Returns one segment per boundary edge in ring order, the closing edge
    /// last. Zero-length edges are dropped.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        let edges = self.polygon.edges();
        tracing::debug!(edges = edges.len(), "exploded polygon");
        edges
    }
}

/// Breaks a line into its segments.
#[derive(Debug, Clone)]
pub struct ExplodeLine {
    line: Polyline,
}

impl ExplodeLine {
    /// Creates a new line explode operation.
    #[must_use]
    pub fn new(line: Polyline) -> Self {
        Self { line }
    }

    /// Returns one segment per pair of consecutive vertices, skipping pairs
    /// that coincide.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        let segments = self.line.segments();
        tracing::debug!(segments = segments.len(), "exploded line");
        segments
    }
}

/// Breaks a line into its distinct vertices.
#[derive(Debug, Clone)]
pub struct ExplodeLineToPoints {
    line: Polyline,
    tolerance: Tolerance,
}

impl ExplodeLineToPoints {
    /// Creates a new line-to-points operation.
    #[must_use]
    pub fn new(line: Polyline) -> Self {
        Self {
            line,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the vertices in line order. A vertex that repeats an earlier
    /// one anywhere in the line is reported only at its first occurrence.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let points = self.line.points();
        let eps = self
            .tolerance
            .length_eps(span(points), coordinate_magnitude(points));
        let mut out: Vec<Point2> = Vec::with_capacity(points.len());
        for p in points {
            if !out.iter().any(|q| vector_2d::distance(p, q) <= eps) {
                out.push(*p);
            }
        }
        tracing::debug!(
            vertices = points.len(),
            distinct = out.len(),
            "exploded line to points"
        );
        out
    }
}

/// Breaks any explodable feature into segments.
#[derive(Debug, Clone)]
pub struct Explode {
    geometry: Geometry,
}

impl Explode {
    /// Creates a new explode operation.
    #[must_use]
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
        }
    }

    /// Executes the explode.
    ///
    /// A polygon gives its boundary edges, a line its segments and a single
    /// segment itself.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::Invalid` for points and curves.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        match &self.geometry {
            Geometry::Segment(s) => Ok(vec![*s]),
            Geometry::Polyline(l) => Ok(ExplodeLine::new(l.clone()).execute()),
            Geometry::Polygon(p) => Ok(ExplodePolygon::new(p.clone()).execute()),
            Geometry::Point(_) | Geometry::CurveApproximation(_) => {
                Err(ParameterError::Invalid(format!(
                    "a {} cannot be exploded into segments",
                    self.geometry.kind_name()
                ))
                .into())
            }
        }
    }
}
