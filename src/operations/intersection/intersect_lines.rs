use crate::error::{IntersectionError, ParameterError, Result};
use crate::geometry::{Circle, Geometry, Segment};
use crate::math::intersect_2d::{
    circle_circle_intersect_2d, line_circle_intersect_2d, line_line_intersect_2d,
};
use crate::math::{coordinate_magnitude, vector_2d, Point2, Tolerance};

use super::Candidates;

/// A curve the solver can intersect: an infinite straight line or a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersectable {
    /// The infinite line through the segment.
    Line(Segment),
    /// A circle, either explicit or the support of a three-point arc.
    Circle(Circle),
}

impl Intersectable {
    /// Reduces a host geometry to something the solver can intersect.
    ///
    /// A line with more than two vertices is taken as the straight line from
    /// its first to its last vertex; a three-point curve as its circle.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Invalid` for points and polygons
    /// - `GeometryError` if the line is closed or the curve is collinear
    pub fn from_geometry(geometry: &Geometry, tol: &Tolerance) -> Result<Self> {
        match geometry {
            Geometry::Segment(s) => Ok(Self::Line(*s)),
            Geometry::Polyline(l) => Ok(Self::Line(l.chord()?)),
            Geometry::CurveApproximation(arc) => Ok(Self::Circle(arc.to_circle(tol)?)),
            Geometry::Point(_) | Geometry::Polygon(_) => Err(ParameterError::Invalid(format!(
                "a {} cannot be intersected",
                geometry.kind_name()
            ))
            .into()),
        }
    }
}

impl From<Segment> for Intersectable {
    fn from(s: Segment) -> Self {
        Self::Line(s)
    }
}

impl From<Circle> for Intersectable {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

/// Intersects two lines, either of which may be a circle.
///
/// Straight lines are treated as infinite, so the crossing may lie beyond
/// the selected segments.
///
/// # Candidate order
///
/// - line × line: one candidate
/// - line × circle: ascending position along the line (start → end)
/// - circle × circle: left of the line from the first center to the second first
#[derive(Debug, Clone)]
pub struct IntersectLines {
    first: Intersectable,
    second: Intersectable,
    tolerance: Tolerance,
}

impl IntersectLines {
    /// Creates a new intersection operation.
    #[must_use]
    pub fn new(first: impl Into<Intersectable>, second: impl Into<Intersectable>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
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
    /// - `IntersectionError::Parallel` for parallel straight lines
    /// - `IntersectionError::Disjoint` when a circle is missed
    /// - `IntersectionError::Concentric` for circles sharing a center
    pub fn execute(&self) -> Result<Candidates> {
        let candidates = solve(&self.first, &self.second, &self.tolerance)?;
        tracing::debug!(candidates = candidates.len(), "line intersection");
        Ok(candidates)
    }
}

/// Intersects a line (straight or curve-derived) with an explicit circle.
#[derive(Debug, Clone)]
pub struct IntersectLineCircle {
    line: Intersectable,
    circle: Circle,
    tolerance: Tolerance,
}

impl IntersectLineCircle {
    /// Creates a new line-circle intersection operation.
    #[must_use]
    pub fn new(line: impl Into<Intersectable>, circle: Circle) -> Self {
        Self {
            line: line.into(),
            circle,
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
    /// A tangent line yields a single candidate, so the host is never asked
    /// to choose between two copies of the same point.
    ///
    /// # Errors
    ///
    /// - `IntersectionError::Disjoint` when the line misses the circle
    /// - `IntersectionError::Concentric` when a curve-derived line shares the
    ///   circle's center
    pub fn execute(&self) -> Result<Candidates> {
        let candidates = solve(
            &self.line,
            &Intersectable::Circle(self.circle),
            &self.tolerance,
        )?;
        tracing::debug!(
            candidates = candidates.len(),
            radius = self.circle.radius(),
            "line-circle intersection"
        );
        Ok(candidates)
    }
}

/// Solves one pair of intersectables.
pub(crate) fn solve(a: &Intersectable, b: &Intersectable, tol: &Tolerance) -> Result<Candidates> {
    match (a, b) {
        (Intersectable::Line(l1), Intersectable::Line(l2)) => {
            let (t, _) =
                line_line_intersect_2d(l1.start(), &l1.delta(), l2.start(), &l2.delta(), tol)
                    .ok_or(IntersectionError::Parallel)?;
            Ok(Candidates::single(l1.start() + l1.delta() * t))
        }
        (Intersectable::Line(line), Intersectable::Circle(circle))
        | (Intersectable::Circle(circle), Intersectable::Line(line)) => {
            let roots = line_circle_intersect_2d(
                line.start(),
                &line.delta(),
                circle.center(),
                circle.radius(),
                tol,
            );
            let points: Vec<Point2> = roots
                .iter()
                .map(|t| line.start() + line.delta() * *t)
                .collect();
            Candidates::from_roots(&points)
        }
        (Intersectable::Circle(c1), Intersectable::Circle(c2)) => {
            let eps = tol.length_eps(
                c1.radius().max(c2.radius()),
                coordinate_magnitude(&[*c1.center(), *c2.center()]),
            );
            if vector_2d::distance(c1.center(), c2.center()) <= eps {
                return Err(IntersectionError::Concentric.into());
            }
            let points = circle_circle_intersect_2d(
                c1.center(),
                c1.radius(),
                c2.center(),
                c2.radius(),
                tol,
            );
            Candidates::from_roots(&points)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::geometry::{Polyline, ThreePointArc};
    use approx::assert_relative_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    #[test]
    fn crossing_lines_extrapolated() {
        // Segments do not touch, their lines cross at (5, 5).
        let c = IntersectLines::new(seg(0.0, 0.0, 1.0, 1.0), seg(10.0, 0.0, 9.0, 1.0))
            .execute()
            .unwrap();
        let p = c.select(None).unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn line_line_is_symmetric() {
        let a = seg(385_012.3, 6_672_001.1, 385_101.7, 6_672_055.9);
        let b = seg(385_050.0, 6_671_990.0, 385_041.2, 6_672_100.4);
        let ab = IntersectLines::new(a, b).execute().unwrap().select(None).unwrap();
        let ba = IntersectLines::new(b, a).execute().unwrap().select(None).unwrap();
        assert_relative_eq!(ab.x, ba.x, epsilon = 1e-6);
        assert_relative_eq!(ab.y, ba.y, epsilon = 1e-6);
    }

    #[test]
    fn parallel_lines_fail() {
        let err = IntersectLines::new(seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 5.0, 1.0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            crate::KimuError::Intersection(IntersectionError::Parallel)
        ));
    }

    #[test]
    fn line_with_arc_uses_circle() {
        // Arc over the top of the circle of radius 2 centered at the origin.
        let arc = ThreePointArc::new(
            Point2::new(-2.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        let tol = Tolerance::default();
        let curve = Intersectable::from_geometry(&Geometry::from(arc), &tol).unwrap();
        // A line below the arc still hits the supporting circle.
        let c = IntersectLines::new(seg(-5.0, -1.0, 5.0, -1.0), curve)
            .execute()
            .unwrap();
        assert_eq!(c.len(), 2);
        let pts = c.points();
        assert!(pts[0].x < pts[1].x);
        for p in pts {
            assert_relative_eq!(p.coords.norm(), 2.0, epsilon = 1e-9);
            assert_relative_eq!(p.y, -1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn two_arcs_intersect_as_circles() {
        let tol = Tolerance::default();
        let a = Intersectable::from_geometry(
            &Geometry::from(ThreePointArc::new(
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(-1.0, 0.0),
            )),
            &tol,
        )
        .unwrap();
        let b = Intersectable::from_geometry(
            &Geometry::from(ThreePointArc::new(
                Point2::new(2.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 0.0),
            )),
            &tol,
        )
        .unwrap();
        let c = IntersectLines::new(a, b).execute().unwrap();
        assert_eq!(c.len(), 2);
        // Left of the center line (0,0) -> (1,0) comes first.
        assert!(c.points()[0].y > 0.0);
    }

    #[test]
    fn polyline_reduces_to_chord() {
        let tol = Tolerance::default();
        let line = Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 7.0),
            Point2::new(10.0, 0.0),
        ])
        .unwrap();
        let l = Intersectable::from_geometry(&Geometry::from(line), &tol).unwrap();
        let c = IntersectLines::new(l, seg(4.0, -1.0, 4.0, 1.0))
            .execute()
            .unwrap();
        let p = c.select(None).unwrap();
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn points_cannot_be_intersected() {
        let err = Intersectable::from_geometry(
            &Geometry::Point(Point2::origin()),
            &Tolerance::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn circle_scenario_ascending() {
        let circle = Circle::new(Point2::origin(), 5.0).unwrap();
        let c = IntersectLineCircle::new(seg(-10.0, 0.0, 10.0, 0.0), circle)
            .execute()
            .unwrap();
        let pts = c.points();
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[0].x, -5.0);
        assert_relative_eq!(pts[1].x, 5.0);
    }

    #[test]
    fn circle_order_follows_line_direction() {
        let circle = Circle::new(Point2::origin(), 5.0).unwrap();
        let c = IntersectLineCircle::new(seg(10.0, 0.0, -10.0, 0.0), circle)
            .execute()
            .unwrap();
        assert_relative_eq!(c.points()[0].x, 5.0);
    }

    #[test]
    fn tangent_line_single_candidate() {
        let circle = Circle::new(Point2::new(100.0, 200.0), 5.0).unwrap();
        let c = IntersectLineCircle::new(seg(90.0, 205.0, 110.0, 205.0), circle)
            .execute()
            .unwrap();
        assert_eq!(c.len(), 1);
        let p = c.select(None).unwrap();
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 205.0);
    }

    #[test]
    fn missed_circle_fails() {
        let circle = Circle::new(Point2::origin(), 5.0).unwrap();
        let err = IntersectLineCircle::new(seg(-10.0, 6.0, 10.0, 6.0), circle)
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoIntersection);
    }

    #[test]
    fn concentric_curve_fails() {
        let circle = Circle::new(Point2::origin(), 5.0).unwrap();
        let other = Circle::new(Point2::origin(), 3.0).unwrap();
        let err = IntersectLineCircle::new(other, circle).execute().unwrap_err();
        assert!(matches!(
            err,
            crate::KimuError::Intersection(IntersectionError::Concentric)
        ));
    }

    #[test]
    fn classification_survives_translation() {
        for (x, y) in [(0.0, 0.0), (385_000.0, 6_672_000.0)] {
            let circle = Circle::new(Point2::new(x, y), 5.0).unwrap();
            let near_top = IntersectLineCircle::new(
                seg(x - 10.0, y + 4.995, x + 10.0, y + 4.995),
                circle,
            )
            .execute()
            .unwrap();
            assert_eq!(near_top.len(), 2, "at ({x}, {y})");
            let pts = near_top.points();
            let half_chord = (25.0_f64 - 4.995 * 4.995).sqrt();
            assert_relative_eq!(pts[0].x - x, -half_chord, epsilon = 1e-6);
            assert_relative_eq!(pts[1].x - x, half_chord, epsilon = 1e-6);

            // Two circles whose centers are 1 mm apart are not concentric.
            let other = Circle::new(Point2::new(x + 0.001, y), 5.0).unwrap();
            let c = IntersectLines::new(circle, other).execute().unwrap();
            assert_eq!(c.len(), 2, "at ({x}, {y})");
        }
    }
}
