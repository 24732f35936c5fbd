use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::Polyline;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::vector_2d::{self, rotate_ccw};
use crate::math::{Point2, Tolerance, Vector2, TOLERANCE};

/// When `cos(angle between consecutive segments) < this`, the line doubles
/// back on itself and the corner is beveled without trying a miter.
const REVERSAL_COS: f64 = -0.98;

/// Maximum miter distance as a multiple of `|distance|`. When the miter
/// extends further than this, a bevel (two points) is used instead.
pub const MITER_LIMIT: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Displacement {
    Perpendicular(f64),
    Vector(Vector2),
}

/// Moves a line sideways or by a fixed vector.
///
/// # Sign Convention
///
/// - Positive distance: left of the walking direction
/// - Negative distance: right
///
/// Every segment is moved along its own normal. Interior vertices go to the
/// crossing of the two neighbouring moved segments (a miter), so the result
/// stays connected. Corners sharper than [`MITER_LIMIT`] allows are beveled
/// into two points.
#[derive(Debug, Clone)]
pub struct LineDisplacement {
    line: Polyline,
    displacement: Displacement,
    tolerance: Tolerance,
}

impl LineDisplacement {
    /// Creates a perpendicular displacement by signed `distance`.
    #[must_use]
    pub fn new(line: Polyline, distance: f64) -> Self {
        Self {
            line,
            displacement: Displacement::Perpendicular(distance),
            tolerance: Tolerance::default(),
        }
    }

    /// Creates a rigid translation of every vertex by `(dx, dy)`.
    #[must_use]
    pub fn by_vector(line: Polyline, dx: f64, dy: f64) -> Self {
        Self {
            line,
            displacement: Displacement::Vector(Vector2::new(dx, dy)),
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the displacement.
    ///
    /// A zero distance returns the line unchanged.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Invalid` if the distance or vector is not finite
    /// - `GeometryError::Degenerate` if the line has no segment of non-zero
    ///   length
    pub fn execute(&self) -> Result<Polyline> {
        match self.displacement {
            Displacement::Vector(v) => {
                if !(v.x.is_finite() && v.y.is_finite()) {
                    return Err(ParameterError::Invalid(format!(
                        "displacement ({}, {}) is not finite",
                        v.x, v.y
                    ))
                    .into());
                }
                let moved = self.line.points().iter().map(|p| p + v).collect();
                Polyline::new(moved)
            }
            Displacement::Perpendicular(distance) => {
                if !distance.is_finite() {
                    return Err(ParameterError::Invalid(format!(
                        "displacement distance {distance} is not finite"
                    ))
                    .into());
                }
                let points = self.line.deduplicated_points();
                if points.len() < 2 {
                    return Err(GeometryError::Degenerate(
                        "line has no segment to displace".to_owned(),
                    )
                    .into());
                }
                if distance.abs() < TOLERANCE {
                    return Ok(self.line.clone());
                }
                let moved = offset_points(&points, distance, &self.tolerance);
                tracing::debug!(
                    vertices = points.len(),
                    displaced = moved.len(),
                    distance,
                    "displaced line"
                );
                Polyline::new(moved)
            }
        }
    }
}

/// Offsets an open chain of distinct consecutive points.
fn offset_points(points: &[Point2], distance: f64, tol: &Tolerance) -> Vec<Point2> {
    let mut offset_segments: Vec<(Point2, Point2)> = Vec::with_capacity(points.len() - 1);
    let mut directions: Vec<Vector2> = Vec::with_capacity(points.len() - 1);

    for w in points.windows(2) {
        let Some(dir) = vector_2d::unit_direction(&w[0], &w[1]) else {
            continue;
        };
        let offset = rotate_ccw(&dir) * distance;
        offset_segments.push((w[0] + offset, w[1] + offset));
        directions.push(dir);
    }

    let mut raw = Vec::with_capacity(points.len() * 2);
    raw.push(offset_segments[0].0);
    for i in 1..offset_segments.len() {
        push_corner(
            &mut raw,
            &offset_segments[i - 1],
            &offset_segments[i],
            &directions[i - 1],
            &directions[i],
            distance,
            tol,
        );
    }
    raw.push(offset_segments[offset_segments.len() - 1].1);
    raw
}

/// Emits the displaced corner between two consecutive offset segments.
fn push_corner(
    raw: &mut Vec<Point2>,
    seg_prev: &(Point2, Point2),
    seg_next: &(Point2, Point2),
    dir_prev: &Vector2,
    dir_next: &Vector2,
    distance: f64,
    tol: &Tolerance,
) {
    if dir_prev.dot(dir_next) < REVERSAL_COS {
        raw.push(seg_prev.1);
        raw.push(seg_next.0);
        return;
    }

    // Collinear neighbours share their offset endpoint.
    let Some((t, _)) = line_line_intersect_2d(&seg_prev.1, dir_prev, &seg_next.0, dir_next, tol)
    else {
        raw.push(seg_prev.1);
        return;
    };

    let corner = seg_prev.1 + dir_prev * t;
    let original = seg_prev.1 - rotate_ccw(dir_prev) * distance;
    if vector_2d::distance(&corner, &original) > MITER_LIMIT * distance.abs() {
        tracing::trace!(x = original.x, y = original.y, "beveled sharp corner");
        raw.push(seg_prev.1);
        raw.push(seg_next.0);
    } else {
        raw.push(corner);
    }
}
