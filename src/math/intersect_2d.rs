use super::vector_2d::{cross, rotate_ccw};
use super::{coordinate_magnitude, Point2, Tolerance, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Lines count as parallel when the sine of the angle between them is within
/// the relative tolerance.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    tol: &Tolerance,
) -> Option<(f64, f64)> {
    let denom = cross(d1, d2);
    if tol.is_zero(denom, d1.norm() * d2.norm()) {
        return None;
    }
    let dp = p2 - p1;
    let t = cross(&dp, d2) / denom;
    let u = cross(&dp, d1) / denom;
    Some((t, u))
}

/// Intersection of the infinite line `origin + t * dir` with a circle.
///
/// Returns the real roots `t` in ascending order: empty when the line misses
/// the circle, one root when it is tangent (within tolerance), two otherwise.
///
/// Substituting the line into `|P - center|² = r²` gives a quadratic in `t`;
/// it is solved in the form `t = t0 ± sqrt(r² - h²)` where `t0` is the foot of
/// the perpendicular from the center and `h` the distance of the center from
/// the line. `h` is compared to `r` with a tolerance relative to the radius,
/// so moving both shapes does not change the root count.
#[must_use]
pub fn line_circle_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    center: &Point2,
    radius: f64,
    tol: &Tolerance,
) -> Vec<f64> {
    let len = dir.norm();
    if len == 0.0 {
        return Vec::new();
    }
    let unit = dir / len;
    let to_center = center - origin;
    let t0 = to_center.dot(&unit);
    let h = cross(&unit, &to_center).abs();

    let coordinates = coordinate_magnitude(&[*origin, *center]).max(to_center.norm());
    let eps = tol.length_eps(radius, coordinates);

    if h > radius + eps {
        return Vec::new();
    }
    if (h - radius).abs() <= eps {
        return vec![t0 / len];
    }

    let half_chord = (radius * radius - h * h).max(0.0).sqrt();
    vec![(t0 - half_chord) / len, (t0 + half_chord) / len]
}

/// Intersection of two circles.
///
/// Returns no points for disjoint, nested or concentric circles, one point for
/// tangent circles and two otherwise. Two points are ordered left of the
/// center line first, looking from `c1` towards `c2`.
#[must_use]
pub fn circle_circle_intersect_2d(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    let delta = c2 - c1;
    let dist = delta.norm();
    let eps = tol.length_eps(r1.max(r2), coordinate_magnitude(&[*c1, *c2]));

    if dist <= eps {
        return Vec::new();
    }

    let outer = r1 + r2;
    let inner = (r1 - r2).abs();
    if dist > outer + eps || dist < inner - eps {
        return Vec::new();
    }

    let unit = delta / dist;
    // Distance from c1 along the center line to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let mid = c1 + unit * a;

    if (dist - outer).abs() <= eps || (dist - inner).abs() <= eps {
        return vec![mid];
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let normal = rotate_ccw(&unit);
    vec![mid + normal * h, mid - normal * h]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    #[test]
    fn line_line_perpendicular() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.5, -1.0);
        let d2 = Vector2::new(0.0, 1.0);
        let (t, u) = line_line_intersect_2d(&p1, &d1, &p2, &d2, &tol()).unwrap();
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(u, 1.0);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.0, 1.0);
        let d2 = Vector2::new(1.0, 0.0);
        assert!(line_line_intersect_2d(&p1, &d1, &p2, &d2, &tol()).is_none());
    }

    #[test]
    fn line_line_parallel_is_scale_free() {
        // Nearly parallel long lines in kilometres and in metres behave the same.
        let d1 = Vector2::new(1000.0, 0.0);
        let d2 = Vector2::new(1000.0, 1e-8);
        let p = Point2::new(0.0, 1.0);
        let o = Point2::origin();
        let km = line_line_intersect_2d(&o, &(d1 / 1000.0), &p, &(d2 / 1000.0), &tol());
        let m = line_line_intersect_2d(&o, &d1, &p, &d2, &tol());
        assert_eq!(km.is_none(), m.is_none());
    }

    #[test]
    fn line_circle_two_roots_ascending() {
        let roots = line_circle_intersect_2d(
            &Point2::new(-10.0, 0.0),
            &Vector2::new(20.0, 0.0),
            &Point2::origin(),
            5.0,
            &tol(),
        );
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 0.25);
        assert_relative_eq!(roots[1], 0.75);
    }

    #[test]
    fn line_circle_tangent_single_root() {
        let roots = line_circle_intersect_2d(
            &Point2::new(-1.0, 1.0),
            &Vector2::new(1.0, 0.0),
            &Point2::origin(),
            1.0,
            &tol(),
        );
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0);
    }

    #[test]
    fn line_circle_miss() {
        let roots = line_circle_intersect_2d(
            &Point2::new(0.0, 3.0),
            &Vector2::new(1.0, 0.0),
            &Point2::origin(),
            1.0,
            &tol(),
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn circle_circle_two_points_left_first() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            1.0,
            &Point2::new(1.0, 0.0),
            1.0,
            &tol(),
        );
        assert_eq!(pts.len(), 2);
        let h = 3.0_f64.sqrt() / 2.0;
        assert_relative_eq!(pts[0].x, 0.5);
        assert_relative_eq!(pts[0].y, h);
        assert_relative_eq!(pts[1].y, -h);
    }

    #[test]
    fn circle_circle_external_tangent() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            1.0,
            &Point2::new(2.0, 0.0),
            1.0,
            &tol(),
        );
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x, 1.0);
        assert_relative_eq!(pts[0].y, 0.0);
    }

    #[test]
    fn circle_circle_internal_tangent() {
        let pts = circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            2.0,
            &Point2::new(1.0, 0.0),
            1.0,
            &tol(),
        );
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x, 2.0);
    }

    #[test]
    fn circle_circle_disjoint_and_nested() {
        assert!(circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            1.0,
            &Point2::new(5.0, 0.0),
            1.0,
            &tol()
        )
        .is_empty());
        assert!(circle_circle_intersect_2d(
            &Point2::new(0.0, 0.0),
            5.0,
            &Point2::new(0.5, 0.0),
            1.0,
            &tol()
        )
        .is_empty());
    }

    const PROJECTED: (f64, f64) = (385_000.0, 6_672_000.0);

    #[test]
    fn line_circle_root_count_survives_translation() {
        for (x, y) in [(0.0, 0.0), PROJECTED] {
            let center = Point2::new(x, y);
            // Chord of about 0.45 m near the top of a 5 m circle.
            let near_top = line_circle_intersect_2d(
                &Point2::new(x - 10.0, y + 4.995),
                &Vector2::new(20.0, 0.0),
                &center,
                5.0,
                &tol(),
            );
            assert_eq!(near_top.len(), 2, "at ({x}, {y})");
            assert!((near_top[1] - near_top[0]) * 20.0 > 0.4);

            let tangent = line_circle_intersect_2d(
                &Point2::new(x - 10.0, y + 5.0),
                &Vector2::new(20.0, 0.0),
                &center,
                5.0,
                &tol(),
            );
            assert_eq!(tangent.len(), 1, "at ({x}, {y})");
        }
    }

    #[test]
    fn circle_circle_count_survives_translation() {
        for (x, y) in [(0.0, 0.0), PROJECTED] {
            // Radii 5 and 5 with centers 9.99 apart: a small but real lens.
            let pts = circle_circle_intersect_2d(
                &Point2::new(x, y),
                5.0,
                &Point2::new(x + 9.99, y),
                5.0,
                &tol(),
            );
            assert_eq!(pts.len(), 2, "at ({x}, {y})");
        }
    }
}
