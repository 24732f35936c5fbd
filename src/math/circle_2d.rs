use super::vector_2d::cross;
use super::{Point2, Tolerance};

/// Circle through three points.
///
/// Returns `(center, radius)`, or `None` if the points are collinear (which
/// includes any two of them coinciding). Collinearity is judged by the sine of
/// the angle at `a`, so the test does not depend on coordinate units.
///
/// Coordinates are taken relative to `a` before solving, which keeps the
/// result accurate for projected coordinates with large offsets.
#[must_use]
pub fn circumcircle(a: &Point2, b: &Point2, c: &Point2, tol: &Tolerance) -> Option<(Point2, f64)> {
    let ab = b - a;
    let ac = c - a;
    let det = cross(&ab, &ac);
    let scale = ab.norm() * ac.norm();
    if scale == 0.0 || tol.is_zero(det, scale) {
        return None;
    }

    let ab_sq = ab.norm_squared();
    let ac_sq = ac.norm_squared();
    let d = 2.0 * det;
    let ux = (ac.y * ab_sq - ab.y * ac_sq) / d;
    let uy = (ab.x * ac_sq - ac.x * ab_sq) / d;

    let center = Point2::new(a.x + ux, a.y + uy);
    let radius = ux.hypot(uy);
    Some((center, radius))
}
